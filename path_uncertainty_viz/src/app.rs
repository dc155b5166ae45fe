use crate::view::{Draw, PathView};

use eframe::egui;
use egui_plot::{Corner, Legend, Plot};
use path_uncertainty_algo::PathUncertainty;

/// Window title of the plot
pub const TITLE: &str = "Path with Confidence Ellipsoids";

pub struct App {
    view: PathView,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data: PathUncertainty) -> Self {
        apply_style(&cc.egui_ctx);
        Self {
            view: PathView::new(data),
        }
    }
}

/// Set the visuals once, when the app is created.
pub fn apply_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("options").show(ctx, |ui| {
            ui.heading(TITLE);
            ui.separator();
            self.view.options(ui);
            ui.separator();
            ui.collapsing("Instructions", |ui| {
                ui.label("Pan by dragging, or scroll (+ shift = horizontal).");
                ui.label("Box zooming: Right click to zoom in and zoom out using a selection.");
                if cfg!(target_os = "macos") {
                    ui.label("Zoom with ctrl / ⌘ + scroll.");
                } else {
                    ui.label("Zoom with ctrl + scroll.");
                }
                ui.label("Reset view with double-click.");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("Scene")
                .legend(Legend::default().position(Corner::RightTop))
                .x_axis_label("x")
                .y_axis_label("y")
                .data_aspect(1.0)
                .show(ui, |plot_ui| self.view.scene(plot_ui));
        });
    }
}
