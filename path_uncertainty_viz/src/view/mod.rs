//! Drawing a [`PathUncertainty`] onto an [`egui_plot`] scene.

pub mod ui_builders;
pub mod visualization;

use egui::Ui;
use egui_plot::PlotUi;
use path_uncertainty_algo::{CovarianceSource, PathUncertainty};

pub use ui_builders::{display_toggles_ui, summary_ui, DisplayToggles};
pub use visualization::{colors, draw_confidence_ellipse, draw_endpoint, draw_path};

/// Trait to allow visually representing data (plot graphics + GUI)
pub trait Draw {
    /// Draw onto a 2D scene
    fn scene(&self, plot_ui: &mut PlotUi<'_>);
    /// Draw any GUI elements to interact with the view
    fn options(&mut self, ui: &mut Ui);
}

/// A path with its recorded and estimated confidence ellipses
pub struct PathView {
    data: PathUncertainty,
    toggles: DisplayToggles,
}

impl PathView {
    pub fn new(data: PathUncertainty) -> Self {
        Self {
            data,
            toggles: DisplayToggles::default(),
        }
    }

    pub fn data(&self) -> &PathUncertainty {
        &self.data
    }

    fn draw_ellipses(&self, plot_ui: &mut PlotUi<'_>, source: CovarianceSource) {
        let (name, color) = match source {
            CovarianceSource::Recorded => ("Recorded covariance", colors::RECORDED),
            CovarianceSource::Estimated => ("Estimated covariance", colors::ESTIMATED),
        };
        for (_, ellipse) in self.data.ellipses_for(source) {
            draw_confidence_ellipse(plot_ui, name, ellipse, color);
        }
    }
}

impl Draw for PathView {
    fn scene(&self, plot_ui: &mut PlotUi<'_>) {
        if self.toggles.path {
            draw_path(plot_ui, "Path", self.data.positions(), colors::PATH);
            if let Some(start) = self.data.start() {
                draw_endpoint(plot_ui, "Start", start, colors::START);
            }
            if let Some(goal) = self.data.goal() {
                draw_endpoint(plot_ui, "Goal", goal, colors::GOAL);
            }
        }
        if self.toggles.recorded {
            self.draw_ellipses(plot_ui, CovarianceSource::Recorded);
        }
        if self.toggles.estimated {
            self.draw_ellipses(plot_ui, CovarianceSource::Estimated);
        }
    }

    fn options(&mut self, ui: &mut Ui) {
        display_toggles_ui(ui, &mut self.toggles);
        summary_ui(ui, &self.data);
    }
}
