//! Reusable UI control groups for the path view.

use egui::Ui;
use path_uncertainty_algo::{PathUncertainty, PropagationMode};

/// Display toggles for visualization options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayToggles {
    /// Show the path line and endpoints
    pub path: bool,
    /// Show ellipses of the recorded covariances
    pub recorded: bool,
    /// Show ellipses of the estimated covariances
    pub estimated: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            path: true,
            recorded: true,
            estimated: true,
        }
    }
}

/// Draw display toggles UI group.
pub fn display_toggles_ui(ui: &mut Ui, toggles: &mut DisplayToggles) {
    ui.group(|ui| {
        ui.label("Display:");
        ui.checkbox(&mut toggles.path, "Path");
        ui.checkbox(&mut toggles.recorded, "Recorded");
        ui.checkbox(&mut toggles.estimated, "Estimated");
    });
}

/// Draw a summary of the loaded path and the parameters it was built with.
pub fn summary_ui(ui: &mut Ui, scene: &PathUncertainty) {
    let config = scene.config();
    let mode = match config.propagation {
        PropagationMode::Accumulate => "accumulate",
        PropagationMode::AnchorToRecorded => "anchor to recorded",
    };

    ui.group(|ui| {
        ui.label(format!("Steps: {}", scene.len()));
        ui.label(format!("Skipped ellipses: {}", scene.skipped().len()));
        ui.separator();
        ui.label(format!("chi²: {:.3}", config.chi_square));
        ui.label(format!("Noise factor: {:.4}", config.noise_factor));
        ui.label(format!("Propagation: {}", mode));
    });
}
