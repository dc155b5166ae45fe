//! Visualization helpers for the path, its endpoints and confidence ellipses.

use egui::{Color32, Stroke};
use egui_plot::{Line, MarkerShape, PlotUi, Points, Polygon};
use path_uncertainty_algo::{EllipseParams, Vector2};

use crate::data::PathPlot;

/// Draw the path as a connected line with a marker on every step.
///
/// # Arguments
/// * `plot_ui` - The plot UI to draw on
/// * `name` - Legend entry shared by the line and its markers
/// * `positions` - Path positions in step order
/// * `color` - Line and marker color
pub fn draw_path(plot_ui: &mut PlotUi<'_>, name: &str, positions: &[Vector2], color: Color32) {
    plot_ui.line(Line::new(name, positions.plot_points()).color(color).width(1.5));
    plot_ui.points(
        Points::new(name, positions.plot_points())
            .shape(MarkerShape::Circle)
            .radius(3.0)
            .filled(true)
            .color(color),
    );
}

/// Draw a single large marker, used for the start and goal of the path.
pub fn draw_endpoint(plot_ui: &mut PlotUi<'_>, name: &str, position: &Vector2, color: Color32) {
    plot_ui.points(
        Points::new(name, position.plot_points())
            .shape(MarkerShape::Circle)
            .radius(7.0)
            .filled(true)
            .color(color),
    );
}

/// Draw the outline of a confidence ellipse without fill.
///
/// # Arguments
/// * `plot_ui` - The plot UI to draw on
/// * `name` - Legend entry, shared by all ellipses of the same family
/// * `ellipse` - Ellipse geometry
/// * `color` - Stroke color
pub fn draw_confidence_ellipse(
    plot_ui: &mut PlotUi<'_>,
    name: &str,
    ellipse: &EllipseParams,
    color: Color32,
) {
    plot_ui.polygon(
        Polygon::new(name, ellipse.plot_points())
            .stroke(Stroke::new(1.0, color))
            .fill_color(Color32::TRANSPARENT),
    );
}

/// Standard colors for the path scene.
pub mod colors {
    use egui::Color32;

    /// Path line and step markers (orange)
    pub const PATH: Color32 = Color32::from_rgb(255, 165, 0);

    /// Start marker (green)
    pub const START: Color32 = Color32::from_rgb(50, 205, 50);

    /// Goal marker (red)
    pub const GOAL: Color32 = Color32::from_rgb(220, 20, 60);

    /// Ellipses of the recorded covariances (royal blue)
    pub const RECORDED: Color32 = Color32::from_rgb(65, 105, 225);

    /// Ellipses of the estimated covariances (light gray)
    pub const ESTIMATED: Color32 = Color32::from_rgb(200, 200, 200);
}
