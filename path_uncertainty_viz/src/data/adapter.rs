use egui_plot::PlotPoints;
use path_uncertainty_algo as pu;

/// Allows converting path data into [`egui`] [`PlotPoints`].
///
/// This is convenience trait for plotting on [`egui`] [`Plot`](egui_plot::Plot)
pub trait PathPlot {
    fn plot_points(&self) -> PlotPoints<'static>;
}

impl PathPlot for [pu::Vector2] {
    fn plot_points(&self) -> PlotPoints<'static> {
        PlotPoints::new(self.iter().map(|p| [p.x, p.y]).collect())
    }
}

impl PathPlot for pu::Vector2 {
    fn plot_points(&self) -> PlotPoints<'static> {
        PlotPoints::new(vec![[self.x, self.y]])
    }
}

/// Number of segments used to approximate an ellipse outline
pub const ELLIPSE_SEGMENTS: usize = 64;

impl PathPlot for pu::EllipseParams {
    fn plot_points(&self) -> PlotPoints<'static> {
        PlotPoints::new(self.outline(ELLIPSE_SEGMENTS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_points() {
        let path = vec![
            pu::Vector2::new(0.0, 0.0),
            pu::Vector2::new(1.0, 0.5),
            pu::Vector2::new(2.0, 1.0),
        ];
        let points = path.as_slice().plot_points();
        let points = points.points();

        assert_eq!(points.len(), 3);
        assert_eq!(points[1].x, 1.0);
        assert_eq!(points[1].y, 0.5);
    }

    #[test]
    fn test_ellipse_points_closed() {
        let ellipse = pu::EllipseParams {
            center: pu::Vector2::new(0.0, 0.0),
            width: 2.0,
            height: 1.0,
            angle_degrees: 0.0,
        };
        let points = ellipse.plot_points();
        let points = points.points();

        assert_eq!(points.len(), ELLIPSE_SEGMENTS + 1);
        approx::assert_abs_diff_eq!(points[0].x, 1.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(points[ELLIPSE_SEGMENTS].x, 1.0, epsilon = 1e-12);
    }
}
