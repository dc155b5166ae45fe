mod adapter;

pub use adapter::{PathPlot, ELLIPSE_SEGMENTS};
