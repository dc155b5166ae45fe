#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod cli;
pub mod data;
pub mod view;

pub use app::App;

pub mod prelude {
    pub use crate::data::PathPlot;
    pub use crate::view::{colors, Draw, PathView};
}
