#![allow(non_snake_case)]

pub mod config;
pub mod error;
pub mod record;
pub mod scene;
pub mod uncertainty;
pub mod util;

pub mod prelude {
    pub use crate::config::UncertaintyConfig;
    pub use crate::error::{ConfigError, LoadError};
    pub use crate::record::{load_records, read_records, PathRecord};
    pub use crate::scene::{CovarianceSource, PathUncertainty, SkippedEllipse};
    pub use crate::uncertainty::{
        confidence_ellipse, covariance_to_precision, estimate_covariances, update_covariance,
        Degeneracy, EllipseParams, PropagationMode, DEFAULT_CHI_SQUARE, DEFAULT_NOISE_FACTOR,
    };
    pub use crate::util::*;
    pub use nalgebra;
    pub use nalgebra::{matrix, vector};
}

pub use prelude::*;
