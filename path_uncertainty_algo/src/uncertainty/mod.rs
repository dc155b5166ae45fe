//! Covariance geometry and propagation
//!
//! - [`ellipse`]: confidence ellipse parameters from a precision matrix
//! - [`propagation`]: distance-proportional covariance growth along a path

pub mod ellipse;
pub mod propagation;

pub use ellipse::{
    confidence_ellipse, covariance_to_precision, Degeneracy, EllipseParams, DEFAULT_CHI_SQUARE,
};
pub use propagation::{
    estimate_covariances, update_covariance, PropagationMode, DEFAULT_NOISE_FACTOR,
};
