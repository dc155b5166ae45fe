//! Distance-proportional covariance propagation
//!
//! Every step adds isotropic noise proportional to the distance travelled
//! since the previous state. There is no decay and no upper bound.

use crate::util::{distance, Matrix2, Vector2};

/// Noise added to each variance per unit of distance travelled.
pub const DEFAULT_NOISE_FACTOR: f64 = 0.01;

/// Which covariance each step grows from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropagationMode {
    /// Grow from the previous estimate. Uncertainty accumulates along the
    /// whole path and only the first recorded covariance is used as a seed.
    #[default]
    Accumulate,
    /// Grow from the previous recorded covariance, so each estimate is one
    /// step of noise away from the recorded sequence.
    AnchorToRecorded,
}

/// Add `noise_factor * ||current - previous||` to both variances of `prev`.
///
/// A stationary step returns `prev` unchanged.
pub fn update_covariance(
    prev: &Matrix2,
    current: &Vector2,
    previous: &Vector2,
    noise_factor: f64,
) -> Matrix2 {
    let noise = Matrix2::identity() * (distance(current, previous) * noise_factor);
    prev + noise
}

/// Run [`update_covariance`] over a path.
///
/// The first estimate equals `recorded[0]`. Both slices are indexed by step
/// and must have the same length.
pub fn estimate_covariances(
    states: &[Vector2],
    recorded: &[Matrix2],
    noise_factor: f64,
    mode: PropagationMode,
) -> Vec<Matrix2> {
    debug_assert_eq!(states.len(), recorded.len());

    let Some(seed) = recorded.first() else {
        return Vec::new();
    };

    let mut estimates = Vec::with_capacity(recorded.len());
    estimates.push(*seed);

    for i in 1..states.len().min(recorded.len()) {
        let prev = match mode {
            PropagationMode::Accumulate => estimates[i - 1],
            PropagationMode::AnchorToRecorded => recorded[i - 1],
        };
        let p_hat = update_covariance(&prev, &states[i], &states[i - 1], noise_factor);
        tracing::debug!(
            step = i,
            p11 = p_hat[(0, 0)],
            p12 = p_hat[(0, 1)],
            p22 = p_hat[(1, 1)],
            "propagated covariance"
        );
        estimates.push(p_hat);
    }

    estimates
}
