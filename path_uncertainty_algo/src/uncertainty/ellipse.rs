//! Confidence ellipse geometry
//!
//! A covariance matrix is turned into an ellipse by its eigendecomposition:
//! the eigenvectors give the axis directions and the eigenvalues, scaled by a
//! chi-square value, give the axis lengths.

use nalgebra::SymmetricEigen;
use thiserror::Error;

use crate::util::{Matrix2, Vector2};

/// Default chi-square scale for drawn ellipses.
pub const DEFAULT_CHI_SQUARE: f64 = 0.8;

/// Reason a covariance could not be turned into an ellipse.
///
/// This is a per-record outcome. Callers decide whether to skip, log or abort.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    /// The matrix has no inverse.
    #[error("matrix is singular")]
    Singular,

    /// The covariance is not positive-definite.
    #[error("non-positive eigenvalues ({major}, {minor})")]
    NonPositiveEigenvalue { major: f64, minor: f64 },
}

/// Parameters of a confidence ellipse in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams {
    /// Ellipse center
    pub center: Vector2,
    /// Full length of the major axis
    pub width: f64,
    /// Full length of the minor axis
    pub height: f64,
    /// Rotation of the major axis from the x-axis, in degrees
    pub angle_degrees: f64,
}

impl EllipseParams {
    pub fn semi_major(&self) -> f64 {
        self.width / 2.0
    }

    pub fn semi_minor(&self) -> f64 {
        self.height / 2.0
    }

    /// Closed outline of the ellipse as `n_points + 1` points (first == last).
    pub fn outline(&self, n_points: usize) -> Vec<[f64; 2]> {
        let a = self.semi_major();
        let b = self.semi_minor();
        let (sin_ang, cos_ang) = self.angle_degrees.to_radians().sin_cos();
        let n_points = n_points.max(3);

        (0..=n_points)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / n_points as f64;
                let ex = a * t.cos();
                let ey = b * t.sin();
                // Rotate and translate
                [
                    ex * cos_ang - ey * sin_ang + self.center.x,
                    ex * sin_ang + ey * cos_ang + self.center.y,
                ]
            })
            .collect()
    }
}

/// Pivoted LU inverse. No determinant is formed, so extreme scales stay finite.
fn invert(m: &Matrix2) -> Result<Matrix2, Degeneracy> {
    m.lu().try_inverse().ok_or(Degeneracy::Singular)
}

/// Invert a covariance into the precision matrix expected by [`confidence_ellipse`].
pub fn covariance_to_precision(cov: &Matrix2) -> Result<Matrix2, Degeneracy> {
    invert(cov)
}

/// Compute the confidence ellipse of a Gaussian from its precision matrix.
///
/// The precision matrix is inverted back to a covariance before the
/// eigendecomposition. `width` and `height` are `2 * sqrt(lambda * chi_square)`
/// for the larger and smaller eigenvalue respectively.
///
/// # Arguments
/// * `center` - Ellipse center
/// * `precision` - Inverse of the covariance matrix
/// * `chi_square` - Scale controlling the confidence level
pub fn confidence_ellipse(
    center: Vector2,
    precision: &Matrix2,
    chi_square: f64,
) -> Result<EllipseParams, Degeneracy> {
    let cov = invert(precision)?;

    let eigen = SymmetricEigen::new(cov);
    let eigenvalues = eigen.eigenvalues;
    let eigenvectors = eigen.eigenvectors;

    // Sort descending
    let (i_major, i_minor) = if eigenvalues[0] >= eigenvalues[1] {
        (0, 1)
    } else {
        (1, 0)
    };
    let major = eigenvalues[i_major];
    let minor = eigenvalues[i_minor];

    // NaN fails the comparison as well
    if !(major > 0.0 && minor > 0.0) {
        return Err(Degeneracy::NonPositiveEigenvalue { major, minor });
    }

    let axis = eigenvectors.column(i_major);
    let angle_degrees = axis[1].atan2(axis[0]).to_degrees();

    Ok(EllipseParams {
        center,
        width: 2.0 * (major * chi_square).sqrt(),
        height: 2.0 * (minor * chi_square).sqrt(),
        angle_degrees,
    })
}
