//! Builds everything needed to draw a path with its confidence ellipses.
//!
//! [`PathUncertainty::from_records`] is the whole pipeline minus the drawing:
//! it propagates the estimated covariances and turns both covariance
//! sequences into ellipses, skipping degenerate ones.

use crate::config::UncertaintyConfig;
use crate::record::PathRecord;
use crate::uncertainty::{
    confidence_ellipse, covariance_to_precision, estimate_covariances, Degeneracy, EllipseParams,
};
use crate::util::{Matrix2, Vector2};

/// Origin of a covariance sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CovarianceSource {
    /// Read from the input file
    Recorded,
    /// Produced by the propagator
    Estimated,
}

impl CovarianceSource {
    pub fn label(&self) -> &'static str {
        match self {
            CovarianceSource::Recorded => "recorded",
            CovarianceSource::Estimated => "estimated",
        }
    }
}

/// An ellipse that could not be built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkippedEllipse {
    pub step: usize,
    pub source: CovarianceSource,
    pub reason: Degeneracy,
}

/// Path positions, both covariance sequences and their ellipses
#[derive(Debug, Clone, Default)]
pub struct PathUncertainty {
    positions: Vec<Vector2>,
    recorded: Vec<Matrix2>,
    estimated: Vec<Matrix2>,
    /// (step, ellipse) for every recorded covariance that produced one
    recorded_ellipses: Vec<(usize, EllipseParams)>,
    /// (step, ellipse) for every estimated covariance that produced one
    estimated_ellipses: Vec<(usize, EllipseParams)>,
    skipped: Vec<SkippedEllipse>,
    config: UncertaintyConfig,
}

impl PathUncertainty {
    pub fn from_records(records: &[PathRecord], config: &UncertaintyConfig) -> Self {
        let positions: Vec<Vector2> = records.iter().map(PathRecord::position).collect();
        let recorded: Vec<Matrix2> = records.iter().map(PathRecord::covariance).collect();
        let estimated =
            estimate_covariances(&positions, &recorded, config.noise_factor, config.propagation);

        let mut skipped = Vec::new();
        let recorded_ellipses = Self::ellipses(
            &positions,
            &recorded,
            config.chi_square,
            CovarianceSource::Recorded,
            &mut skipped,
        );
        let estimated_ellipses = Self::ellipses(
            &positions,
            &estimated,
            config.chi_square,
            CovarianceSource::Estimated,
            &mut skipped,
        );

        tracing::info!(
            records = records.len(),
            recorded_ellipses = recorded_ellipses.len(),
            estimated_ellipses = estimated_ellipses.len(),
            skipped = skipped.len(),
            "computed confidence ellipses"
        );

        Self {
            positions,
            recorded,
            estimated,
            recorded_ellipses,
            estimated_ellipses,
            skipped,
            config: *config,
        }
    }

    fn ellipses(
        positions: &[Vector2],
        covariances: &[Matrix2],
        chi_square: f64,
        source: CovarianceSource,
        skipped: &mut Vec<SkippedEllipse>,
    ) -> Vec<(usize, EllipseParams)> {
        positions
            .iter()
            .zip(covariances)
            .enumerate()
            .filter_map(|(step, (center, cov))| {
                let ellipse = covariance_to_precision(cov)
                    .and_then(|precision| confidence_ellipse(*center, &precision, chi_square));
                match ellipse {
                    Ok(ellipse) => Some((step, ellipse)),
                    Err(reason) => {
                        tracing::warn!(
                            step,
                            source = source.label(),
                            %reason,
                            "skipping degenerate confidence ellipse"
                        );
                        skipped.push(SkippedEllipse {
                            step,
                            source,
                            reason,
                        });
                        None
                    }
                }
            })
            .collect()
    }

    pub fn positions(&self) -> &[Vector2] {
        &self.positions
    }

    pub fn start(&self) -> Option<&Vector2> {
        self.positions.first()
    }

    pub fn goal(&self) -> Option<&Vector2> {
        self.positions.last()
    }

    pub fn recorded_covariances(&self) -> &[Matrix2] {
        &self.recorded
    }

    pub fn estimated_covariances(&self) -> &[Matrix2] {
        &self.estimated
    }

    pub fn recorded_ellipses(&self) -> impl Iterator<Item = &EllipseParams> {
        self.recorded_ellipses.iter().map(|(_, e)| e)
    }

    pub fn estimated_ellipses(&self) -> impl Iterator<Item = &EllipseParams> {
        self.estimated_ellipses.iter().map(|(_, e)| e)
    }

    /// Ellipses for one source, with their step index.
    pub fn ellipses_for(&self, source: CovarianceSource) -> &[(usize, EllipseParams)] {
        match source {
            CovarianceSource::Recorded => &self.recorded_ellipses,
            CovarianceSource::Estimated => &self.estimated_ellipses,
        }
    }

    pub fn skipped(&self) -> &[SkippedEllipse] {
        &self.skipped
    }

    pub fn config(&self) -> &UncertaintyConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
