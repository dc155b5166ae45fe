//! Fatal error types for loading and configuration.
//!
//! Per-record numerical problems are not errors here; see
//! [`Degeneracy`](crate::uncertainty::Degeneracy).

use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a path from the input file. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be opened or read.
    #[error("failed to read path data from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed into a path record.
    #[error("malformed path data{}", line_suffix(.line))]
    Parse {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// The header was present but no records followed.
    #[error("path data contains no records")]
    Empty,
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" at line {line}"),
        None => String::new(),
    }
}

impl LoadError {
    pub(crate) fn parse(source: csv::Error) -> Self {
        let line = source.position().map(|pos| pos.line());
        Self::Parse { line, source }
    }
}

/// Rejected [`UncertaintyConfig`](crate::config::UncertaintyConfig) values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("chi-square value must be positive and finite, got {0}")]
    InvalidChiSquare(f64),

    #[error("noise factor must be non-negative and finite, got {0}")]
    InvalidNoiseFactor(f64),
}
