//! Path records and the CSV loader
//!
//! Input is a CSV file with a header row naming the columns
//! `x,y,P11,P12,P22`. Columns are matched by name, so their order is free.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use nalgebra::{matrix, vector};
use serde::Deserialize;

use crate::error::LoadError;
use crate::util::{Matrix2, Vector2};

/// One step of a recorded path: position plus the upper triangle of its
/// symmetric covariance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PathRecord {
    pub x: f64,
    pub y: f64,
    pub P11: f64,
    pub P12: f64,
    pub P22: f64,
}

impl PathRecord {
    pub fn new(x: f64, y: f64, P11: f64, P12: f64, P22: f64) -> Self {
        Self {
            x,
            y,
            P11,
            P12,
            P22,
        }
    }

    /// Position as a state vector.
    pub fn position(&self) -> Vector2 {
        vector![self.x, self.y]
    }

    /// Recorded covariance `[[P11, P12], [P12, P22]]`.
    pub fn covariance(&self) -> Matrix2 {
        matrix![self.P11, self.P12;
                self.P12, self.P22]
    }
}

/// Load all records from a CSV file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<PathRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded path data");
    Ok(records)
}

/// Parse records from any CSV source. The first row must be the header.
///
/// A single malformed row fails the whole read.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PathRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = rdr
        .deserialize::<PathRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(LoadError::parse)?;

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "x,y,P11,P12,P22\n";

    #[test]
    fn test_read_records() {
        let data = format!("{HEADER}0,0,1,0,1\n1.5,-2,0.5,0.1,0.25\n");
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1], PathRecord::new(1.5, -2.0, 0.5, 0.1, 0.25));
    }

    #[test]
    fn test_covariance_is_symmetric() {
        let record = PathRecord::new(0.0, 0.0, 2.0, 0.3, 1.0);
        let cov = record.covariance();
        assert_eq!(cov[(0, 1)], 0.3);
        assert_eq!(cov[(1, 0)], 0.3);
        assert_eq!(cov, cov.transpose());
        assert_eq!(record.position(), vector![0.0, 0.0]);
    }

    #[test]
    fn test_columns_matched_by_name() {
        let data = "P22,P12,P11,y,x\n4,0.5,3,2,1\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0], PathRecord::new(1.0, 2.0, 3.0, 0.5, 4.0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let data = "x, y, P11, P12, P22\n 1.0 , 2.0, 1, 0, 1\n";
        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].x, 1.0);
        assert_eq!(records[0].y, 2.0);
    }

    #[test]
    fn test_non_numeric_field_is_fatal() {
        let data = format!("{HEADER}0,0,1,0,1\n1,abc,1,0,1\n2,1,1,0,1\n");
        let err = read_records(data.as_bytes()).unwrap_err();
        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let data = "x,y,P11,P12\n0,0,1,0\n";
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_short_row_is_fatal() {
        let data = format!("{HEADER}0,0,1,0,1\n1,0,1\n");
        let err = read_records(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = read_records(HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn test_missing_file() {
        let err = load_records("does/not/exist/path_data_rrt.csv").unwrap_err();
        match err {
            LoadError::Io { path, source } => {
                assert!(path.ends_with("path_data_rrt.csv"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
