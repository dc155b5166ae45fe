//! Shared linear algebra aliases.

/// 2D position `(x, y)`.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Symmetric 2x2 covariance or precision matrix.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Euclidean distance between two positions.
#[inline]
pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
    (a - b).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn test_distance() {
        let d = distance(&vector![0.0, 0.0], &vector![3.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-12);
    }
}
