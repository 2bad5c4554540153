//! Planar waypoints and path measurement.

use serde::{Deserialize, Serialize};

/// A 2-D waypoint in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Lengths of each consecutive segment of a path.
///
/// Paths with fewer than two points have no segments.
pub fn segment_lengths(path: &[Point]) -> impl Iterator<Item = f64> + '_ {
    path.windows(2).map(|pair| pair[0].distance_to(&pair[1]))
}

/// Total Euclidean length of a path.
pub fn path_length(path: &[Point]) -> f64 {
    segment_lengths(path).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance_to(&a) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_paths_have_no_length() {
        assert_eq!(path_length(&[]), 0.0);
        assert_eq!(path_length(&[Point::new(1.0, 1.0)]), 0.0);
        assert_eq!(segment_lengths(&[Point::new(1.0, 1.0)]).count(), 0);
    }

    #[test]
    fn path_length_sums_segments() {
        let path = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let lengths: Vec<f64> = segment_lengths(&path).collect();
        assert_eq!(lengths, vec![5.0, 6.0, 3.0]);
        assert!((path_length(&path) - 14.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_points_are_detected() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
        assert!(Point::new(f64::NAN, 2.0).is_nan());
        assert!(!Point::new(1.0, f64::INFINITY).is_nan());
    }
}
