// Test-only helpers for `pathcharge-lib` tests
#![allow(dead_code)]
use crate::geometry::Point;

/// Build a path of `points` waypoints along the x axis, `spacing` meters apart.
pub fn straight_path(points: usize, spacing: f64) -> Vec<Point> {
    (0..points)
        .map(|i| Point::new(i as f64 * spacing, 0.0))
        .collect()
}
