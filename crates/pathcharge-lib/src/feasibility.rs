//! Path feasibility evaluation.
//!
//! Walks a planned path segment by segment, projecting the battery level for
//! the distance travelled so far, and stops at the first step that trips the
//! decision rule. Evaluation never prints; use [`FeasibilityReport::render_with`]
//! or the CLI output layer to present results.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::battery::{DischargeConfig, DischargeModel};
use crate::error::{Error, Result};
use crate::geometry::{segment_lengths, Point};

/// Outcome of evaluating a path against a starting battery level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Whether the whole path was walked without tripping the stop condition.
    pub feasible: bool,
    /// Distance in meters travelled up to the decision point.
    pub path_length: f64,
    /// Battery percentage the evaluation started from.
    pub battery_level: f64,
    /// Projected battery percentage at the decision point (0 for paths without segments).
    pub projected_level: f64,
    /// Number of segments walked, including the one that stopped the evaluation.
    pub segments_evaluated: usize,
    /// Number of segments in the path.
    pub total_segments: usize,
}

/// Battery projection for a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepProjection {
    /// Zero-based segment index.
    pub index: usize,
    /// Length of this segment in meters.
    pub segment_length: f64,
    /// Distance travelled up to and including this segment.
    pub cumulative_distance: f64,
    /// Projected battery percentage after this segment.
    pub projected_level: f64,
    /// Whether this step trips the stop condition.
    pub exhausted: bool,
}

/// Decision rule applied at every step.
///
/// A step stops the walk when the projection exceeds the starting level or
/// drops below zero.
fn trips_stop_condition(battery_level: f64, projected_level: f64) -> bool {
    battery_level < projected_level || projected_level < 0.0
}

fn check_waypoints(path: &[Point]) -> Result<()> {
    match path.iter().position(Point::is_nan) {
        Some(index) => Err(Error::InvalidWaypoint { index }),
        None => Ok(()),
    }
}

/// Add a segment to the distance walked so far.
///
/// Segments between infinite coordinates measure as `inf - inf = NaN`; the
/// path is unbounded either way, so the total saturates at `+inf`.
fn accumulate(cumulative: f64, segment_length: f64) -> f64 {
    let total = cumulative + segment_length;
    if total.is_nan() {
        f64::INFINITY
    } else {
        total
    }
}

/// Evaluate whether `path` can be completed starting from `battery_level`.
///
/// Each step projects the *starting* battery level over the *cumulative*
/// distance. The walk stops at the first step where the projected level is
/// above the starting level or below zero, reporting the distance and
/// projection at that point. Paths with fewer than two points are feasible
/// with zero length and a projected level of 0.
///
/// Paths too long to measure (overflowing or infinite coordinates) project to
/// `f64::NEG_INFINITY` and are reported infeasible, not raised.
///
/// # Errors
/// Returns [`crate::Error::InvalidBatteryLevel`] when `battery_level` is
/// non-finite or at/above the configured ceiling,
/// [`crate::Error::InvalidConfig`] for invalid model parameters, and
/// [`crate::Error::InvalidWaypoint`] for the first waypoint with a NaN
/// coordinate. All are checked before any segment is walked.
pub fn evaluate(
    battery_level: f64,
    path: &[Point],
    config: &DischargeConfig,
) -> Result<FeasibilityReport> {
    let model = DischargeModel::new(*config)?;
    // Reject the level up front so degenerate paths cannot mask it.
    model.elapsed_runtime(battery_level)?;
    check_waypoints(path)?;

    let total_segments = path.len().saturating_sub(1);
    let mut cumulative = 0.0;
    let mut projected_level = 0.0;
    let mut segments_evaluated = 0;

    for (index, length) in segment_lengths(path).enumerate() {
        cumulative = accumulate(cumulative, length);
        projected_level = model.predict(battery_level, cumulative)?;
        segments_evaluated = index + 1;

        debug!(
            segment = index,
            segment_length = length,
            path_length = cumulative,
            projected_level,
            "projected battery level"
        );

        if trips_stop_condition(battery_level, projected_level) {
            warn!(
                path_length = cumulative,
                battery_level,
                projected_level,
                "not enough battery resources to complete the path"
            );
            return Ok(FeasibilityReport {
                feasible: false,
                path_length: cumulative,
                battery_level,
                projected_level,
                segments_evaluated,
                total_segments,
            });
        }
    }

    info!(
        path_length = cumulative,
        battery_level,
        projected_level,
        segments = total_segments,
        "enough battery resources to complete the path"
    );

    Ok(FeasibilityReport {
        feasible: true,
        path_length: cumulative,
        battery_level,
        projected_level,
        segments_evaluated,
        total_segments,
    })
}

/// Compute per-segment battery projections for the whole path.
///
/// Unlike [`evaluate`], this does not stop at the first exhausted step; every
/// segment is projected and flagged so callers can inspect where (and how
/// often) the stop condition would trigger.
///
/// # Errors
/// Same preconditions as [`evaluate`].
pub fn project_path(
    battery_level: f64,
    path: &[Point],
    config: &DischargeConfig,
) -> Result<Vec<StepProjection>> {
    let model = DischargeModel::new(*config)?;
    model.elapsed_runtime(battery_level)?;
    check_waypoints(path)?;

    let mut projections = Vec::with_capacity(path.len().saturating_sub(1));
    let mut cumulative = 0.0;

    for (index, segment_length) in segment_lengths(path).enumerate() {
        cumulative = accumulate(cumulative, segment_length);
        let projected_level = model.predict(battery_level, cumulative)?;
        projections.push(StepProjection {
            index,
            segment_length,
            cumulative_distance: cumulative,
            projected_level,
            exhausted: trips_stop_condition(battery_level, projected_level),
        });
    }

    Ok(projections)
}
