//! Pathcharge library entry points.
//!
//! This crate exposes the exponential battery discharge model, the geometry
//! helpers used to measure planned paths, path file loaders, and the path
//! feasibility evaluator built on top of them. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod battery;
pub mod error;
pub mod feasibility;
pub mod geometry;
pub mod output;
pub mod path;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use battery::{predict_level, DischargeConfig, DischargeModel};
pub use error::{Error, Result};
pub use feasibility::{evaluate, project_path, FeasibilityReport, StepProjection};
pub use geometry::{path_length, segment_lengths, Point};
pub use output::RenderMode;
pub use path::{load_path, parse_csv_path, parse_json_path, sample_path, PathFormat};
