//! Loading planned paths from CSV and JSON files.
//!
//! CSV files carry an `x,y` header with one waypoint per row. JSON files hold
//! an array whose entries are either `{"x": .., "y": ..}` objects or `[x, y]`
//! pairs; both shapes may be mixed.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::Point;

const SAMPLE_PATH_CSV: &str = include_str!("../../../docs/fixtures/turtlebot_path.csv");

/// Supported path file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFormat {
    Csv,
    Json,
}

impl PathFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(PathFormat::Csv),
            Some("json") => Ok(PathFormat::Json),
            _ => Err(Error::UnsupportedPathFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonWaypoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<JsonWaypoint> for Point {
    fn from(waypoint: JsonWaypoint) -> Self {
        match waypoint {
            JsonWaypoint::Object { x, y } => Point::new(x, y),
            JsonWaypoint::Pair([x, y]) => Point::new(x, y),
        }
    }
}

/// Load a path from disk, choosing the decoder from the file extension.
pub fn load_path(path: &Path) -> Result<Vec<Point>> {
    let format = PathFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading path");

    let points = match format {
        PathFormat::Csv => parse_csv_path(fs::File::open(path)?)?,
        PathFormat::Json => parse_json_path(&fs::read_to_string(path)?)?,
    };

    debug!(waypoints = points.len(), "path loaded");
    Ok(points)
}

/// Decode a CSV path with an `x,y` header.
pub fn parse_csv_path<R: Read>(reader: R) -> Result<Vec<Point>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut points = Vec::new();
    for record in csv_reader.deserialize::<Point>() {
        let point = record.map_err(|err| Error::PathParse {
            message: err.to_string(),
        })?;
        points.push(point);
    }

    validate_points(points)
}

/// Decode a JSON array of waypoints.
pub fn parse_json_path(json: &str) -> Result<Vec<Point>> {
    let waypoints: Vec<JsonWaypoint> =
        serde_json::from_str(json).map_err(|err| Error::PathParse {
            message: err.to_string(),
        })?;

    validate_points(waypoints.into_iter().map(Point::from).collect())
}

/// The bundled TurtleBot path used as the reference dataset.
///
/// 109 waypoints starting near the origin, roughly 10.3 m long.
pub fn sample_path() -> Result<Vec<Point>> {
    parse_csv_path(SAMPLE_PATH_CSV.as_bytes())
}

fn validate_points(points: Vec<Point>) -> Result<Vec<Point>> {
    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(Error::InvalidWaypoint { index });
    }
    Ok(points)
}
