use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the pathcharge library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a battery level cannot be inverted on the discharge curve.
    ///
    /// Levels at or above the ceiling would require `ln(0)` (or the log of a
    /// negative number) and are rejected instead of producing NaN or infinity.
    #[error("invalid battery level {level}: must be finite and below the {ceiling}% ceiling")]
    InvalidBatteryLevel { level: f64, ceiling: f64 },

    /// Raised when an additional travel distance is negative or NaN.
    #[error("invalid travel distance {distance}: must be finite and non-negative")]
    InvalidDistance { distance: f64 },

    /// Raised when discharge model parameters fail validation.
    #[error("invalid discharge configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a waypoint carries an unusable coordinate: any non-finite
    /// value in a loaded path, or NaN in a path handed to evaluation.
    #[error("waypoint {index} has an invalid coordinate")]
    InvalidWaypoint { index: usize },

    /// Raised when a path file extension is not one of the supported formats.
    #[error("unsupported path file format for {path}; expected .csv or .json")]
    UnsupportedPathFormat { path: PathBuf },

    /// Raised when a path file could not be decoded.
    #[error("failed to parse path data: {message}")]
    PathParse { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors outside of path decoding (configuration files).
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
