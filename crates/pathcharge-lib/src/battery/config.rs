//! Discharge model configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{
    DEFAULT_MAX_CHARGE_CEILING, DEFAULT_MIN_CHARGE_FLOOR, DEFAULT_RATED_RUNTIME_SECONDS,
    DEFAULT_SPEED_MPS,
};

/// Parameters of the exponential discharge curve and the robot it drives.
///
/// Every field is optional when deserializing; missing fields fall back to the
/// reference TurtleBot defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DischargeConfig {
    /// Constant travel speed in meters per second, used to convert distance to time.
    #[serde(rename = "speed")]
    pub speed_mps: f64,
    /// Time in seconds at which the curve nominally reaches depletion.
    pub rated_runtime_seconds: f64,
    /// Asymptotic minimum percentage (the decaying term at time zero).
    pub min_charge_floor: f64,
    /// Percentage ceiling, typically 100.
    pub max_charge_ceiling: f64,
}

impl Default for DischargeConfig {
    fn default() -> Self {
        Self {
            speed_mps: DEFAULT_SPEED_MPS,
            rated_runtime_seconds: DEFAULT_RATED_RUNTIME_SECONDS,
            min_charge_floor: DEFAULT_MIN_CHARGE_FLOOR,
            max_charge_ceiling: DEFAULT_MAX_CHARGE_CEILING,
        }
    }
}

impl DischargeConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a configuration from a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the discharge configuration.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            (self.speed_mps, "speed"),
            (self.rated_runtime_seconds, "ratedRuntimeSeconds"),
            (self.min_charge_floor, "minChargeFloor"),
            (self.max_charge_ceiling, "maxChargeCeiling"),
        ];

        for (value, field) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig {
                    message: format!("{field} must be a finite positive number, got {value}"),
                });
            }
        }

        if self.max_charge_ceiling <= self.min_charge_floor {
            return Err(Error::InvalidConfig {
                message: format!(
                    "maxChargeCeiling ({}) must be greater than minChargeFloor ({})",
                    self.max_charge_ceiling, self.min_charge_floor
                ),
            });
        }

        Ok(())
    }
}
