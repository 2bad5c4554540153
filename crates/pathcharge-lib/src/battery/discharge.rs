//! Closed-form exponential discharge curve.
//!
//! Charge is modelled as
//! `charge(t) = max - min * exp(ln(max / min) * t / rated_runtime)`,
//! so `charge(0) = max - min` and `charge(rated_runtime) = 0`. Predictions
//! place the current level on the curve by inverting it, advance the virtual
//! time by the travel time, and read the curve again.

use crate::error::{Error, Result};

use super::config::DischargeConfig;

/// Validated discharge curve ready to answer projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DischargeModel {
    config: DischargeConfig,
    log_ratio: f64,
}

impl DischargeModel {
    /// Build a model from a configuration, validating its parameters.
    pub fn new(config: DischargeConfig) -> Result<Self> {
        config.validate()?;
        let log_ratio = (config.max_charge_ceiling / config.min_charge_floor).ln();
        Ok(Self { config, log_ratio })
    }

    /// The parameters this model was built from.
    pub fn config(&self) -> &DischargeConfig {
        &self.config
    }

    /// Predict the battery percentage after traveling `additional_distance`
    /// meters from `level` at the configured constant speed.
    ///
    /// Formula:
    /// - `t0 = rated_runtime / ln(max / min) * ln((max - level) / min)`
    /// - `dt = additional_distance / speed`
    /// - `projected = max - min * exp(ln(max / min) * (t0 + dt) / rated_runtime)`
    ///
    /// # Errors
    /// - [`Error::InvalidBatteryLevel`] when `level` is non-finite or at/above the ceiling.
    /// - [`Error::InvalidDistance`] when `additional_distance` is negative or NaN.
    ///   An infinite distance projects to `f64::NEG_INFINITY`.
    ///
    /// # Examples
    /// ```
    /// use pathcharge_lib::{DischargeConfig, DischargeModel};
    ///
    /// let model = DischargeModel::new(DischargeConfig::default()).unwrap();
    /// let projected = model.predict(90.0, 0.0).unwrap();
    /// assert!((projected - 90.0).abs() < 1e-9);
    /// ```
    pub fn predict(&self, level: f64, additional_distance: f64) -> Result<f64> {
        let start = self.elapsed_runtime(level)?;

        // +inf is a valid (unbounded) distance and reads the curve at -inf
        if additional_distance.is_nan() || additional_distance < 0.0 {
            return Err(Error::InvalidDistance {
                distance: additional_distance,
            });
        }

        let travel_time = additional_distance / self.config.speed_mps;
        Ok(self.level_at(start + travel_time))
    }

    /// Virtual time in seconds at which the curve reads `level`.
    ///
    /// Levels below zero map past the rated runtime.
    pub fn elapsed_runtime(&self, level: f64) -> Result<f64> {
        self.check_level(level)?;
        let DischargeConfig {
            rated_runtime_seconds,
            min_charge_floor,
            max_charge_ceiling,
            ..
        } = self.config;

        Ok(rated_runtime_seconds / self.log_ratio
            * ((max_charge_ceiling - level) / min_charge_floor).ln())
    }

    /// Seconds of travel left before the curve reaches 0 %, clamped at zero.
    pub fn remaining_runtime(&self, level: f64) -> Result<f64> {
        let elapsed = self.elapsed_runtime(level)?;
        Ok((self.config.rated_runtime_seconds - elapsed).max(0.0))
    }

    /// Meters the robot can travel from `level` before the projected level reaches 0 %.
    ///
    /// Consistent with [`DischargeModel::predict`]:
    /// `predict(level, maximum_distance(level)) ≈ 0`.
    pub fn maximum_distance(&self, level: f64) -> Result<f64> {
        Ok(self.remaining_runtime(level)? * self.config.speed_mps)
    }

    fn level_at(&self, time: f64) -> f64 {
        let DischargeConfig {
            rated_runtime_seconds,
            min_charge_floor,
            max_charge_ceiling,
            ..
        } = self.config;

        let growth = (self.log_ratio * time / rated_runtime_seconds).exp();
        max_charge_ceiling - min_charge_floor * growth
    }

    fn check_level(&self, level: f64) -> Result<()> {
        if !level.is_finite() || level >= self.config.max_charge_ceiling {
            return Err(Error::InvalidBatteryLevel {
                level,
                ceiling: self.config.max_charge_ceiling,
            });
        }
        Ok(())
    }
}

/// Predict a battery level for a one-off projection without keeping a model around.
///
/// Equivalent to `DischargeModel::new(*config)?.predict(level, additional_distance)`.
pub fn predict_level(
    level: f64,
    additional_distance: f64,
    config: &DischargeConfig,
) -> Result<f64> {
    DischargeModel::new(*config)?.predict(level, additional_distance)
}
