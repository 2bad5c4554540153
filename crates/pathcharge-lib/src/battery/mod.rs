//! Battery discharge model and its configuration.
//!
//! This module is organized into focused submodules:
//!
//! - [`config`] - Model parameters (robot speed, rated runtime, charge bounds)
//! - [`discharge`] - Closed-form exponential discharge curve and its inversion
//! - [`constants`] - Default parameters for the reference robot and battery
//!
//! # Example
//!
//! ```
//! use pathcharge_lib::battery::{DischargeConfig, DischargeModel};
//!
//! let model = DischargeModel::new(DischargeConfig::default()).unwrap();
//!
//! // Battery percentage after driving 100 m from 90 %
//! let projected = model.predict(90.0, 100.0).unwrap();
//! assert!(projected < 90.0);
//!
//! // A full battery cannot be placed on the curve
//! assert!(model.predict(100.0, 1.0).is_err());
//! ```

pub mod config;
pub mod constants;
pub mod discharge;

pub use config::DischargeConfig;
pub use constants::{
    DEFAULT_MAX_CHARGE_CEILING, DEFAULT_MIN_CHARGE_FLOOR, DEFAULT_RATED_RUNTIME_SECONDS,
    DEFAULT_SPEED_MPS,
};
pub use discharge::{predict_level, DischargeModel};
