//! Default discharge parameters.
//!
//! The defaults describe a TurtleBot driving at its maximal velocity on an
//! 11.1 V 1800 mAh (19.98 Wh) LiPo pack with an expected operating time of
//! two hours.

/// Constant travel speed of the robot in meters per second.
pub const DEFAULT_SPEED_MPS: f64 = 0.26;

/// Time in seconds at which the discharge curve nominally reaches 0 %.
pub const DEFAULT_RATED_RUNTIME_SECONDS: f64 = 7200.0;

/// Charge offset of the decaying term at time zero, in percent.
pub const DEFAULT_MIN_CHARGE_FLOOR: f64 = 0.01;

/// Charge ceiling in percent.
pub const DEFAULT_MAX_CHARGE_CEILING: f64 = 100.0;
