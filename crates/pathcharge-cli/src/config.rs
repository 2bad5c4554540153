//! Discharge configuration resolution for the CLI.
//!
//! The configuration is layered: defaults, then a JSON file (from `--config`
//! or the `PATHCHARGE_CONFIG` environment variable), then individual flag
//! overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use pathcharge_lib::DischargeConfig;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "PATHCHARGE_CONFIG";

/// Per-field overrides supplied on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    pub speed: Option<f64>,
    pub rated_runtime: Option<f64>,
    pub min_charge: Option<f64>,
    pub max_charge: Option<f64>,
}

impl ConfigOverrides {
    /// Apply the overrides on top of `base`.
    pub fn apply(&self, base: DischargeConfig) -> DischargeConfig {
        DischargeConfig {
            speed_mps: self.speed.unwrap_or(base.speed_mps),
            rated_runtime_seconds: self.rated_runtime.unwrap_or(base.rated_runtime_seconds),
            min_charge_floor: self.min_charge.unwrap_or(base.min_charge_floor),
            max_charge_ceiling: self.max_charge.unwrap_or(base.max_charge_ceiling),
        }
    }
}

/// Resolve the effective discharge configuration.
///
/// An explicit path wins over `PATHCHARGE_CONFIG`; without either the
/// built-in defaults are used.
pub fn resolve_config(
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<DischargeConfig> {
    let source = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    let base = match source {
        Some(path) => {
            debug!(path = %path.display(), "loading discharge configuration");
            DischargeConfig::from_path(&path).with_context(|| {
                format!("failed to load discharge configuration from {}", path.display())
            })?
        }
        None => DischargeConfig::default(),
    };

    let config = overrides.apply(base);
    config
        .validate()
        .context("invalid discharge configuration after applying overrides")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::sync::Mutex;

    /// Serializes tests that touch `PATHCHARGE_CONFIG`.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_config_env<F, R>(value: Option<&Path>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved = env::var_os(CONFIG_ENV_VAR);

        match value {
            Some(path) => env::set_var(CONFIG_ENV_VAR, path),
            None => env::remove_var(CONFIG_ENV_VAR),
        }

        let result = f();

        match saved {
            Some(v) => env::set_var(CONFIG_ENV_VAR, v),
            None => env::remove_var(CONFIG_ENV_VAR),
        }

        result
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ConfigOverrides {
            speed: Some(1.0),
            ..ConfigOverrides::default()
        };
        let config = overrides.apply(DischargeConfig::default());
        assert_eq!(config.speed_mps, 1.0);
        assert_eq!(
            config.rated_runtime_seconds,
            DischargeConfig::default().rated_runtime_seconds
        );
    }

    #[test]
    fn defaults_without_file_or_env() {
        let config = with_config_env(None, || {
            resolve_config(None, &ConfigOverrides::default()).unwrap()
        });
        assert_eq!(config, DischargeConfig::default());
    }

    #[test]
    fn explicit_file_is_loaded_and_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.json");
        fs::write(&file, r#"{ "speed": 0.5, "ratedRuntimeSeconds": 3600 }"#).unwrap();

        let overrides = ConfigOverrides {
            rated_runtime: Some(1800.0),
            ..ConfigOverrides::default()
        };
        let config =
            with_config_env(None, || resolve_config(Some(&file), &overrides).unwrap());

        assert_eq!(config.speed_mps, 0.5);
        assert_eq!(config.rated_runtime_seconds, 1800.0);
    }

    #[test]
    fn env_var_supplies_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("env.json");
        fs::write(&file, r#"{ "maxChargeCeiling": 90 }"#).unwrap();

        let config = with_config_env(Some(&file), || {
            resolve_config(None, &ConfigOverrides::default()).unwrap()
        });
        assert_eq!(config.max_charge_ceiling, 90.0);
    }

    #[test]
    fn invalid_override_is_reported() {
        let overrides = ConfigOverrides {
            speed: Some(-1.0),
            ..ConfigOverrides::default()
        };
        let err = with_config_env(None, || resolve_config(None, &overrides).unwrap_err());
        assert!(format!("{err:#}").contains("speed"));
    }

    #[test]
    fn missing_file_has_context() {
        let err = with_config_env(None, || {
            resolve_config(
                Some(Path::new("/nonexistent/pathcharge.json")),
                &ConfigOverrides::default(),
            )
            .unwrap_err()
        });
        assert!(err
            .to_string()
            .contains("failed to load discharge configuration"));
    }
}
