#![allow(dead_code)]

use std::path::PathBuf;

use pathcharge_lib::{DischargeConfig, DischargeModel};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/turtlebot_path.csv")
}

pub fn default_model() -> DischargeModel {
    DischargeModel::new(DischargeConfig::default()).expect("default config is valid")
}
