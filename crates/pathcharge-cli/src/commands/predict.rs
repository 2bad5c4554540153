//! Predict command handler for single discharge projections.

use anyhow::{Context, Result};

use pathcharge_lib::{DischargeConfig, DischargeModel};

use pathcharge_cli::terminal::ColorPalette;

/// Handle the predict subcommand.
pub fn handle_predict(
    battery: f64,
    distance: f64,
    config: &DischargeConfig,
    palette: &ColorPalette,
) -> Result<()> {
    let model = DischargeModel::new(*config)?;
    let projected = model
        .predict(battery, distance)
        .context("failed to project battery level")?;

    println!(
        "Expected level after {:.3}m: {}{:.4}%{} (from {:.4}%)",
        distance, palette.cyan, projected, palette.reset, battery
    );
    Ok(())
}
