//! Range command handler reporting how far the robot can still travel.

use anyhow::{Context, Result};

use pathcharge_lib::{DischargeConfig, DischargeModel};

use pathcharge_cli::terminal::ColorPalette;

/// Handle the range subcommand.
pub fn handle_range(battery: f64, config: &DischargeConfig, palette: &ColorPalette) -> Result<()> {
    let model = DischargeModel::new(*config)?;
    let runtime = model
        .remaining_runtime(battery)
        .context("failed to compute remaining runtime")?;
    let distance = model.maximum_distance(battery)?;

    println!("Battery level: {}{:.4}%{}", palette.cyan, battery, palette.reset);
    println!("Remaining runtime: {:.1}s", runtime);
    println!(
        "Maximum distance: {:.3}m at {:.3}m/s",
        distance,
        model.config().speed_mps
    );
    Ok(())
}
