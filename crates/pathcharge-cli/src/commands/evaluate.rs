//! Evaluate command handler for checking a path against a battery level.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use pathcharge_lib::{evaluate, load_path, project_path, sample_path, DischargeConfig, Point};

use pathcharge_cli::output::{write_evaluation, EvaluationOutput, OutputFormat};
use pathcharge_cli::terminal::ColorPalette;

/// Arguments for the evaluate command.
#[derive(Debug, Clone)]
pub struct EvaluateCommandArgs {
    /// Starting battery percentage.
    pub battery: f64,
    /// Path file to evaluate; the bundled sample path when absent.
    pub path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Include per-segment projections.
    pub steps: bool,
}

/// Handle the evaluate subcommand.
pub fn handle_evaluate(
    args: &EvaluateCommandArgs,
    config: &DischargeConfig,
    palette: &ColorPalette,
) -> Result<()> {
    let waypoints = load_waypoints(args.path.as_deref())?;
    info!(
        waypoints = waypoints.len(),
        battery_level = args.battery,
        "evaluating path"
    );

    let steps = if args.steps {
        Some(
            project_path(args.battery, &waypoints, config)
                .context("failed to project path steps")?,
        )
    } else {
        None
    };
    let report = evaluate(args.battery, &waypoints, config)
        .context("failed to evaluate path feasibility")?;

    let output = EvaluationOutput {
        report: &report,
        config,
        steps: steps.as_deref(),
    };
    let mut stdout = io::stdout().lock();
    write_evaluation(&mut stdout, &output, args.format, palette)?;
    Ok(())
}

fn load_waypoints(path: Option<&Path>) -> Result<Vec<Point>> {
    match path {
        Some(path) => load_path(path)
            .with_context(|| format!("failed to load path from {}", path.display())),
        None => sample_path().context("failed to load the bundled sample path"),
    }
}
