use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathcharge_cli::config::{resolve_config, ConfigOverrides};
use pathcharge_cli::output::OutputFormat;
use pathcharge_cli::terminal::ColorPalette;

mod commands;

use commands::evaluate::{handle_evaluate, EvaluateCommandArgs};
use commands::predict::handle_predict;
use commands::range::handle_range;

#[derive(Parser, Debug)]
#[command(author, version, about = "Robot battery path feasibility checks")]
struct Cli {
    /// JSON discharge configuration file (falls back to PATHCHARGE_CONFIG).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Robot speed in meters per second.
    #[arg(long, global = true)]
    speed: Option<f64>,

    /// Seconds at which the discharge curve reaches depletion.
    #[arg(long, global = true)]
    rated_runtime: Option<f64>,

    /// Asymptotic minimum charge percentage of the curve.
    #[arg(long, global = true)]
    min_charge: Option<f64>,

    /// Charge ceiling percentage.
    #[arg(long, global = true)]
    max_charge: Option<f64>,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a path can be completed from a starting battery level.
    Evaluate {
        /// Starting battery percentage (must be below the ceiling).
        #[arg(long, allow_negative_numbers = true)]
        battery: f64,
        /// CSV or JSON path file; defaults to the bundled sample path.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Print per-segment projections.
        #[arg(long)]
        steps: bool,
    },
    /// Project the battery level after traveling a distance.
    Predict {
        /// Current battery percentage.
        #[arg(long, allow_negative_numbers = true)]
        battery: f64,
        /// Additional distance in meters.
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
    },
    /// Report remaining runtime and maximum travel distance.
    Range {
        /// Current battery percentage.
        #[arg(long, allow_negative_numbers = true)]
        battery: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        speed: cli.speed,
        rated_runtime: cli.rated_runtime,
        min_charge: cli.min_charge,
        max_charge: cli.max_charge,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;
    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Evaluate {
            battery,
            path,
            format,
            steps,
        } => {
            let args = EvaluateCommandArgs {
                battery,
                path,
                format,
                steps,
            };
            handle_evaluate(&args, &config, &palette)
        }
        Command::Predict { battery, distance } => {
            handle_predict(battery, distance, &config, &palette)
        }
        Command::Range { battery } => handle_range(battery, &config, &palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
