//! Output formatting for feasibility reports.
//!
//! This module renders the structured results returned by `pathcharge-lib`
//! as colored text, one-line summaries, or JSON.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use pathcharge_lib::{DischargeConfig, FeasibilityReport, RenderMode, StepProjection};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Verdict headline followed by the figures.
    #[default]
    Text,
    /// One line per evaluation.
    Summary,
    /// Pretty-printed JSON document.
    Json,
}

/// JSON document emitted by `evaluate --format json`.
#[derive(Debug, Serialize)]
pub struct EvaluationOutput<'a> {
    pub report: &'a FeasibilityReport,
    pub config: &'a DischargeConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<&'a [StepProjection]>,
}

/// Write a feasibility report (and optional per-step projections) in the
/// requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn write_evaluation<W: Write>(
    out: &mut W,
    output: &EvaluationOutput<'_>,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, output).map_err(io::Error::other)?;
            out.write_all(b"\n")
        }
        OutputFormat::Text => {
            if let Some(steps) = output.steps {
                write_steps(out, steps, palette)?;
                writeln!(out)?;
            }
            write_report_text(out, output.report, palette)
        }
        OutputFormat::Summary => {
            if let Some(steps) = output.steps {
                write_steps(out, steps, palette)?;
            }
            out.write_all(output.report.render_with(RenderMode::Summary).as_bytes())
        }
    }
}

/// Render the plain-text report with a colored verdict headline.
pub fn write_report_text<W: Write>(
    out: &mut W,
    report: &FeasibilityReport,
    palette: &ColorPalette,
) -> io::Result<()> {
    let text = report.render_with(RenderMode::PlainText);
    let (headline, details) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    let color = if report.feasible {
        palette.ok
    } else {
        palette.alert
    };

    writeln!(out, "{color}{headline}{}", palette.reset)?;
    out.write_all(details.as_bytes())
}

/// Render a per-segment projection table.
pub fn write_steps<W: Write>(
    out: &mut W,
    steps: &[StepProjection],
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "{}{:>5} {:>12} {:>15} {:>10}{}",
        palette.gray,
        "Step",
        "Segment (m)",
        "Cumulative (m)",
        "Level (%)",
        palette.reset
    )?;
    for step in steps {
        let (color, marker) = if step.exhausted {
            (palette.alert, " !")
        } else {
            (palette.cyan, "")
        };
        writeln!(
            out,
            "{:>5} {:>12.5} {:>15.5} {color}{:>10.5}{}{marker}",
            step.index + 1,
            step.segment_length,
            step.cumulative_distance,
            step.projected_level,
            palette.reset
        )?;
    }
    Ok(())
}
