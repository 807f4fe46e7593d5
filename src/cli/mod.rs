//! Command-line parsing for the HDL trend chart.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the tick/band computations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{SchemeKind, DEFAULT_UNIT, DEFAULT_Y_MAX, DEFAULT_Y_MIN, DEFAULT_Y_STEP};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hdl", version, about = "HDL cholesterol trend chart (terminal)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the run summary, classified samples, and an ASCII chart.
    Show(ChartArgs),
    /// Export the computed chart spec (JSON) and/or classified samples (CSV).
    Export(ExportArgs),
    /// Launch the interactive TUI chart.
    ///
    /// This uses the same underlying pipeline as `hdl show`, but renders the
    /// chart in a terminal UI using Ratatui + Plotters.
    Tui(ChartArgs),
}

/// Common chart options.
#[derive(Debug, Parser, Clone)]
pub struct ChartArgs {
    /// Color scheme preset (traffic: solid red/yellow/green; gradient: red→green fade).
    #[arg(short = 's', long, value_enum, default_value_t = SchemeKind::Traffic)]
    pub scheme: SchemeKind,

    /// Y-axis minimum.
    #[arg(long, default_value_t = DEFAULT_Y_MIN)]
    pub y_min: f64,

    /// Y-axis maximum.
    #[arg(long, default_value_t = DEFAULT_Y_MAX)]
    pub y_max: f64,

    /// Y-axis tick spacing; the axis span must divide evenly by it.
    #[arg(long, default_value_t = DEFAULT_Y_STEP)]
    pub y_step: f64,

    /// Unit label shown on the axis and in tooltips.
    #[arg(long, default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 24)]
    pub height: usize,

    /// Skip the ASCII chart (summary and table only).
    #[arg(long)]
    pub no_plot: bool,
}

/// Options for exporting computed outputs.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Write the chart spec (ticks/bands/thresholds) as JSON.
    #[arg(long, value_name = "JSON")]
    pub spec: Option<PathBuf>,

    /// Write classified samples as CSV.
    #[arg(long, value_name = "CSV")]
    pub samples: Option<PathBuf>,
}
