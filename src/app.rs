//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the chart pipeline (ticks, bands, classification)
//! - prints reports/plots or launches the TUI
//! - writes optional exports

use clap::Parser;

use crate::cli::{ChartArgs, Command, ExportArgs};
use crate::domain::{AxisRange, ChartConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `hdl` binary.
pub fn run() -> Result<(), AppError> {
    // We want `hdl` and `hdl -s gradient` to behave like `hdl tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Show(args) => handle_show(args),
        Command::Export(args) => handle_export(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_show(args: ChartArgs) -> Result<(), AppError> {
    let config = chart_config_from_args(&args);
    let run = pipeline::run_chart(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.stats, &run.spec, &config)
    );
    println!(
        "{}",
        crate::report::format_sample_table(&run.classified, &config.unit)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_chart(
            &run.classified,
            &run.spec,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    if args.spec.is_none() && args.samples.is_none() {
        return Err(AppError::config(
            "Nothing to export; pass --spec and/or --samples.",
        ));
    }

    let config = chart_config_from_args(&args.chart);
    let run = pipeline::run_chart(&config)?;

    if let Some(path) = &args.spec {
        crate::io::export::write_spec_json(path, &run.spec)?;
        println!("Wrote chart spec: {}", path.display());
    }
    if let Some(path) = &args.samples {
        crate::io::export::write_samples_csv(path, &run.classified, &config.unit)?;
        println!("Wrote samples: {}", path.display());
    }

    Ok(())
}

fn handle_tui(args: ChartArgs) -> Result<(), AppError> {
    crate::tui::run(chart_config_from_args(&args))
}

pub fn chart_config_from_args(args: &ChartArgs) -> ChartConfig {
    ChartConfig {
        scheme: args.scheme,
        range: AxisRange::new(args.y_min, args.y_max, args.y_step),
        unit: args.unit.clone(),
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
    }
}

/// Rewrite argv so `hdl` defaults to `hdl tui`.
///
/// Rules:
/// - `hdl`                      -> `hdl tui`
/// - `hdl -s gradient ...`      -> `hdl tui -s gradient ...`
/// - `hdl --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "export" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
