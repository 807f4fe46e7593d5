//! Export the computed chart spec and classified samples.
//!
//! Spec JSON is the "portable" representation of the chart hand-off:
//! - axis range + tick values
//! - threshold boundaries
//! - band bounds + colors
//!
//! The schema is defined by `domain::ChartSpec`. The CSV export is meant to be
//! easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::chart::format_tooltip;
use crate::domain::{ChartSpec, ClassifiedSample};
use crate::error::AppError;

/// Write the chart spec as pretty JSON.
pub fn write_spec_json(path: &Path, spec: &ChartSpec) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create spec JSON '{}': {e}", path.display()))
    })?;

    serde_json::to_writer_pretty(file, spec)
        .map_err(|e| AppError::config(format!("Failed to write spec JSON: {e}")))?;

    Ok(())
}

/// Read a chart spec JSON file.
pub fn read_spec_json(path: &Path) -> Result<ChartSpec, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!("Failed to open spec JSON '{}': {e}", path.display()))
    })?;
    let spec: ChartSpec = serde_json::from_reader(file)
        .map_err(|e| AppError::config(format!("Invalid spec JSON: {e}")))?;
    Ok(spec)
}

/// Write classified samples to a CSV file.
pub fn write_samples_csv(
    path: &Path,
    classified: &[ClassifiedSample],
    unit: &str,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create samples CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "date,label,value,unit,band,tooltip")
        .map_err(|e| AppError::config(format!("Failed to write samples CSV header: {e}")))?;

    for c in classified {
        writeln!(
            file,
            "{},{},{},{},{},{}",
            c.sample.date,
            c.sample.label,
            c.sample.value,
            unit,
            c.risk.display_name(),
            format_tooltip(&c.sample, unit),
        )
        .map_err(|e| AppError::config(format!("Failed to write samples CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_chart;
    use crate::domain::ChartConfig;

    #[test]
    fn spec_json_round_trips() {
        let out = run_chart(&ChartConfig::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");

        write_spec_json(&path, &out.spec).unwrap();
        let loaded = read_spec_json(&path).unwrap();
        assert_eq!(loaded, out.spec);
    }

    #[test]
    fn samples_csv_has_header_and_one_row_per_sample() {
        let config = ChartConfig::default();
        let out = run_chart(&config).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");

        write_samples_csv(&path, &out.classified, &config.unit).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines.len(), 1 + out.classified.len());
        assert_eq!(lines[0], "date,label,value,unit,band,tooltip");
        assert!(lines[1].starts_with("2024-01-01,Jan,52,mg/dL,at-risk,"));
    }

    #[test]
    fn unwritable_path_is_a_config_error() {
        let out = run_chart(&ChartConfig::default()).unwrap();
        let err = write_spec_json(Path::new("/nonexistent/dir/spec.json"), &out.spec).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
