//! Monthly HDL readings.
//!
//! One reading per month, chronological. The table is the single source the
//! chart renders; replacing it (or feeding `compute_stats` a different series)
//! is the extension point for other data sources.

use chrono::NaiveDate;

use crate::domain::{DatasetStats, Sample};
use crate::error::AppError;

/// (year, month, label, HDL mg/dL)
const MONTHLY_HDL: &[(i32, u32, &str, f64)] = &[
    (2024, 1, "Jan", 52.0),
    (2024, 2, "Feb", 55.0),
    (2024, 3, "Mar", 58.0),
    (2024, 4, "Apr", 61.0),
    (2024, 5, "May", 59.0),
    (2024, 6, "Jun", 63.0),
    (2024, 7, "Jul", 66.0),
    (2024, 8, "Aug", 68.0),
    (2024, 9, "Sep", 71.0),
    (2024, 10, "Oct", 69.0),
    (2024, 11, "Nov", 73.0),
    (2024, 12, "Dec", 76.0),
];

/// Build the ordered monthly sample list.
pub fn monthly_samples() -> Result<Vec<Sample>, AppError> {
    let mut out = Vec::with_capacity(MONTHLY_HDL.len());
    for &(year, month, label, value) in MONTHLY_HDL {
        let date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::config(format!("Invalid sample date {year}-{month:02}.")))?;
        out.push(Sample {
            date,
            label: label.to_string(),
            value,
        });
    }
    Ok(out)
}

/// Dataset statistics for headers and reports.
///
/// Returns `None` for an empty series or non-finite values.
pub fn compute_stats(samples: &[Sample]) -> Option<DatasetStats> {
    let first = samples.first()?;
    let last = samples.last()?;

    let mut value_min = f64::INFINITY;
    let mut value_max = f64::NEG_INFINITY;
    for s in samples {
        value_min = value_min.min(s.value);
        value_max = value_max.max(s.value);
    }

    if !value_min.is_finite() || !value_max.is_finite() {
        return None;
    }

    Some(DatasetStats {
        n_samples: samples.len(),
        value_min,
        value_max,
        first_label: first.label.clone(),
        last_label: last.label.clone(),
    })
}
