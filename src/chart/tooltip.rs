//! Tooltip formatting for individual samples.
//!
//! Pure formatting, no state: `"{label}: {value} {unit}"`.

use crate::domain::Sample;

/// Format one sample as a tooltip string, e.g. `"Jan: 55 mg/dL"`.
pub fn format_tooltip(sample: &Sample, unit: &str) -> String {
    format!("{}: {} {unit}", sample.label, format_value(sample.value))
}

/// Format a reading: whole numbers print without a decimal point, everything
/// else with one decimal.
pub fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v.round())
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample(label: &str, value: f64) -> Sample {
        Sample {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn formats_label_value_unit() {
        assert_eq!(format_tooltip(&sample("Jan", 55.0), "mg/dL"), "Jan: 55 mg/dL");
    }

    #[test]
    fn fractional_values_keep_one_decimal() {
        assert_eq!(format_tooltip(&sample("Feb", 52.5), "mg/dL"), "Feb: 52.5 mg/dL");
    }

    #[test]
    fn formatting_is_idempotent() {
        let s = sample("Mar", 61.0);
        assert_eq!(format_tooltip(&s, "mg/dL"), format_tooltip(&s, "mg/dL"));
    }
}
