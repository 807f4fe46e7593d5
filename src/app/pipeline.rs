//! Shared "chart pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! dataset -> validation -> ticks -> bands -> per-sample classification
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//! Every step is a pure function of the config, so repeated runs with the
//! same config produce identical output.

use crate::chart;
use crate::data;
use crate::domain::{ChartConfig, ChartSpec, ClassifiedSample, DatasetStats, Sample};
use crate::error::AppError;

/// All computed outputs of a single chart run.
#[derive(Debug, Clone)]
pub struct ChartOutput {
    pub samples: Vec<Sample>,
    pub stats: DatasetStats,
    pub spec: ChartSpec,
    pub classified: Vec<ClassifiedSample>,
}

/// Execute the full pipeline against the built-in monthly dataset.
pub fn run_chart(config: &ChartConfig) -> Result<ChartOutput, AppError> {
    let samples = data::monthly_samples()?;
    run_chart_with_samples(config, samples)
}

/// Execute the pipeline with a caller-supplied sample series.
///
/// This is the seam for tests and for future data collaborators.
pub fn run_chart_with_samples(
    config: &ChartConfig,
    samples: Vec<Sample>,
) -> Result<ChartOutput, AppError> {
    for s in &samples {
        if !s.value.is_finite() || s.value <= 0.0 {
            return Err(AppError::config(format!(
                "Sample '{}' has an invalid reading ({}).",
                s.label, s.value
            )));
        }
    }

    let stats = data::compute_stats(&samples)
        .ok_or_else(|| AppError::config("Dataset is empty; nothing to chart."))?;

    let ticks = chart::ticks(&config.range)?;
    let thresholds = config.scheme.thresholds();
    let bands = chart::map_bands(&config.range, &thresholds, &config.scheme.colors())?;

    let spec = ChartSpec {
        axis_label: format!("HDL ({})", config.unit),
        unit: config.unit.clone(),
        range: config.range,
        ticks,
        thresholds,
        bands,
    };

    let risk_levels = config.scheme.risk_levels();
    let last_band = spec.bands.len() - 1;
    let classified = samples
        .iter()
        .map(|s| {
            // Readings outside the fixed axis range clamp to the nearest band
            // so the table still labels them; the plot clips them separately.
            let band_index = chart::band_for(&spec.bands, s.value)
                .unwrap_or(if s.value < config.range.min { 0 } else { last_band });
            ClassifiedSample {
                sample: s.clone(),
                band_index,
                risk: risk_levels[band_index],
            }
        })
        .collect();

    Ok(ChartOutput {
        samples,
        stats,
        spec,
        classified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AxisRange, RiskLevel, SchemeKind};
    use chrono::NaiveDate;

    fn sample(month: u32, label: &str, value: f64) -> Sample {
        Sample {
            date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn default_run_produces_ticks_bands_and_classification() {
        let out = run_chart(&ChartConfig::default()).unwrap();

        assert_eq!(out.spec.ticks, vec![40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]);
        assert_eq!(out.spec.bands.len(), 3);
        assert_eq!(out.classified.len(), out.samples.len());

        // Jan (52) is at-risk, Dec (76) is protective.
        assert_eq!(out.classified[0].risk, RiskLevel::AtRisk);
        assert_eq!(out.classified[11].risk, RiskLevel::Protective);
    }

    #[test]
    fn classification_follows_scheme_thresholds() {
        let config = ChartConfig {
            scheme: SchemeKind::Traffic,
            ..ChartConfig::default()
        };
        let samples = vec![
            sample(1, "Jan", 59.9),
            sample(2, "Feb", 60.0),
            sample(3, "Mar", 70.0),
        ];
        let out = run_chart_with_samples(&config, samples).unwrap();
        assert_eq!(out.classified[0].risk, RiskLevel::AtRisk);
        assert_eq!(out.classified[1].risk, RiskLevel::Borderline);
        assert_eq!(out.classified[2].risk, RiskLevel::Protective);
    }

    #[test]
    fn out_of_range_samples_clamp_to_outer_bands() {
        let samples = vec![sample(1, "Jan", 30.0), sample(2, "Feb", 120.0)];
        let out = run_chart_with_samples(&ChartConfig::default(), samples).unwrap();
        assert_eq!(out.classified[0].band_index, 0);
        assert_eq!(out.classified[1].band_index, 2);
    }

    #[test]
    fn invalid_readings_are_config_errors() {
        let samples = vec![sample(1, "Jan", f64::NAN)];
        let err = run_chart_with_samples(&ChartConfig::default(), samples).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn identical_configs_yield_identical_specs() {
        let config = ChartConfig::default();
        let a = run_chart(&config).unwrap();
        let b = run_chart(&config).unwrap();
        assert_eq!(a.spec, b.spec);
        assert_eq!(
            serde_json::to_string(&a.spec).unwrap(),
            serde_json::to_string(&b.spec).unwrap()
        );
    }
}
