//! Run summary, band legend, and classified sample table.

use crate::chart::{format_tooltip, format_value};
use crate::domain::{ChartConfig, ChartSpec, ClassifiedSample, DatasetStats};

/// Format the full run summary (config + dataset stats + axis ticks).
pub fn format_run_summary(
    stats: &DatasetStats,
    spec: &ChartSpec,
    config: &ChartConfig,
) -> String {
    let mut out = String::new();

    out.push_str("=== hdl - HDL trend chart ===\n");
    out.push_str(&format!("Scheme: {}\n", config.scheme.display_name()));
    out.push_str(&format!(
        "Axis: [{}, {}] step {} ({})\n",
        format_value(spec.range.min),
        format_value(spec.range.max),
        format_value(spec.range.step),
        spec.unit,
    ));
    out.push_str(&format!(
        "Samples: n={} | {} → {} | y=[{}, {}]\n",
        stats.n_samples,
        stats.first_label,
        stats.last_label,
        format_value(stats.value_min),
        format_value(stats.value_max),
    ));

    let ticks: Vec<String> = spec.ticks.iter().map(|&t| format_value(t)).collect();
    out.push_str(&format!("Ticks: [{}]\n", ticks.join(", ")));

    out.push('\n');
    out.push_str(&format_legend(spec, config));

    out
}

/// Format the band legend, one line per band, ascending.
pub fn format_legend(spec: &ChartSpec, config: &ChartConfig) -> String {
    let mut out = String::new();
    out.push_str("Bands:\n");
    let risk_levels = config.scheme.risk_levels();
    for (band, risk) in spec.bands.iter().zip(risk_levels.iter()) {
        out.push_str(&format!(
            "  [{:>5}, {:>5}) {:<12} {}\n",
            format_value(band.lower),
            format_value(band.upper),
            risk.display_name(),
            band.color.hex(),
        ));
    }
    out
}

/// Format the classified sample table.
pub fn format_sample_table(classified: &[ClassifiedSample], unit: &str) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<6} {:>12} {:>8} {:<12} {:<20}\n",
            "month", "date", "value", "band", "tooltip"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!("{:-<6} {:-<12} {:-<8} {:-<12} {:-<20}\n", "", "", "", "", "").trim_end(),
    );
    out.push('\n');

    for c in classified {
        out.push_str(
            format!(
                "{:<6} {:>12} {:>8} {:<12} {:<20}\n",
                c.sample.label,
                c.sample.date.to_string(),
                format_value(c.sample.value),
                c.risk.display_name(),
                format_tooltip(&c.sample, unit),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_chart;
    use crate::domain::ChartConfig;

    #[test]
    fn summary_names_scheme_axis_and_ticks() {
        let config = ChartConfig::default();
        let out = run_chart(&config).unwrap();
        let summary = format_run_summary(&out.stats, &out.spec, &config);

        assert!(summary.contains("Scheme: traffic"));
        assert!(summary.contains("Axis: [40, 100] step 10 (mg/dL)"));
        assert!(summary.contains("Ticks: [40, 50, 60, 70, 80, 90, 100]"));
        assert!(summary.contains("Samples: n=12 | Jan → Dec"));
    }

    #[test]
    fn legend_lists_one_line_per_band() {
        let config = ChartConfig::default();
        let out = run_chart(&config).unwrap();
        let legend = format_legend(&out.spec, &config);

        assert_eq!(legend.lines().count(), 1 + out.spec.bands.len());
        assert!(legend.contains("at-risk"));
        assert!(legend.contains("borderline"));
        assert!(legend.contains("protective"));
    }

    #[test]
    fn table_has_one_row_per_sample_plus_header() {
        let config = ChartConfig::default();
        let out = run_chart(&config).unwrap();
        let table = format_sample_table(&out.classified, &config.unit);

        assert_eq!(table.lines().count(), 2 + out.classified.len());
        assert!(table.contains("Jan: 52 mg/dL"));
    }
}
