//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while computing ticks and bands
//! - exported to JSON/CSV
//! - handed to a rendering front-end (TUI, ASCII plot) without conversion

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// HDL level below which a reading is considered at-risk (mg/dL).
pub const HDL_LOW: f64 = 60.0;

/// HDL level above which a reading is considered cardio-protective (mg/dL).
///
/// Readings between [`HDL_LOW`] and this value fall into the borderline band.
pub const HDL_PROTECTIVE: f64 = 70.0;

/// Lower anchor of the red→green fade used by the gradient scheme (mg/dL).
pub const HDL_FADE_LO: f64 = 65.0;

/// Upper anchor of the red→green fade used by the gradient scheme (mg/dL).
pub const HDL_FADE_HI: f64 = 75.0;

/// Default Y-axis range and tick spacing (mg/dL).
///
/// The range is fixed rather than data-driven so that charts from different
/// months stay visually comparable.
pub const DEFAULT_Y_MIN: f64 = 40.0;
pub const DEFAULT_Y_MAX: f64 = 100.0;
pub const DEFAULT_Y_STEP: f64 = 10.0;

/// Unit label shown on the axis and in tooltips.
pub const DEFAULT_UNIT: &str = "mg/dL";

/// A renderer-agnostic RGB color.
///
/// Render layers convert to Plotters/Ratatui color types at the edge; the
/// domain and exports only ever see this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(220, 80, 80);
    pub const YELLOW: Rgb = Rgb::new(230, 200, 70);
    pub const GREEN: Rgb = Rgb::new(40, 180, 110);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend between two colors; `t` is clamped to [0, 1].
    pub fn blend(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f64 + t * (b as f64 - a as f64)).round() as u8 };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// `#rrggbb` form for legends and exports.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One observed HDL reading.
///
/// Samples are kept in chronological order; the order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub date: NaiveDate,
    /// Display label for the X axis and tooltips (e.g. "Jan").
    pub label: String,
    pub value: f64,
}

/// Fixed Y-axis range with evenly spaced ticks.
///
/// Invariant: `step > 0` and `(max - min)` is evenly divisible by `step`
/// (validated by `chart::ticks`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(DEFAULT_Y_MIN, DEFAULT_Y_MAX, DEFAULT_Y_STEP)
    }
}

/// A contiguous sub-range of the value axis with a single display color.
///
/// Bands are produced by `chart::bands::map_bands` and always cover the full
/// axis range with no gaps or overlaps, ordered ascending by `lower`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
    pub color: Rgb,
}

/// Risk label attached to a band, used by reports and the TUI legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    AtRisk,
    Borderline,
    Protective,
}

impl RiskLevel {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            RiskLevel::AtRisk => "at-risk",
            RiskLevel::Borderline => "borderline",
            RiskLevel::Protective => "protective",
        }
    }
}

/// Color scheme preset.
///
/// The upstream design iterated on the same chart several times, varying only
/// colors, gradient shading, and reference-line placement. Those iterations
/// are consolidated here as selectable presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    /// Solid red/yellow/green bands split at [`HDL_LOW`] and [`HDL_PROTECTIVE`].
    Traffic,
    /// Red below [`HDL_FADE_LO`], green above [`HDL_FADE_HI`], with the
    /// band in between rendered as a red→green fade.
    Gradient,
}

impl SchemeKind {
    /// Threshold boundaries for this scheme, strictly increasing.
    pub fn thresholds(self) -> Vec<f64> {
        match self {
            SchemeKind::Traffic => vec![HDL_LOW, HDL_PROTECTIVE],
            SchemeKind::Gradient => vec![HDL_FADE_LO, HDL_FADE_HI],
        }
    }

    /// Band colors, one per segment (thresholds + 1).
    pub fn colors(self) -> Vec<Rgb> {
        match self {
            SchemeKind::Traffic => vec![Rgb::RED, Rgb::YELLOW, Rgb::GREEN],
            SchemeKind::Gradient => {
                vec![Rgb::RED, Rgb::RED.blend(Rgb::GREEN, 0.5), Rgb::GREEN]
            }
        }
    }

    /// Risk label per band, aligned with `colors()`.
    pub fn risk_levels(self) -> Vec<RiskLevel> {
        vec![RiskLevel::AtRisk, RiskLevel::Borderline, RiskLevel::Protective]
    }

    /// Whether the middle band should be rendered as a color fade rather
    /// than a solid fill.
    pub fn blends_midtones(self) -> bool {
        matches!(self, SchemeKind::Gradient)
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            SchemeKind::Traffic => "traffic",
            SchemeKind::Gradient => "gradient",
        }
    }

    /// Cycle to the next preset (used by the TUI).
    pub fn next(self) -> Self {
        match self {
            SchemeKind::Traffic => SchemeKind::Gradient,
            SchemeKind::Gradient => SchemeKind::Traffic,
        }
    }
}

impl std::fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults) and is the single
/// parameterized chart component: scheme, axis range, and unit.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub scheme: SchemeKind,
    pub range: AxisRange,
    pub unit: String,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scheme: SchemeKind::Traffic,
            range: AxisRange::default(),
            unit: DEFAULT_UNIT.to_string(),
            plot: true,
            plot_width: 72,
            plot_height: 24,
        }
    }
}

/// The computed hand-off to a rendering collaborator.
///
/// This is everything a chart front-end needs to draw the Y axis and the
/// colored risk bands; the drawing itself happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub axis_label: String,
    pub unit: String,
    pub range: AxisRange,
    /// Evenly spaced tick values: min, min+step, ..., max.
    pub ticks: Vec<f64>,
    /// Threshold boundaries, also drawn as reference lines.
    pub thresholds: Vec<f64>,
    /// Contiguous color bands covering the full range.
    pub bands: Vec<Band>,
}

/// Basic dataset statistics for headers and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub n_samples: usize,
    pub value_min: f64,
    pub value_max: f64,
    pub first_label: String,
    pub last_label: String,
}

/// A sample together with the band it falls in.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSample {
    pub sample: Sample,
    /// Index into `ChartSpec::bands`; out-of-range values are clamped to the
    /// nearest band.
    pub band_index: usize,
    pub risk: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_are_exact() {
        assert_eq!(Rgb::RED.blend(Rgb::GREEN, 0.0), Rgb::RED);
        assert_eq!(Rgb::RED.blend(Rgb::GREEN, 1.0), Rgb::GREEN);
    }

    #[test]
    fn blend_midpoint_is_between() {
        let mid = Rgb::new(0, 0, 0).blend(Rgb::new(100, 200, 50), 0.5);
        assert_eq!(mid, Rgb::new(50, 100, 25));
    }

    #[test]
    fn blend_clamps_t() {
        assert_eq!(Rgb::RED.blend(Rgb::GREEN, -1.0), Rgb::RED);
        assert_eq!(Rgb::RED.blend(Rgb::GREEN, 2.0), Rgb::GREEN);
    }

    #[test]
    fn hex_is_lowercase_rrggbb() {
        assert_eq!(Rgb::new(220, 80, 80).hex(), "#dc5050");
        assert_eq!(Rgb::new(0, 0, 0).hex(), "#000000");
    }

    #[test]
    fn scheme_invariants_hold_for_all_presets() {
        for scheme in [SchemeKind::Traffic, SchemeKind::Gradient] {
            let thresholds = scheme.thresholds();
            let colors = scheme.colors();
            assert_eq!(colors.len(), thresholds.len() + 1);
            assert_eq!(scheme.risk_levels().len(), colors.len());
            for w in thresholds.windows(2) {
                assert!(w[0] < w[1], "thresholds must be strictly increasing");
            }
            for &t in &thresholds {
                assert!(t > DEFAULT_Y_MIN && t < DEFAULT_Y_MAX);
            }
        }
    }

    #[test]
    fn scheme_cycling_covers_all_presets() {
        assert_eq!(SchemeKind::Traffic.next(), SchemeKind::Gradient);
        assert_eq!(SchemeKind::Gradient.next(), SchemeKind::Traffic);
    }
}
