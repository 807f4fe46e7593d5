//! Mapping of the continuous value axis into discrete colored risk bands.
//!
//! Bands are derived deterministically from a sorted threshold list plus the
//! two implicit outer bounds (range min/max). The result always covers
//! `[min, max]` with no gaps or overlaps.

use crate::domain::{AxisRange, Band, Rgb, SchemeKind};
use crate::error::AppError;

/// Build contiguous bands from `thresholds` (strictly increasing, inside the
/// open range) and one color per resulting segment.
pub fn map_bands(
    range: &AxisRange,
    thresholds: &[f64],
    colors: &[Rgb],
) -> Result<Vec<Band>, AppError> {
    if range.max <= range.min {
        return Err(AppError::config(format!(
            "Axis max must exceed min (got [{}, {}]).",
            range.min, range.max
        )));
    }
    if colors.len() != thresholds.len() + 1 {
        return Err(AppError::config(format!(
            "Expected {} band colors for {} thresholds, got {}.",
            thresholds.len() + 1,
            thresholds.len(),
            colors.len()
        )));
    }
    for &t in thresholds {
        if !t.is_finite() || t <= range.min || t >= range.max {
            return Err(AppError::config(format!(
                "Threshold {t} lies outside the open axis range ({}, {}).",
                range.min, range.max
            )));
        }
    }
    for w in thresholds.windows(2) {
        if w[1] <= w[0] {
            return Err(AppError::config(format!(
                "Thresholds must be strictly increasing (got {} then {}).",
                w[0], w[1]
            )));
        }
    }

    let mut edges = Vec::with_capacity(thresholds.len() + 2);
    edges.push(range.min);
    edges.extend_from_slice(thresholds);
    edges.push(range.max);

    let bands = edges
        .windows(2)
        .zip(colors.iter())
        .map(|(w, &color)| Band {
            lower: w[0],
            upper: w[1],
            color,
        })
        .collect();

    Ok(bands)
}

/// Index of the band containing `value`.
///
/// Bounds are lower-inclusive and upper-exclusive, except the last band which
/// is closed at the top so `value == max` still classifies. Values outside
/// the full range return `None`.
pub fn band_for(bands: &[Band], value: f64) -> Option<usize> {
    let last = bands.len().checked_sub(1)?;
    for (i, band) in bands.iter().enumerate() {
        if value >= band.lower && (value < band.upper || (i == last && value <= band.upper)) {
            return Some(i);
        }
    }
    None
}

/// Flatten bands into fill strips `(lower, upper, color)` for rendering.
///
/// Solid bands map to a single strip. When the scheme blends midtones, the
/// middle band is split into `blend_strips` slices whose colors interpolate
/// from the band below to the band above, reproducing the original fade
/// between the two gradient anchors.
pub fn fill_strips(bands: &[Band], scheme: SchemeKind, blend_strips: usize) -> Vec<(f64, f64, Rgb)> {
    let blend_strips = blend_strips.max(2);
    let mut out = Vec::new();

    for (i, band) in bands.iter().enumerate() {
        let is_middle = i > 0 && i + 1 < bands.len();
        if scheme.blends_midtones() && is_middle {
            let from = bands[i - 1].color;
            let to = bands[i + 1].color;
            let width = (band.upper - band.lower) / blend_strips as f64;
            for s in 0..blend_strips {
                let lo = band.lower + width * s as f64;
                let hi = if s + 1 == blend_strips {
                    band.upper
                } else {
                    band.lower + width * (s + 1) as f64
                };
                // Sample the fade at the strip midpoint.
                let t = (s as f64 + 0.5) / blend_strips as f64;
                out.push((lo, hi, from.blend(to, t)));
            }
        } else {
            out.push((band.lower, band.upper, band.color));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> AxisRange {
        AxisRange::new(20.0, 100.0, 10.0)
    }

    #[test]
    fn maps_two_thresholds_to_three_bands() {
        let bands = map_bands(
            &range(),
            &[60.0, 70.0],
            &[Rgb::RED, Rgb::YELLOW, Rgb::GREEN],
        )
        .unwrap();

        assert_eq!(bands.len(), 3);
        assert_eq!((bands[0].lower, bands[0].upper, bands[0].color), (20.0, 60.0, Rgb::RED));
        assert_eq!((bands[1].lower, bands[1].upper, bands[1].color), (60.0, 70.0, Rgb::YELLOW));
        assert_eq!((bands[2].lower, bands[2].upper, bands[2].color), (70.0, 100.0, Rgb::GREEN));
    }

    #[test]
    fn bands_are_contiguous_and_span_the_range() {
        let bands = map_bands(
            &range(),
            &[55.0, 65.0, 75.0],
            &[Rgb::RED, Rgb::YELLOW, Rgb::GREEN, Rgb::GREEN],
        )
        .unwrap();

        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].lower, 20.0);
        assert_eq!(bands.last().unwrap().upper, 100.0);
        for w in bands.windows(2) {
            assert_eq!(
                w[0].upper, w[1].lower,
                "bands must be contiguous with no gaps or overlaps"
            );
        }
    }

    #[test]
    fn rejects_color_count_mismatch() {
        let err = map_bands(&range(), &[60.0, 70.0], &[Rgb::RED, Rgb::GREEN]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_unsorted_or_duplicate_thresholds() {
        let colors = [Rgb::RED, Rgb::YELLOW, Rgb::GREEN];
        let err = map_bands(&range(), &[70.0, 60.0], &colors).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = map_bands(&range(), &[60.0, 60.0], &colors).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_threshold_outside_open_range() {
        let colors = [Rgb::RED, Rgb::GREEN];
        let err = map_bands(&range(), &[20.0], &colors).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        let err = map_bands(&range(), &[100.0], &colors).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn band_for_is_lower_inclusive_upper_exclusive() {
        let bands = map_bands(
            &range(),
            &[60.0, 70.0],
            &[Rgb::RED, Rgb::YELLOW, Rgb::GREEN],
        )
        .unwrap();

        assert_eq!(band_for(&bands, 20.0), Some(0));
        assert_eq!(band_for(&bands, 59.9), Some(0));
        assert_eq!(band_for(&bands, 60.0), Some(1));
        assert_eq!(band_for(&bands, 70.0), Some(2));
        // The last band is closed at the top.
        assert_eq!(band_for(&bands, 100.0), Some(2));
        assert_eq!(band_for(&bands, 19.9), None);
        assert_eq!(band_for(&bands, 100.1), None);
    }

    #[test]
    fn fill_strips_solid_scheme_is_one_strip_per_band() {
        let bands = map_bands(
            &range(),
            &[60.0, 70.0],
            &[Rgb::RED, Rgb::YELLOW, Rgb::GREEN],
        )
        .unwrap();

        let strips = fill_strips(&bands, SchemeKind::Traffic, 8);
        assert_eq!(strips.len(), 3);
        assert_eq!(strips[1], (60.0, 70.0, Rgb::YELLOW));
    }

    #[test]
    fn fill_strips_gradient_fades_red_to_green() {
        let bands = map_bands(
            &range(),
            &[65.0, 75.0],
            &[Rgb::RED, Rgb::RED.blend(Rgb::GREEN, 0.5), Rgb::GREEN],
        )
        .unwrap();

        let strips = fill_strips(&bands, SchemeKind::Gradient, 8);
        // 1 solid + 8 blended + 1 solid.
        assert_eq!(strips.len(), 10);
        assert_eq!(strips[0].2, Rgb::RED);
        assert_eq!(strips[9].2, Rgb::GREEN);

        // The fade covers exactly the middle band and is contiguous.
        assert_eq!(strips[1].0, 65.0);
        assert_eq!(strips[8].1, 75.0);
        for w in strips.windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }

        // Red fades out and green fades in across the band.
        assert!(strips[1].2.r > strips[8].2.r);
        assert!(strips[8].2.g > strips[1].2.g);
    }
}
