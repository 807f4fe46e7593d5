//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - trend line: `-`
//! - threshold reference lines: `.`
//! - sample markers by band: `x` (at-risk), `o` (borderline), `+` (protective)
//! - left gutter with the computed axis tick labels

use crate::chart::format_value;
use crate::domain::{ChartSpec, ClassifiedSample, RiskLevel};

const GUTTER: usize = 6;

/// Render the banded trend chart as plain text.
///
/// The Y range is the fixed axis range from the spec (not data-driven), so
/// charts with different datasets stay comparable. Samples are spaced evenly
/// along X in series order.
pub fn render_ascii_chart(
    classified: &[ClassifiedSample],
    spec: &ChartSpec,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let y_min = spec.range.min;
    let y_max = spec.range.max;

    let mut grid = vec![vec![' '; width]; height];

    // Threshold reference lines first, so the trend and markers overlay them.
    for &t in &spec.thresholds {
        let row = map_y(t, y_min, y_max, height);
        for cell in grid[row].iter_mut() {
            *cell = '.';
        }
    }

    // Trend line between consecutive samples.
    let points: Vec<(usize, usize)> = classified
        .iter()
        .enumerate()
        .map(|(i, c)| {
            (
                map_x(i, classified.len(), width),
                map_y(c.sample.value, y_min, y_max, height),
            )
        })
        .collect();
    for w in points.windows(2) {
        let (x0, y0) = w[0];
        let (x1, y1) = w[1];
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }

    // Sample markers overlay everything else.
    for (c, &(x, y)) in classified.iter().zip(points.iter()) {
        grid[y][x] = marker(c.risk);
    }

    // Build final string: header, gutter + rows, legend.
    let mut out = String::new();
    let first = classified.first().map(|c| c.sample.label.as_str()).unwrap_or("-");
    let last = classified.last().map(|c| c.sample.label.as_str()).unwrap_or("-");
    out.push_str(&format!(
        "Chart: {first} → {last} | y=[{}, {}] {}\n",
        format_value(y_min),
        format_value(y_max),
        spec.unit,
    ));

    let labels = tick_labels(spec, height);
    for (row, label) in grid.into_iter().zip(labels.into_iter()) {
        out.push_str(&format!("{label:>gutter$} |", gutter = GUTTER - 2));
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out.push_str("legend: x at-risk  o borderline  + protective  . threshold\n");
    out
}

fn marker(risk: RiskLevel) -> char {
    match risk {
        RiskLevel::AtRisk => 'x',
        RiskLevel::Borderline => 'o',
        RiskLevel::Protective => '+',
    }
}

/// One gutter label per row; rows that carry a tick get its value.
fn tick_labels(spec: &ChartSpec, height: usize) -> Vec<String> {
    let mut labels = vec![String::new(); height];
    for &tick in &spec.ticks {
        let row = map_y(tick, spec.range.min, spec.range.max, height);
        labels[row] = format_value(tick);
    }
    labels
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let u = i as f64 / (n as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish); only writes into empty/reference cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
        {
            let cell = &mut grid[y0 as usize][x0 as usize];
            if *cell == ' ' || *cell == '.' {
                *cell = ch;
            }
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_chart;
    use crate::domain::ChartConfig;

    #[test]
    fn render_is_deterministic() {
        let out = run_chart(&ChartConfig::default()).unwrap();
        let a = render_ascii_chart(&out.classified, &out.spec, 72, 24);
        let b = render_ascii_chart(&out.classified, &out.spec, 72, 24);
        assert_eq!(a, b);
    }

    #[test]
    fn render_has_header_rows_and_legend() {
        let out = run_chart(&ChartConfig::default()).unwrap();
        let plot = render_ascii_chart(&out.classified, &out.spec, 60, 20);
        let lines: Vec<&str> = plot.lines().collect();

        assert_eq!(lines.len(), 20 + 2);
        assert!(lines[0].starts_with("Chart: Jan → Dec"));
        assert!(lines.last().unwrap().starts_with("legend:"));
    }

    #[test]
    fn render_places_markers_for_every_risk_level() {
        let out = run_chart(&ChartConfig::default()).unwrap();
        let plot = render_ascii_chart(&out.classified, &out.spec, 72, 24);

        // The default dataset spans all three bands.
        assert!(plot.contains('x'));
        assert!(plot.contains('o'));
        assert!(plot.contains('+'));
    }

    #[test]
    fn gutter_carries_the_tick_labels() {
        let out = run_chart(&ChartConfig::default()).unwrap();
        let plot = render_ascii_chart(&out.classified, &out.spec, 72, 24);

        for tick in ["40", "60", "100"] {
            assert!(
                plot.lines().any(|l| l.trim_start().starts_with(tick)),
                "tick {tick} missing from gutter"
            );
        }
    }
}
