//! Plotters-powered banded trend chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + reference-area rendering
//! - less manual work for bands/lines
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Rgb;

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: fills, thresholds, series, and
/// bounds are all computed outside the render call. This keeps `render()`
/// focused on drawing and makes it easy to test the data prep separately.
pub struct TrendPlottersChart<'a> {
    /// Line series for the readings, as (series index, value).
    pub series: &'a [(f64, f64)],
    /// The reading under the cursor, highlighted with a crosshair.
    pub selected: Option<(f64, f64)>,
    /// Risk band fill strips `(lower, upper, color)`, bottom to top. A
    /// gradient scheme arrives pre-sliced into interpolated strips.
    pub fills: &'a [(f64, f64, Rgb)],
    /// Threshold boundaries drawn as horizontal reference lines.
    pub thresholds: &'a [f64],
    /// X bounds (series index space).
    pub x_bounds: [f64; 2],
    /// Y bounds (the fixed axis range).
    pub y_bounds: [f64; 2],
}

fn to_plotters(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

impl<'a> Widget for TrendPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Tick labels are drawn by the caller from the computed tick set,
            // so the mesh only contributes the axis frame.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(0)
                .y_labels(0)
                .axis_style(&WHITE)
                .draw()?;

            // 1) Risk band fills (the chart's ReferenceArea analog).
            for &(lo, hi, c) in self.fills {
                let fill = to_plotters(c).mix(0.35).filled();
                chart.draw_series(std::iter::once(Rectangle::new([(x0, lo), (x1, hi)], fill)))?;
            }

            // 2) Threshold reference lines.
            let faint = WHITE.mix(0.5);
            for &t in self.thresholds {
                chart.draw_series(LineSeries::new(vec![(x0, t), (x1, t)], &faint))?;
            }

            // 3) The HDL trend line.
            let line_color = RGBColor(64, 160, 255);
            chart.draw_series(LineSeries::new(self.series.iter().copied(), &line_color))?;

            // 4) Sample markers.
            //
            // We intentionally avoid `Circle` markers here. The underlying
            // `plotters-ratatui-backend` currently maps circle radii incorrectly
            // (pixel radius -> normalized canvas units), producing huge circles.
            //
            // A colored `Pixel` gives a clean "dot" marker that looks good in
            // terminals and reliably overrides the band fill behind it.
            chart.draw_series(
                self.series
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), WHITE)),
            )?;

            // 5) Cursor crosshair + highlighted reading.
            if let Some((sx, sy)) = self.selected {
                let accent = RGBColor(255, 230, 70);
                let crosshair = accent.mix(0.4);
                chart.draw_series(LineSeries::new(vec![(sx, y0), (sx, y1)], &crosshair))?;
                chart.draw_series(std::iter::once(Pixel::new((sx, sy), accent)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}
