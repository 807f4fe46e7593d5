//! Ratatui-based terminal UI.
//!
//! The TUI renders the banded HDL trend chart and provides a small amount of
//! interactivity: a sample cursor with a tooltip readout, scheme cycling, and
//! tick-spacing adjustment.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};

use crate::app::pipeline::{run_chart, ChartOutput};
use crate::chart::{fill_strips, format_tooltip, format_value};
use crate::domain::{ChartConfig, Rgb};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::TrendPlottersChart;

/// Tick spacings offered by ↑/↓; each candidate still has to pass the
/// divisibility validation against the configured range.
const STEP_CHOICES: &[f64] = &[5.0, 10.0, 15.0, 20.0, 30.0];

/// Number of interpolated strips used to render a gradient band.
const BLEND_STRIPS: usize = 24;

/// Start the TUI.
pub fn run(config: ChartConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: ChartConfig,
    run: ChartOutput,
    cursor: usize,
    status: String,
}

impl App {
    fn new(config: ChartConfig) -> Result<Self, AppError> {
        let run = run_chart(&config)?;
        let cursor = run.samples.len().saturating_sub(1);
        Ok(Self {
            config,
            run,
            cursor,
            status: "Ready.".to_string(),
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor + 1 < self.run.samples.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('s') => {
                let mut next = self.config.clone();
                next.scheme = next.scheme.next();
                self.apply_config(next, |config| format!("scheme: {}", config.scheme.display_name()));
            }
            KeyCode::Up => self.adjust_step(1),
            KeyCode::Down => self.adjust_step(-1),
            _ => {}
        }
        false
    }

    /// Move to the next/previous tick spacing that validates against the range.
    fn adjust_step(&mut self, delta: i32) {
        let current = self.config.range.step;
        let idx = STEP_CHOICES
            .iter()
            .position(|&s| (s - current).abs() < 1e-9)
            .unwrap_or(1);
        let next_idx = idx as i32 + delta;
        if next_idx < 0 || next_idx as usize >= STEP_CHOICES.len() {
            return;
        }

        let mut next = self.config.clone();
        next.range.step = STEP_CHOICES[next_idx as usize];
        self.apply_config(next, |config| format!("step: {}", format_value(config.range.step)));
    }

    /// Re-run the pipeline with a candidate config; on validation failure the
    /// old config stays and the error lands in the status line.
    fn apply_config(&mut self, next: ChartConfig, status: impl Fn(&ChartConfig) -> String) {
        match run_chart(&next) {
            Ok(run) => {
                self.status = status(&next);
                self.config = next;
                self.run = run;
                self.cursor = self.cursor.min(self.run.samples.len().saturating_sub(1));
            }
            Err(err) => {
                self.status = format!("{err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("hdl", Style::default().fg(Color::Cyan)),
            Span::raw(" — HDL cholesterol trend"),
        ]));

        let stats = &self.run.stats;
        lines.push(Line::from(Span::styled(
            format!(
                "scheme: {} | axis: [{}, {}] step {} | n={} | y=[{}, {}]",
                self.config.scheme.display_name(),
                format_value(self.config.range.min),
                format_value(self.config.range.max),
                format_value(self.config.range.step),
                stats.n_samples,
                format_value(stats.value_min),
                format_value(stats.value_max),
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(c) = self.run.classified.get(self.cursor) {
            lines.push(Line::from(vec![
                Span::raw("selected: "),
                Span::styled(
                    format_tooltip(&c.sample, &self.config.unit),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", c.risk.display_name()),
                    Style::default().fg(band_fg(self.run.spec.bands[c.band_index].color)),
                ),
            ]));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let legend_height = self.run.spec.bands.len() as u16 + 2;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(legend_height)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_legend(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("HDL Trend").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let spec = &self.run.spec;
        let series: Vec<(f64, f64)> = self
            .run
            .samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.value))
            .collect();
        let selected = series.get(self.cursor).copied();

        // Half-an-index padding keeps the first and last readings off the frame.
        let x_bounds = [-0.5, series.len() as f64 - 0.5];
        let y_bounds = [spec.range.min, spec.range.max];
        let fills = fill_strips(&spec.bands, self.config.scheme, BLEND_STRIPS);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = TrendPlottersChart {
            series: &series,
            selected,
            fills: &fills,
            thresholds: &spec.thresholds,
            x_bounds,
            y_bounds,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            self.draw_axis_ticks(frame, inner, chart_rect, insets);
        }
    }

    /// Y tick labels from the computed tick set, plus the axis caption.
    ///
    /// The X axis stays unlabeled; month names live in the header readout.
    fn draw_axis_ticks(
        &self,
        frame: &mut ratatui::Frame<'_>,
        inner: Rect,
        chart: Rect,
        insets: AxisInsets,
    ) {
        let spec = &self.run.spec;
        let style = Style::default().fg(Color::Gray);
        let y_min = spec.range.min;
        let y_max = spec.range.max;

        for &tick in &spec.ticks {
            let u = (tick - y_min) / (y_max - y_min);
            let y = chart.y + (chart.height - 1)
                - ((chart.height - 1) as f64 * u).round() as u16;
            let label = format_value(tick);
            let label_len = label.len() as u16;
            let x = inner.x + insets.left.saturating_sub(1);
            let start = x.saturating_sub(label_len);
            if start < inner.x {
                continue;
            }
            frame.render_widget(
                Paragraph::new(label).style(style),
                Rect {
                    x: start,
                    y,
                    width: label_len,
                    height: 1,
                },
            );
        }

        let y_label = Paragraph::new(spec.axis_label.clone())
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let y_rect = Rect {
            x: inner.x,
            y: inner.y,
            width: inner.width.min(spec.axis_label.len() as u16),
            height: 1,
        };
        frame.render_widget(y_label, y_rect);
    }

    fn draw_legend(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let spec = &self.run.spec;
        let risk_levels = self.config.scheme.risk_levels();

        let mut lines: Vec<Line> = Vec::new();
        for (band, risk) in spec.bands.iter().zip(risk_levels.iter()).rev() {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(band_fg(band.color))),
                Span::raw(format!(
                    "{:<12} [{}, {})",
                    risk.display_name(),
                    format_value(band.lower),
                    format_value(band.upper),
                )),
            ]));
        }

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Bands").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "←/→ select month  s scheme  ↑/↓ tick step  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn band_fg(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 6,
        right: 2,
        top: 1,
        bottom: 1,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}
