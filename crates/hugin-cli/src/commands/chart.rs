//! Inline terminal chart rendering.
//!
//! Draws overlaid line series as a one-shot ratatui [`Chart`] in an
//! inline viewport: no event loop, no alternate screen, the figure is
//! simply left in the scrollback like any other output.

use std::io;

use anyhow::Result;
use ratatui::{
    Terminal, TerminalOptions, Viewport,
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Colors cycled through for overlaid series.
const SERIES_COLORS: [Color; 3] = [Color::Cyan, Color::Magenta, Color::Yellow];

/// Preferred viewport height in terminal rows.
const PREFERRED_HEIGHT: u16 = 16;

/// A named series of `(x, y)` points.
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Data points in x order.
    pub points: Vec<(f64, f64)>,
}

/// Render overlaid line series as one inline chart.
///
/// Axis tick labels are deliberately omitted; the legend (one entry
/// per named series) is the only annotation on the figure.
pub fn render_overlaid(title: &str, series: &[Series]) -> Result<()> {
    let height = viewport_height();
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;

    let (x_bounds, y_bounds) = bounds(series);

    terminal.draw(|frame| {
        let datasets = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Dataset::default()
                    .name(s.label.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                    .data(&s.points)
            })
            .collect::<Vec<_>>();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(title.to_string())
                    .borders(Borders::ALL),
            )
            .x_axis(Axis::default().bounds(x_bounds))
            .y_axis(Axis::default().bounds(y_bounds));

        frame.render_widget(chart, frame.size());
    })?;

    // Move past the viewport so later output starts on a fresh line.
    println!();
    Ok(())
}

/// Fit the viewport to small terminals.
fn viewport_height() -> u16 {
    match crossterm::terminal::size() {
        Ok((_cols, rows)) if rows > 4 => PREFERRED_HEIGHT.min(rows - 2),
        _ => PREFERRED_HEIGHT,
    }
}

/// Joint axis bounds over every series, with a little y headroom.
fn bounds(series: &[Series]) -> ([f64; 2], [f64; 2]) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    ([x_min, x_max], [0.0, y_max * 1.05])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_all_series() {
        let series = vec![
            Series {
                label: "a".into(),
                points: vec![(0.0, 0.1), (1.0, 0.5)],
            },
            Series {
                label: "b".into(),
                points: vec![(0.5, 0.9), (2.0, 0.2)],
            },
        ];
        let (x, y) = bounds(&series);
        assert_eq!(x, [0.0, 2.0]);
        assert!(y[0] == 0.0 && y[1] > 0.9);
    }

    #[test]
    fn test_bounds_of_empty_input() {
        let (x, y) = bounds(&[]);
        assert_eq!(x, [0.0, 1.0]);
        assert_eq!(y, [0.0, 1.0]);
    }
}
