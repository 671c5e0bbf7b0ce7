//! Text charts of prices and indicators.
//!
//! Charts are drawn with ratatui widgets into an off-screen buffer and returned as
//! plain text, so the caller decides whether they go to the terminal or a file.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use super::model::{PriceSeries, ReturnSeries};

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

/// Renders fixed-size charts.
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer {
    width: u16,
    height: u16,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(120, 30)
    }
}

/// One plotted line or bar set.
struct Series<'a> {
    name: &'a str,
    color: Color,
    graph_type: GraphType,
    points: Vec<(f64, f64)>,
}

/// `(x, y)` points for the defined values; x is the bar index.
fn points_of<I>(values: I) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.filter(|y| y.is_finite()).map(|y| (i as f64, y)))
        .collect()
}

fn y_bounds(series: &[Series<'_>]) -> [f64; 2] {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(_, y)| *y))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { min.abs().max(1.0) * 0.05 };
    [min - pad, max + pad]
}

/// Flattens a rendered buffer into lines of text, trailing blanks trimmed.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::with_capacity(area.width as usize * area.height as usize);
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

impl ChartRenderer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(20),
            height: height.max(8),
        }
    }

    fn render(
        &self,
        title: &str,
        dates: &[NaiveDate],
        series: &[Series<'_>],
        y_bounds: [f64; 2],
        y_title: &str,
    ) -> String {
        let datasets: Vec<Dataset<'_>> = series
            .iter()
            .map(|s| {
                Dataset::default()
                    .name(s.name.to_string())
                    .marker(Marker::Braille)
                    .graph_type(s.graph_type)
                    .style(Style::default().fg(s.color))
                    .data(&s.points)
            })
            .collect();

        let x_max = dates.len().saturating_sub(1).max(1) as f64;
        let x_labels: Vec<Line<'_>> = match (dates.first(), dates.last()) {
            (Some(first), Some(last)) => {
                let mid = dates[dates.len() / 2];
                vec![
                    Line::from(first.to_string()),
                    Line::from(mid.to_string()),
                    Line::from(last.to_string()),
                ]
            }
            _ => vec![Line::from("-"), Line::from("-")],
        };
        let [y_min, y_max] = y_bounds;
        let y_labels = vec![
            Line::from(format!("{:.2}", y_min)),
            Line::from(format!("{:.2}", (y_min + y_max) / 2.0)),
            Line::from(format!("{:.2}", y_max)),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title("Date")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(y_title.to_string())
                    .style(Style::default().fg(Color::Gray))
                    .bounds(y_bounds)
                    .labels(y_labels),
            );

        let area = Rect::new(0, 0, self.width, self.height);
        let mut buf = Buffer::empty(area);
        chart.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    /// Close price with the SMA and EMA overlays.
    pub fn plot_stock_price(&self, series: &PriceSeries) -> String {
        let lines = vec![
            Series {
                name: "Close Price",
                color: Color::Cyan,
                graph_type: GraphType::Line,
                points: points_of(series.bars.iter().map(|b| Some(b.close))),
            },
            Series {
                name: "SMA",
                color: Color::Yellow,
                graph_type: GraphType::Line,
                points: points_of(series.bars.iter().map(|b| b.sma)),
            },
            Series {
                name: "EMA",
                color: Color::Magenta,
                graph_type: GraphType::Line,
                points: points_of(series.bars.iter().map(|b| b.ema)),
            },
        ];
        let bounds = y_bounds(&lines);
        self.render(
            &format!("Close Price with SMA & EMA for {}", series.ticker),
            &series.dates(),
            &lines,
            bounds,
            "Price",
        )
    }

    /// RSI on a fixed 0–100 scale with the 30 and 70 reference lines.
    pub fn plot_rsi(&self, series: &PriceSeries) -> String {
        let last = series.len().saturating_sub(1) as f64;
        let lines = vec![
            Series {
                name: "RSI",
                color: Color::Magenta,
                graph_type: GraphType::Line,
                points: points_of(series.bars.iter().map(|b| b.rsi)),
            },
            Series {
                name: "70",
                color: Color::Red,
                graph_type: GraphType::Line,
                points: vec![(0.0, RSI_OVERBOUGHT), (last, RSI_OVERBOUGHT)],
            },
            Series {
                name: "30",
                color: Color::Green,
                graph_type: GraphType::Line,
                points: vec![(0.0, RSI_OVERSOLD), (last, RSI_OVERSOLD)],
            },
        ];
        self.render(
            &format!("Relative Strength Index (RSI) - {}", series.ticker),
            &series.dates(),
            &lines,
            [0.0, 100.0],
            "RSI",
        )
    }

    /// MACD and signal lines over the histogram bars.
    pub fn plot_macd(&self, series: &PriceSeries) -> String {
        let lines = vec![
            Series {
                name: "Histogram",
                color: Color::DarkGray,
                graph_type: GraphType::Bar,
                points: points_of(series.bars.iter().map(|b| b.macd_hist)),
            },
            Series {
                name: "MACD",
                color: Color::Cyan,
                graph_type: GraphType::Line,
                points: points_of(series.bars.iter().map(|b| b.macd)),
            },
            Series {
                name: "Signal",
                color: Color::Yellow,
                graph_type: GraphType::Line,
                points: points_of(series.bars.iter().map(|b| b.macd_signal)),
            },
        ];
        let bounds = y_bounds(&lines);
        self.render(
            &format!("MACD & Signal Line - {}", series.ticker),
            &series.dates(),
            &lines,
            bounds,
            "MACD",
        )
    }

    pub fn plot_stock_returns(&self, returns: &ReturnSeries) -> String {
        let dates: Vec<NaiveDate> = returns.points.iter().map(|(d, _)| *d).collect();
        let lines = vec![Series {
            name: "Daily Return",
            color: Color::Cyan,
            graph_type: GraphType::Line,
            points: points_of(returns.points.iter().map(|(_, r)| *r)),
        }];
        let bounds = y_bounds(&lines);
        self.render(
            &format!("Daily Returns - {}", returns.ticker),
            &dates,
            &lines,
            bounds,
            "Return",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_of_skips_missing_values() {
        let points = points_of(vec![None, Some(1.0), Some(f64::NAN), Some(2.0)]);
        assert_eq!(points, vec![(1.0, 1.0), (3.0, 2.0)]);
    }

    #[test]
    fn test_y_bounds_pads_flat_series() {
        let lines = vec![Series {
            name: "flat",
            color: Color::Cyan,
            graph_type: GraphType::Line,
            points: vec![(0.0, 10.0), (1.0, 10.0)],
        }];
        let [lo, hi] = y_bounds(&lines);
        assert!(lo < 10.0 && hi > 10.0);
        assert_eq!(y_bounds(&[]), [0.0, 1.0]);
    }
}
