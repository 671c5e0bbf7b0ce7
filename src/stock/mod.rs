//! Stock price loading, technical indicators and charts.

pub mod chart;
pub mod indicator;
pub mod loader;
pub mod market_data;
pub mod model;

use std::fmt::{self, Display, Formatter};

pub use chart::ChartRenderer;
pub use indicator::{IndicatorCalculator, IndicatorConfig};
pub use loader::StockLoader;
pub use market_data::MarketDataClient;
pub use model::{PriceSeries, ReturnSeries, StockBar};

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.2}", x)).unwrap_or_else(|| "-".to_string())
}

/// Latest bar with its indicator values.
impl Display for PriceSeries {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- {} ({} bars) ---", self.ticker, self.len())?;
        match self.bars.last() {
            Some(bar) => writeln!(
                f,
                "{}  close {:.2}  sma {}  ema {}  rsi {}  macd {}  signal {}  hist {}",
                bar.date,
                bar.close,
                fmt_opt(bar.sma),
                fmt_opt(bar.ema),
                fmt_opt(bar.rsi),
                fmt_opt(bar.macd),
                fmt_opt(bar.macd_signal),
                fmt_opt(bar.macd_hist)
            ),
            None => writeln!(f, "no data"),
        }
    }
}
