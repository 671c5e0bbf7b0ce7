use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day. Indicator fields are `None` until computed or while the
/// indicator still lacks history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<f64>,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
}

impl StockBar {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
            sma: None,
            ema: None,
            rsi: None,
            macd: None,
            macd_signal: None,
            macd_hist: None,
        }
    }
}

/// A ticker's bars ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: String,
    pub bars: Vec<StockBar>,
}

impl PriceSeries {
    pub fn new(ticker: impl Into<String>, mut bars: Vec<StockBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self {
            ticker: ticker.into(),
            bars,
        }
    }

    /// Builds a series from closes on consecutive days starting at `start`.
    pub fn from_closes(ticker: impl Into<String>, start: NaiveDate, closes: &[f64]) -> Self {
        let bars = start
            .iter_days()
            .zip(closes)
            .map(|(date, &close)| StockBar::new(date, close))
            .collect();
        Self::new(ticker, bars)
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Daily percentage change of a close series; the first point has no previous close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    pub ticker: String,
    pub points: Vec<(NaiveDate, Option<f64>)>,
}

impl ReturnSeries {
    pub fn from_closes(ticker: impl Into<String>, closes: &[(NaiveDate, f64)]) -> Self {
        let mut points = Vec::with_capacity(closes.len());
        let mut prev: Option<f64> = None;
        for &(date, close) in closes {
            let change = prev.and_then(|p| if p == 0.0 { None } else { Some(close / p - 1.0) });
            points.push((date, change));
            prev = Some(close);
        }
        Self {
            ticker: ticker.into(),
            points,
        }
    }
}
