//! Technical indicators appended to a [`PriceSeries`].

pub mod macd;
pub mod moving_average;
pub mod rsi;
pub mod smoothing;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use macd::{macd, MacdPoint};
pub use moving_average::{ema, sma};
pub use rsi::rsi;
pub use smoothing::SeededAverage;

use super::model::PriceSeries;
use crate::error::Result;

/// Indicator windows. The SMA and EMA windows are independent; neither is
/// assumed to be the shorter one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub sma_window: usize,
    pub ema_window: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_window: 20,
            ema_window: 50,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl Display for IndicatorConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sma:{} ema:{} rsi:{} macd:{}/{}/{}",
            self.sma_window, self.ema_window, self.rsi_period, self.macd_fast, self.macd_slow, self.macd_signal
        )
    }
}

/// Writes indicator columns into a series in place.
#[derive(Debug, Clone, Default)]
pub struct IndicatorCalculator {
    config: IndicatorConfig,
}

impl IndicatorCalculator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Fills `sma` and `ema`.
    pub fn calculate_moving_averages<'a>(&self, series: &'a mut PriceSeries) -> Result<&'a mut PriceSeries> {
        let closes = series.closes();
        let sma_values = sma(&closes, self.config.sma_window)?;
        let ema_values = ema(&closes, self.config.ema_window)?;
        for ((bar, s), e) in series.bars.iter_mut().zip(sma_values).zip(ema_values) {
            bar.sma = s;
            bar.ema = e;
        }
        debug!("{}: moving averages sma={} ema={}", series.ticker, self.config.sma_window, self.config.ema_window);
        Ok(series)
    }

    pub fn calculate_rsi<'a>(&self, series: &'a mut PriceSeries) -> Result<&'a mut PriceSeries> {
        let values = rsi(&series.closes(), self.config.rsi_period)?;
        for (bar, v) in series.bars.iter_mut().zip(values) {
            bar.rsi = v;
        }
        debug!("{}: rsi period={}", series.ticker, self.config.rsi_period);
        Ok(series)
    }

    /// Fills `macd`, `macd_signal` and `macd_hist`.
    pub fn calculate_macd<'a>(&self, series: &'a mut PriceSeries) -> Result<&'a mut PriceSeries> {
        let points = macd(
            &series.closes(),
            self.config.macd_fast,
            self.config.macd_slow,
            self.config.macd_signal,
        )?;
        for (bar, point) in series.bars.iter_mut().zip(points) {
            bar.macd = point.map(|p| p.macd);
            bar.macd_signal = point.map(|p| p.signal);
            bar.macd_hist = point.map(|p| p.histogram);
        }
        debug!(
            "{}: macd {}/{}/{}",
            series.ticker, self.config.macd_fast, self.config.macd_slow, self.config.macd_signal
        );
        Ok(series)
    }

    pub fn calculate_all<'a>(&self, series: &'a mut PriceSeries) -> Result<&'a mut PriceSeries> {
        self.calculate_moving_averages(series)?;
        self.calculate_rsi(series)?;
        self.calculate_macd(series)
    }
}
