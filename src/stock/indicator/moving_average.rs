use ta::indicators::SimpleMovingAverage;
use ta::Next;

use super::smoothing::SeededAverage;
use crate::error::Result;

/// Simple moving average; the first `window - 1` positions are `None`.
pub fn sma(closes: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    let mut indicator = SimpleMovingAverage::new(window)?;
    Ok(closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let value = indicator.next(close);
            (i + 1 >= window).then_some(value)
        })
        .collect())
}

/// Exponential moving average seeded with the SMA of the first `window` closes.
pub fn ema(closes: &[f64], window: usize) -> Result<Vec<Option<f64>>> {
    let mut indicator = SeededAverage::exponential(window)?;
    Ok(closes.iter().map(|&close| indicator.next(close)).collect())
}
