use serde::{Deserialize, Serialize};
use ta::Next;

use super::smoothing::SeededAverage;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD line, signal line and histogram.
///
/// The fast EMA starts `slow - fast` closes late so both EMAs produce their first
/// value at index `slow - 1`. Output stays `None` until the signal EMA is seeded,
/// at index `slow + signal - 2`. A fast period longer than the slow one is swapped.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> Result<Vec<Option<MacdPoint>>> {
    let (fast, slow) = if slow < fast { (slow, fast) } else { (fast, slow) };
    let mut fast_ema = SeededAverage::exponential(fast)?;
    let mut slow_ema = SeededAverage::exponential(slow)?;
    let mut signal_ema = SeededAverage::exponential(signal)?;
    let fast_offset = slow - fast;

    let mut out = Vec::with_capacity(closes.len());
    for (i, &close) in closes.iter().enumerate() {
        let slow_value = slow_ema.next(close);
        let fast_value = if i >= fast_offset { fast_ema.next(close) } else { None };

        let point = match (fast_value, slow_value) {
            (Some(f), Some(s)) => {
                let line = f - s;
                signal_ema.next(line).map(|sig| MacdPoint {
                    macd: line,
                    signal: sig,
                    histogram: line - sig,
                })
            }
            _ => None,
        };
        out.push(point);
    }
    Ok(out)
}
