use ta::Next;

use super::smoothing::SeededAverage;
use crate::error::Result;

/// Relative strength index with Wilder smoothing.
///
/// Defined from index `period` on. When the smoothed gain and loss are both zero
/// (a flat series) the value is `0.0`.
pub fn rsi(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    let mut gains = SeededAverage::wilder(period)?;
    let mut losses = SeededAverage::wilder(period)?;

    let mut out = Vec::with_capacity(closes.len());
    let mut prev: Option<f64> = None;
    for &close in closes {
        let value = match prev {
            None => None,
            Some(p) => {
                let change = close - p;
                let avg_gain = gains.next(change.max(0.0));
                let avg_loss = losses.next((-change).max(0.0));
                match (avg_gain, avg_loss) {
                    (Some(g), Some(l)) => {
                        let total = g + l;
                        Some(if total == 0.0 { 0.0 } else { 100.0 * g / total })
                    }
                    _ => None,
                }
            }
        };
        out.push(value);
        prev = Some(close);
    }
    Ok(out)
}
