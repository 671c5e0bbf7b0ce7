use std::fmt;

use ta::{Next, Reset};

use crate::error::{AnalysisError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Kind {
    /// `prev + k * (x - prev)` with `k = 2 / (n + 1)`.
    Exponential,
    /// Wilder's `(prev * (n - 1) + x) / n`.
    Wilder,
}

/// Recursive average seeded with the simple mean of its first `period` inputs.
///
/// Returns `None` until the seed window is full, then one value per input.
#[derive(Debug, Clone)]
pub struct SeededAverage {
    kind: Kind,
    period: usize,
    seed_sum: f64,
    seen: usize,
    value: Option<f64>,
}

impl SeededAverage {
    fn with_kind(kind: Kind, period: usize) -> Result<Self> {
        if period == 0 {
            return Err(AnalysisError::InvalidParameter("period must be greater than 0".to_string()));
        }
        Ok(Self {
            kind,
            period,
            seed_sum: 0.0,
            seen: 0,
            value: None,
        })
    }

    pub fn exponential(period: usize) -> Result<Self> {
        Self::with_kind(Kind::Exponential, period)
    }

    pub fn wilder(period: usize) -> Result<Self> {
        Self::with_kind(Kind::Wilder, period)
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Next<f64> for SeededAverage {
    type Output = Option<f64>;

    fn next(&mut self, input: f64) -> Self::Output {
        match self.value {
            Some(prev) => {
                let n = self.period as f64;
                let next = match self.kind {
                    Kind::Exponential => prev + (input - prev) * (2.0 / (n + 1.0)),
                    Kind::Wilder => (prev * (n - 1.0) + input) / n,
                };
                self.value = Some(next);
            }
            None => {
                self.seed_sum += input;
                self.seen += 1;
                if self.seen == self.period {
                    self.value = Some(self.seed_sum / self.period as f64);
                }
            }
        }
        self.value
    }
}

impl Reset for SeededAverage {
    fn reset(&mut self) {
        self.seed_sum = 0.0;
        self.seen = 0;
        self.value = None;
    }
}

impl fmt::Display for SeededAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Exponential => write!(f, "EMA({})", self.period),
            Kind::Wilder => write!(f, "RMA({})", self.period),
        }
    }
}
