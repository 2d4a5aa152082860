//! Trailing Simple Moving Average.
//!
//! Mean of the `window` closes strictly preceding each position:
//! out[i] = mean(closes[i-window .. i]) for i >= window, `None` before.
//! The current close is never part of its own average.

use super::Indicator;

#[derive(Debug, Clone)]
pub struct TrailingSma {
    window: usize,
    name: String,
}

impl TrailingSma {
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "SMA window must be >= 1");
        Self {
            window,
            name: format!("sma_{window}"),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Indicator for TrailingSma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let w = self.window;
        // Each window is summed afresh, left to right; no running sum, so the
        // result matches a plain reduce over the slice bit for bit.
        (0..closes.len())
            .map(|i| (i >= w).then(|| closes[i - w..i].iter().sum::<f64>() / w as f64))
            .collect()
    }
}
