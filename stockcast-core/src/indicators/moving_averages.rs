//! 50- and 200-period trailing moving averages for the MA chart.

use super::{Indicator, TrailingSma};
use crate::domain::TickerSeries;
use serde::{Deserialize, Serialize};

pub const SHORT_WINDOW: usize = 50;
pub const LONG_WINDOW: usize = 200;

/// Two parallel series, each as long as the input closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub ma50: Vec<Option<f64>>,
    pub ma200: Vec<Option<f64>>,
}

impl MovingAverages {
    pub fn calculate(closes: &[f64]) -> Self {
        Self {
            ma50: TrailingSma::new(SHORT_WINDOW).compute(closes),
            ma200: TrailingSma::new(LONG_WINDOW).compute(closes),
        }
    }

    pub fn from_series(series: &TickerSeries) -> Self {
        Self::calculate(&series.closes())
    }

    pub fn len(&self) -> usize {
        self.ma50.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ma50.is_empty()
    }

    /// Values at the last position, if any.
    pub fn latest(&self) -> (Option<f64>, Option<f64>) {
        (
            self.ma50.last().copied().flatten(),
            self.ma200.last().copied().flatten(),
        )
    }
}
