//! Trailing indicators over closing prices.
//!
//! Indicators are pure functions: closes in, an equally long series of
//! `Option<f64>` out. `None` marks positions without enough history yet.

pub mod moving_averages;
pub mod sma;

pub use moving_averages::{MovingAverages, LONG_WINDOW, SHORT_WINDOW};
pub use sma::TrailingSma;

/// Trait for indicators.
///
/// `compute` must return exactly one value per input close, and the value at
/// index i may only depend on closes strictly before i.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "sma_50").
    fn name(&self) -> &str;

    /// Number of leading positions that are always `None`.
    fn lookback(&self) -> usize;

    /// Compute the indicator over the full close series.
    fn compute(&self, closes: &[f64]) -> Vec<Option<f64>>;
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
