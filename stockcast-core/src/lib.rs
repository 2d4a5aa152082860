//! Stockcast Core: price history, moving averages, predictions, dashboard view.
//!
//! This crate contains:
//! - Domain types (price points, ticker series)
//! - CSV loading through a pluggable price source, memoized in a `PriceStore`
//! - Trailing 50/200-period moving averages
//! - Selection validation and the prediction service client
//! - Dashboard view assembly (summary card and chart data)
//! - TOML configuration

pub mod config;
pub mod dashboard;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod predict;

pub use config::{ConfigError, StockcastConfig};

#[cfg(test)]
mod test_helpers;
