//! Domain types for stockcast

pub mod price;

pub use price::{PricePoint, RowDiagnostic, TickerSeries};
