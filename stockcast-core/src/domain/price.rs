//! Price history types. One closing price per row, in file order.

use serde::{Deserialize, Serialize};

/// A single closing price.
///
/// The date is kept as the label found in the source file; it is never
/// parsed, so whatever calendar format the file uses is carried through to
/// chart labels unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            close,
        }
    }
}

/// A row the loader refused to turn into a `PricePoint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDiagnostic {
    /// 1-based line number in the source text (the header is line 1).
    pub line: usize,
    pub raw: String,
    pub reason: String,
}

/// Ordered price history for one ticker.
///
/// Order is source row order. Blank rows are never present. Dates are neither
/// deduplicated nor sorted; the loader trusts the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
    /// Rows skipped under the lenient parse policy.
    pub diagnostics: Vec<RowDiagnostic>,
    /// BLAKE3 hex digest of the raw source text.
    pub source_hash: String,
}

impl TickerSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in row order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Date labels in row order.
    pub fn dates(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.clone()).collect()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// True if any row was skipped while parsing.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
