//! Two-column `date,close` text parsing.
//!
//! Rules, in order:
//! 1. Split into lines and drop the first (header) line unconditionally.
//! 2. Drop lines that are empty after trimming whitespace.
//! 3. Split each remaining line on commas: field 0 is the date label
//!    (trimmed), field 1 is the closing price. Further fields are ignored.
//!
//! A price that is missing, unparseable, or non-finite never becomes a
//! `PricePoint`; what happens instead is decided by `ParsePolicy`.

use super::source::DataError;
use crate::domain::{PricePoint, RowDiagnostic, TickerSeries};
use serde::{Deserialize, Serialize};

/// What to do with a row whose price cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Drop the row and record a diagnostic on the series.
    #[default]
    SkipInvalid,
    /// Fail the whole load.
    Strict,
}

/// Parse the full text of a price file into a `TickerSeries`.
pub fn parse_series(
    symbol: &str,
    text: &str,
    policy: ParsePolicy,
) -> Result<TickerSeries, DataError> {
    let mut points = Vec::new();
    let mut diagnostics = Vec::new();

    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = idx + 1;
        let mut fields = line.split(',');
        let date = fields.next().unwrap_or_default().trim();

        match parse_price(fields.next()) {
            Ok(close) => points.push(PricePoint::new(date, close)),
            Err(reason) => match policy {
                ParsePolicy::Strict => {
                    return Err(DataError::InvalidPrice {
                        symbol: symbol.to_string(),
                        line: line_no,
                        raw: line.to_string(),
                    })
                }
                ParsePolicy::SkipInvalid => diagnostics.push(RowDiagnostic {
                    line: line_no,
                    raw: line.to_string(),
                    reason,
                }),
            },
        }
    }

    Ok(TickerSeries {
        symbol: symbol.to_string(),
        points,
        diagnostics,
        source_hash: blake3::hash(text.as_bytes()).to_hex().to_string(),
    })
}

fn parse_price(field: Option<&str>) -> Result<f64, String> {
    let raw = field.ok_or_else(|| "missing price column".to_string())?.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("price {raw:?} is not a number"))?;
    if !value.is_finite() {
        return Err(format!("price {raw:?} is not finite"));
    }
    Ok(value)
}
