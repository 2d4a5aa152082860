//! Memoizing CSV loader.
//!
//! `CsvLoader::load` resolves a symbol through the symbol table, fetches the
//! file text from a `PriceSource`, parses it, and caches the result in the
//! caller's `PriceStore`. A symbol already in the store is returned without
//! touching the source. Nothing is cached when a load fails.

use super::parse::{parse_series, ParsePolicy};
use super::source::{DataError, PriceSource};
use super::store::PriceStore;
use super::symbols::SymbolTable;
use crate::domain::TickerSeries;
use std::sync::Arc;

pub struct CsvLoader<'a> {
    symbols: &'a SymbolTable,
    source: &'a dyn PriceSource,
    policy: ParsePolicy,
}

impl<'a> CsvLoader<'a> {
    pub fn new(symbols: &'a SymbolTable, source: &'a dyn PriceSource) -> Self {
        Self {
            symbols,
            source,
            policy: ParsePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load a symbol's series, using the store as a memo.
    pub fn load(
        &self,
        store: &mut PriceStore,
        symbol: &str,
    ) -> Result<Arc<TickerSeries>, DataError> {
        let key = symbol.trim().to_lowercase();

        if let Some(cached) = store.get(&key) {
            log::debug!("price store hit for {key}");
            return Ok(cached);
        }

        let file = self
            .symbols
            .file_for(&key)
            .ok_or_else(|| DataError::UnknownSymbol {
                symbol: symbol.to_string(),
            })?;

        log::debug!("fetching {file} for {key} via {}", self.source.name());
        let text = self.source.fetch_text(file)?;
        let series = parse_series(&key, &text, self.policy)?;

        for diag in &series.diagnostics {
            log::warn!(
                "{key}: skipped line {} of {file} ({}): {:?}",
                diag.line,
                diag.reason,
                diag.raw
            );
        }
        log::info!("loaded {} rows for {key} from {file}", series.len());

        Ok(store.get_or_insert(series))
    }
}
