//! Per-session price store.
//!
//! Maps symbol → `Arc<TickerSeries>`. Entries are filled at most once and
//! are never evicted for the lifetime of the store; repeated loads of the
//! same symbol hand back the same `Arc`.

use crate::domain::TickerSeries;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct PriceStore {
    series: HashMap<String, Arc<TickerSeries>>,
}

impl PriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached series for a symbol.
    pub fn get(&self, symbol: &str) -> Option<Arc<TickerSeries>> {
        self.series.get(symbol).cloned()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.series.contains_key(symbol)
    }

    /// Insert a series under its own symbol, unless one is already cached.
    ///
    /// Returns whichever series ends up stored; an existing entry always wins.
    pub fn get_or_insert(&mut self, series: TickerSeries) -> Arc<TickerSeries> {
        self.series
            .entry(series.symbol.clone())
            .or_insert_with(|| Arc::new(series))
            .clone()
    }

    /// Cached symbols in sorted order.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.series.keys().map(|s| s.as_str()).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
