//! Symbol table. Maps ticker symbols to their price file names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static mapping from ticker symbol to CSV file name.
///
/// Symbols are stored and looked up lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct SymbolTable {
    files: BTreeMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// The five NSE tickers the dashboard ships with.
    pub fn default_nse() -> Self {
        [
            ("tcs", "tcs.csv"),
            ("infosys", "infy.csv"),
            ("itc", "itc.csv"),
            ("yesbank", "yes.csv"),
            ("hdfc", "hdfc.csv"),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, symbol: &str, file_name: impl Into<String>) {
        self.files
            .insert(symbol.trim().to_lowercase(), file_name.into());
    }

    /// File name for a symbol, if the symbol is known.
    pub fn file_for(&self, symbol: &str) -> Option<&str> {
        self.files
            .get(&symbol.trim().to_lowercase())
            .map(|f| f.as_str())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.file_for(symbol).is_some()
    }

    /// Known symbols in sorted order.
    pub fn symbols(&self) -> Vec<&str> {
        self.files.keys().map(|s| s.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(s, f)| (s.as_str(), f.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::default_nse()
    }
}

impl From<BTreeMap<String, String>> for SymbolTable {
    fn from(files: BTreeMap<String, String>) -> Self {
        files.into_iter().collect()
    }
}

impl From<SymbolTable> for BTreeMap<String, String> {
    fn from(table: SymbolTable) -> Self {
        table.files
    }
}

impl<S: AsRef<str>, F: Into<String>> FromIterator<(S, F)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, F)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, file) in iter {
            table.insert(symbol.as_ref(), file);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_dashboard_files() {
        let t = SymbolTable::default_nse();
        assert_eq!(t.len(), 5);
        assert_eq!(t.file_for("infosys"), Some("infy.csv"));
        assert_eq!(t.file_for("yesbank"), Some("yes.csv"));
        assert_eq!(t.file_for("tcs"), Some("tcs.csv"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = SymbolTable::default_nse();
        assert_eq!(t.file_for("TCS"), Some("tcs.csv"));
        assert_eq!(t.file_for(" Hdfc "), Some("hdfc.csv"));
    }

    #[test]
    fn unknown_symbol_has_no_file() {
        let t = SymbolTable::default_nse();
        assert!(t.file_for("reliance").is_none());
        assert!(!t.contains("reliance"));
    }

    #[test]
    fn toml_keys_are_normalized() {
        let t: SymbolTable = toml::from_str("WIPRO = \"wipro.csv\"\n").unwrap();
        assert_eq!(t.symbols(), vec!["wipro"]);
        assert_eq!(t.file_for("wipro"), Some("wipro.csv"));
    }
}
