//! Price history ingestion and per-session caching

pub mod loader;
pub mod parse;
pub mod source;
pub mod store;
pub mod symbols;

pub use loader::CsvLoader;
pub use parse::{parse_series, ParsePolicy};
pub use source::{DataError, DirSource, HttpSource, PriceSource};
pub use store::PriceStore;
pub use symbols::SymbolTable;
