//! Price source trait and structured error types.
//!
//! A `PriceSource` hands back the raw text of one ticker's CSV file. The
//! loader and store sit above this trait. Sources know nothing about
//! parsing or caching, so tests can swap in an in-memory source.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Structured error types for price data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown symbol '{symbol}': not present in the symbol table")]
    UnknownSymbol { symbol: String },

    #[error("price source unavailable for '{file}': {reason}")]
    SourceUnavailable { file: String, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid price for '{symbol}' at line {line}: {raw:?}")]
    InvalidPrice {
        symbol: String,
        line: usize,
        raw: String,
    },
}

/// Trait for anything that can produce the text of a price file.
pub trait PriceSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the full text of `file_name`.
    fn fetch_text(&self, file_name: &str) -> Result<String, DataError>;
}

/// Reads price files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    base_dir: PathBuf,
}

impl DirSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl PriceSource for DirSource {
    fn name(&self) -> &str {
        "directory"
    }

    fn fetch_text(&self, file_name: &str) -> Result<String, DataError> {
        let path = self.base_dir.join(file_name);
        std::fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
    }
}

/// Fetches price files over HTTP as `{base_url}/{file_name}`.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DataError> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::SourceUnavailable {
                file: base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client, base_url })
    }

    fn file_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file_name)
    }
}

impl PriceSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn fetch_text(&self, file_name: &str) -> Result<String, DataError> {
        let url = self.file_url(file_name);
        let unavailable = |reason: String| DataError::SourceUnavailable {
            file: url.clone(),
            reason,
        };

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {status}")));
        }

        resp.text().map_err(|e| unavailable(e.to_string()))
    }
}
