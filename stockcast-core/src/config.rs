//! TOML configuration.
//!
//! Every section is optional; anything omitted falls back to the defaults
//! (local `data/` directory, the five bundled tickers, and a prediction
//! service on `http://localhost:5000`).
//!
//! ```toml
//! [data]
//! dir = "data"
//! # base_url = "http://localhost:8000"
//! policy = "skip_invalid"
//!
//! [predictor]
//! base_url = "http://localhost:5000"
//! timeout_secs = 30
//!
//! [symbols]
//! tcs = "tcs.csv"
//! ```

use crate::data::{DataError, DirSource, HttpSource, ParsePolicy, PriceSource, SymbolTable};
use crate::predict::{HttpPredictionClient, PredictError, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the per-ticker CSV files.
    pub dir: PathBuf,
    /// Fetch files over HTTP from here instead of reading `dir`.
    pub base_url: Option<String>,
    pub policy: ParsePolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            base_url: None,
            policy: ParsePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StockcastConfig {
    pub data: DataConfig,
    pub predictor: PredictorConfig,
    pub symbols: SymbolTable,
}

impl StockcastConfig {
    /// Load from a TOML file. A relative `data.dir` is resolved against the
    /// config file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;

        if config.data.dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data.dir = parent.join(&config.data.dir);
            }
        }
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.predictor.timeout_secs)
    }

    /// Price source chosen by `[data]`: HTTP if `base_url` is set, else the directory.
    pub fn price_source(&self) -> Result<Box<dyn PriceSource>, DataError> {
        match &self.data.base_url {
            Some(url) => Ok(Box::new(HttpSource::new(url.clone(), self.timeout())?)),
            None => Ok(Box::new(DirSource::new(self.data.dir.clone()))),
        }
    }

    pub fn prediction_client(&self) -> Result<HttpPredictionClient, PredictError> {
        HttpPredictionClient::new(self.predictor.base_url.clone(), self.timeout())
    }
}
