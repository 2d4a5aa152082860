//! Prediction service client.
//!
//! The service answers `GET {base}/predict?stock=..&model=..&date=..` with
//! `{ "predictions": { "<model>": { "value": f64, "confidence": f64 } } }`.
//! Other top-level fields are ignored. There are no retries: one request per
//! call, and any failure is returned to the caller as a `PredictError`.

use super::confidence::ConfidenceBand;
use super::model::Model;
use super::selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// A point prediction for one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub value: f64,
    /// Score reported by the service, nominally 0–1.
    pub confidence: f64,
}

impl Prediction {
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_score(self.confidence)
    }
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("prediction service unreachable: {0}")]
    Network(String),

    #[error("prediction service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid prediction response: {0}")]
    InvalidResponse(String),

    #[error("prediction response has no entry for model '{model}'")]
    ModelMissing { model: String },
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: HashMap<String, Prediction>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Trait for prediction backends, so the dashboard can be driven by a mock.
pub trait PredictionService: Send + Sync {
    /// Human-readable name of this service.
    fn name(&self) -> &str;

    fn predict(&self, selection: &Selection) -> Result<Prediction, PredictError>;
}

/// Blocking HTTP client for the prediction service.
pub struct HttpPredictionClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpPredictionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PredictError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }

    /// Extract the requested model's prediction from a response body.
    pub fn parse_response(model: &Model, body: &str) -> Result<Prediction, PredictError> {
        let resp: PredictResponse = serde_json::from_str(body)
            .map_err(|e| PredictError::InvalidResponse(e.to_string()))?;

        resp.predictions
            .get(model.id())
            .copied()
            .ok_or_else(|| PredictError::ModelMissing {
                model: model.id().to_string(),
            })
    }

    /// Turn a non-2xx body into a readable message; the service sends
    /// `{"error": "..."}` for bad symbols and dates.
    fn status_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

impl PredictionService for HttpPredictionClient {
    fn name(&self) -> &str {
        "http"
    }

    fn predict(&self, selection: &Selection) -> Result<Prediction, PredictError> {
        let url = self.predict_url();
        let date = selection.iso_date();
        log::debug!(
            "requesting prediction: {url}?stock={}&model={}&date={date}",
            selection.stock,
            selection.model.id()
        );

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("stock", selection.stock.as_str()),
                ("model", selection.model.id()),
                ("date", date.as_str()),
            ])
            .send()
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| PredictError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(PredictError::Status {
                status: status.as_u16(),
                message: Self::status_message(&body),
            });
        }

        Self::parse_response(&selection.model, &body)
    }
}
