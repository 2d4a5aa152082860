//! Prediction request/response types and the prediction service client.

pub mod client;
pub mod confidence;
pub mod model;
pub mod selection;

pub use client::{
    HttpPredictionClient, PredictError, Prediction, PredictionService, DEFAULT_BASE_URL,
};
pub use confidence::ConfidenceBand;
pub use model::Model;
pub use selection::{Selection, SelectionError, SelectionField};
