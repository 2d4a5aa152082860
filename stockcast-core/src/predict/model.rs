//! Prediction model identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A model the prediction service can be asked for.
///
/// Unrecognized identifiers are kept verbatim and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Model {
    LinearRegression,
    DecisionTree,
    RandomForest,
    Other(String),
}

impl Model {
    /// Wire identifier used in the `model` query parameter and response keys.
    pub fn id(&self) -> &str {
        match self {
            Model::LinearRegression => "lr",
            Model::DecisionTree => "dt",
            Model::RandomForest => "rf",
            Model::Other(id) => id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Model::LinearRegression => "Linear Regression",
            Model::DecisionTree => "Decision Tree",
            Model::RandomForest => "Random Forest",
            Model::Other(id) => id,
        }
    }
}

impl From<&str> for Model {
    fn from(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "lr" => Model::LinearRegression,
            "dt" => Model::DecisionTree,
            "rf" => Model::RandomForest,
            _ => Model::Other(id.trim().to_string()),
        }
    }
}

impl From<String> for Model {
    fn from(id: String) -> Self {
        Model::from(id.as_str())
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.id().to_string()
    }
}

impl FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
