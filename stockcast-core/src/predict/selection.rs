//! User selection (stock, model and date), validated before any request.

use super::model::Model;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The ISO date format the prediction service accepts.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Stock,
    Model,
    Date,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SelectionField::Stock => "stock",
            SelectionField::Model => "model",
            SelectionField::Date => "date",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("no {0} selected")]
    Missing(SelectionField),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

impl SelectionError {
    /// Message shown to the user instead of issuing a request.
    pub fn user_message(&self) -> String {
        match self {
            SelectionError::Missing(_) => {
                "Please select stock, model, and date before predicting!".to_string()
            }
            SelectionError::InvalidDate(raw) => {
                format!("Invalid date '{raw}'. Please use YYYY-MM-DD.")
            }
        }
    }
}

/// A complete, validated selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Lowercased ticker symbol.
    pub stock: String,
    pub model: Model,
    pub date: NaiveDate,
}

impl Selection {
    /// Validate raw control values. Every field must be non-blank.
    pub fn new(stock: &str, model: &str, date: &str) -> Result<Self, SelectionError> {
        let (stock, model, date) = (stock.trim(), model.trim(), date.trim());

        for (value, field) in [
            (stock, SelectionField::Stock),
            (model, SelectionField::Model),
            (date, SelectionField::Date),
        ] {
            if value.is_empty() {
                return Err(SelectionError::Missing(field));
            }
        }

        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| SelectionError::InvalidDate(date.to_string()))?;

        Ok(Self {
            stock: stock.to_lowercase(),
            model: Model::from(model),
            date: parsed,
        })
    }

    /// Date as sent on the wire.
    pub fn iso_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
