//! Dashboard view: summary card plus price and moving-average chart data.
//!
//! This is plain data: labels and datasets ready for any charting frontend.

use crate::domain::TickerSeries;
use crate::indicators::MovingAverages;
use crate::predict::{ConfidenceBand, Prediction, Selection};
use serde::{Deserialize, Serialize};

pub const CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Uppercased ticker symbol.
    pub stock: String,
    pub model: String,
    /// e.g. "Oct 14, 2026"
    pub date: String,
    /// e.g. "₹3888.17"
    pub prediction: String,
    pub confidence: ConfidenceBand,
}

/// Historical closes followed by a single predicted point.
///
/// `labels` and `predicted` have one more entry than `historical`; the
/// predicted dataset is `None` everywhere except the final slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChart {
    pub labels: Vec<String>,
    pub historical: Vec<f64>,
    pub predicted: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaChart {
    pub labels: Vec<String>,
    pub ma50: Vec<Option<f64>>,
    pub ma200: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub summary: Summary,
    pub price_chart: PriceChart,
    pub ma_chart: MaChart,
}

impl DashboardView {
    pub fn build(selection: &Selection, series: &TickerSeries, prediction: &Prediction) -> Self {
        let labels = series.dates();
        let historical = series.closes();

        let summary = Summary {
            stock: selection.stock.to_uppercase(),
            model: selection.model.display_name().to_string(),
            date: selection.date.format("%b %d, %Y").to_string(),
            prediction: format_price(prediction.value),
            confidence: prediction.band(),
        };

        let mut price_labels = labels.clone();
        price_labels.push(selection.date.format("%b %Y").to_string());

        let mut predicted = vec![None; historical.len()];
        predicted.push(Some(prediction.value));

        let ma = MovingAverages::calculate(&historical);

        Self {
            summary,
            price_chart: PriceChart {
                labels: price_labels,
                historical,
                predicted,
            },
            ma_chart: MaChart {
                labels,
                ma50: ma.ma50,
                ma200: ma.ma200,
            },
        }
    }
}

/// Format a price the way the summary card shows it.
pub fn format_price(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value}")
}
