//! Dashboard flow: validate → load history → predict → build view.

pub mod view;

pub use view::{format_price, DashboardView, MaChart, PriceChart, Summary};

use crate::data::{CsvLoader, DataError, PriceStore};
use crate::predict::{PredictError, PredictionService, Selection, SelectionError};
use thiserror::Error;

/// Any failure in the dashboard flow.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Predict(#[from] PredictError),
}

impl DashboardError {
    /// Single user-facing message per failure class.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Selection(e) => e.user_message(),
            DashboardError::Data(_) => {
                "Error loading price history. Please check the price data source.".to_string()
            }
            DashboardError::Predict(_) => {
                "Error fetching prediction. Please check the prediction server.".to_string()
            }
        }
    }
}

pub struct Dashboard<'a> {
    loader: CsvLoader<'a>,
    predictor: &'a dyn PredictionService,
}

impl<'a> Dashboard<'a> {
    pub fn new(loader: CsvLoader<'a>, predictor: &'a dyn PredictionService) -> Self {
        Self { loader, predictor }
    }

    /// Run one prediction from raw control values.
    ///
    /// Nothing is loaded or requested unless the selection validates.
    pub fn run(
        &self,
        store: &mut PriceStore,
        stock: &str,
        model: &str,
        date: &str,
    ) -> Result<DashboardView, DashboardError> {
        let selection = Selection::new(stock, model, date)?;
        self.run_selection(store, &selection)
    }

    pub fn run_selection(
        &self,
        store: &mut PriceStore,
        selection: &Selection,
    ) -> Result<DashboardView, DashboardError> {
        let series = self.loader.load(store, &selection.stock)?;
        let prediction = self.predictor.predict(selection).map_err(|e| {
            log::error!("prediction fetch error via {}: {e}", self.predictor.name());
            e
        })?;

        log::info!(
            "{} {} on {}: {} ({})",
            selection.stock,
            selection.model.id(),
            selection.iso_date(),
            prediction.value,
            prediction.band()
        );

        Ok(DashboardView::build(selection, &series, &prediction))
    }
}
