use polars::error::PolarsError;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to draw {chart} chart: {message}")]
    Chart {
        chart: &'static str,
        message: String,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Failed to encode CSV export")]
    CsvEncode(#[source] PolarsError),

    #[error("Failed to format dashboard page")]
    Page(#[from] std::fmt::Error),
}

impl RenderError {
    pub(crate) fn chart(chart: &'static str, error: impl Display) -> Self {
        RenderError::Chart {
            chart,
            message: error.to_string(),
        }
    }
}
