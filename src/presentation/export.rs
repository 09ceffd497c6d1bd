//! Daily summary table merged with the current conditions, and its CSV export.

use crate::presentation::error::RenderError;
use crate::types::current_conditions::CurrentConditions;
use crate::types::daily_summary::DailySummary;
use polars::prelude::*;
use serde::Serialize;

pub const CSV_FILENAME: &str = "forecast.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Column headers of the export, in order.
pub const EXPORT_HEADERS: [&str; 6] = [
    "Date",
    "Min Temp (°C)",
    "Max Temp (°C)",
    "Current Temp (°C)",
    "Current Humidity (%)",
    "Current Wind Speed (m/s)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub date: String,
    /// Empty in the CSV when the forecast did not carry it.
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub current_temp: f64,
    pub current_humidity: f64,
    pub current_wind_speed: f64,
}

/// One row per summarized date; the current-condition columns repeat on every row.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExportTable {
    rows: Vec<ExportRow>,
}

impl ExportTable {
    pub fn merge(daily: &[DailySummary], current: &CurrentConditions) -> ExportTable {
        let rows = daily
            .iter()
            .map(|day| ExportRow {
                date: day.date.clone(),
                min_temp: day.min_temp,
                max_temp: day.max_temp,
                current_temp: current.temperature,
                current_humidity: current.humidity,
                current_wind_speed: current.wind_speed,
            })
            .collect();
        ExportTable { rows }
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let column = |f: fn(&ExportRow) -> f64| self.rows.iter().map(f).collect::<Vec<f64>>();
        let optional = |f: fn(&ExportRow) -> Option<f64>| {
            self.rows.iter().map(f).collect::<Vec<Option<f64>>>()
        };
        let dates: Vec<&str> = self.rows.iter().map(|row| row.date.as_str()).collect();

        df!(
            EXPORT_HEADERS[0] => dates,
            EXPORT_HEADERS[1] => optional(|row| row.min_temp),
            EXPORT_HEADERS[2] => optional(|row| row.max_temp),
            EXPORT_HEADERS[3] => column(|row| row.current_temp),
            EXPORT_HEADERS[4] => column(|row| row.current_humidity),
            EXPORT_HEADERS[5] => column(|row| row.current_wind_speed)
        )
    }

    /// Encodes the table as a UTF-8 CSV document with a header row.
    pub fn to_csv(&self) -> Result<CsvExport, RenderError> {
        let mut frame = self.to_frame()?;
        let mut bytes = Vec::new();
        CsvWriter::new(&mut bytes)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut frame)
            .map_err(RenderError::CsvEncode)?;

        Ok(CsvExport {
            filename: CSV_FILENAME,
            mime_type: CSV_MIME_TYPE,
            bytes,
        })
    }
}

/// A downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: &'static str,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl CsvExport {
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
