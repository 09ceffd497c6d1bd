use serde::Serialize;

/// Minimum and maximum temperature for one forecast date.
///
/// The values are those of the *first* sample seen for the date, not an
/// aggregate over the whole day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
}
