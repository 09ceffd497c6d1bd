//! Entries of the 5-day / 3-hour forecast.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One 3-hour prediction from the forecast list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSample {
    /// Start of the interval (`dt`).
    pub timestamp: DateTime<Utc>,
    /// Date portion of `dt_txt`, e.g. "2024-01-15".
    pub date: String,
    /// Metrics absent from the document stay `None`; a single incomplete entry
    /// never invalidates the rest of the forecast.
    pub temperature: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Coarse category such as "Rain" or "Clear" (`weather[0].main`).
    pub condition: String,
}

/// A decoded forecast document.
///
/// `samples` keeps the order of the upstream list, which is ascending by time.
/// Every derived view relies on that order: the first 8 samples cover the next
/// 24 hours and the first 40 the next 5 days.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ForecastSeries {
    pub city_name: Option<String>,
    /// Offset of the city's local time from UTC, in seconds.
    pub utc_offset_secs: Option<i32>,
    pub samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    pub fn new(samples: Vec<ForecastSample>) -> Self {
        Self {
            city_name: None,
            utc_offset_secs: None,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
