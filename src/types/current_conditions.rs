//! Snapshot of the weather in a city at the time of the search.

use serde::Serialize;

/// Current conditions for one city, in metric units.
///
/// Produced by [`crate::WeatherFetcher::current`] and discarded at the end of
/// the search that fetched it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Sea-level pressure in hPa.
    pub pressure: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Short condition text, e.g. "scattered clouds".
    pub description: String,
}
