//! Response schemas for the OpenWeatherMap current-weather and forecast documents.
//!
//! Every field is optional at the schema level. Conversion into the domain types
//! decides which fields are required and reports the ones that are missing as
//! [`FetchError::MissingField`].

use crate::types::current_conditions::CurrentConditions;
use crate::types::forecast_sample::{ForecastSample, ForecastSeries};
use crate::weather_data::error::{Endpoint, FetchError};
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(i64),
    Text(String),
}

/// The `cod` status marker found at the top of both documents.
///
/// The current-weather endpoint sends it as a number (`200`) while the forecast
/// endpoint sends a string (`"200"`). Both forms are normalized here to a single
/// numeric code, so success is checked the same way for either document. Values
/// that are not a valid HTTP-style code normalize to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawCode")]
pub struct ResponseCode(pub Option<u16>);

impl From<RawCode> for ResponseCode {
    fn from(raw: RawCode) -> Self {
        match raw {
            RawCode::Number(code) => ResponseCode(u16::try_from(code).ok()),
            RawCode::Text(code) => ResponseCode(code.trim().parse().ok()),
        }
    }
}

impl ResponseCode {
    pub fn is_success(&self) -> bool {
        self.0 == Some(200)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainBlock {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindBlock {
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherBlock {
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentResponse {
    pub cod: Option<ResponseCode>,
    pub name: Option<String>,
    pub main: Option<MainBlock>,
    pub wind: Option<WindBlock>,
    #[serde(default)]
    pub weather: Vec<WeatherBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityBlock {
    pub name: Option<String>,
    pub timezone: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastEntry {
    pub dt: Option<i64>,
    pub dt_txt: Option<String>,
    pub main: Option<MainBlock>,
    pub wind: Option<WindBlock>,
    #[serde(default)]
    pub weather: Vec<WeatherBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    pub cod: Option<ResponseCode>,
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    pub city: Option<CityBlock>,
}

/// Checks the `cod` marker of a decoded document.
pub(crate) fn ensure_success(
    endpoint: Endpoint,
    code: Option<ResponseCode>,
) -> Result<(), FetchError> {
    match code {
        Some(code) if code.is_success() => Ok(()),
        Some(ResponseCode(code)) => Err(FetchError::Status { endpoint, code }),
        None => Err(FetchError::MissingField {
            endpoint,
            field: "cod",
        }),
    }
}

fn required<T>(value: Option<T>, endpoint: Endpoint, field: &'static str) -> Result<T, FetchError> {
    value.ok_or(FetchError::MissingField { endpoint, field })
}

impl TryFrom<CurrentResponse> for CurrentConditions {
    type Error = FetchError;

    fn try_from(response: CurrentResponse) -> Result<Self, Self::Error> {
        let endpoint = Endpoint::Current;
        let main = required(response.main, endpoint, "main")?;
        let wind = required(response.wind, endpoint, "wind")?;
        let description = response
            .weather
            .into_iter()
            .next()
            .and_then(|w| w.description);

        Ok(CurrentConditions {
            temperature: required(main.temp, endpoint, "main.temp")?,
            feels_like: required(main.feels_like, endpoint, "main.feels_like")?,
            humidity: required(main.humidity, endpoint, "main.humidity")?,
            pressure: required(main.pressure, endpoint, "main.pressure")?,
            wind_speed: required(wind.speed, endpoint, "wind.speed")?,
            description: required(description, endpoint, "weather[0].description")?,
        })
    }
}

impl TryFrom<ForecastEntry> for ForecastSample {
    type Error = FetchError;

    fn try_from(entry: ForecastEntry) -> Result<Self, Self::Error> {
        let endpoint = Endpoint::Forecast;
        let dt = required(entry.dt, endpoint, "list[].dt")?;
        let timestamp = DateTime::from_timestamp(dt, 0).ok_or(FetchError::InvalidField {
            endpoint,
            field: "list[].dt",
        })?;
        let dt_txt = required(entry.dt_txt, endpoint, "list[].dt_txt")?;
        let date = dt_txt
            .split_once(' ')
            .map_or(dt_txt.as_str(), |(date, _)| date)
            .to_string();
        let main = entry.main.unwrap_or_default();
        let condition = entry.weather.into_iter().next().and_then(|w| w.main);

        Ok(ForecastSample {
            timestamp,
            date,
            temperature: main.temp,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
            pressure: main.pressure,
            humidity: main.humidity,
            wind_speed: entry.wind.and_then(|w| w.speed),
            condition: required(condition, endpoint, "list[].weather[0].main")?,
        })
    }
}

impl TryFrom<ForecastResponse> for ForecastSeries {
    type Error = FetchError;

    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        let samples = response
            .list
            .into_iter()
            .map(ForecastSample::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let (city_name, utc_offset_secs) = response
            .city
            .map(|city| (city.name, city.timezone))
            .unwrap_or((None, None));

        Ok(ForecastSeries {
            city_name,
            utc_offset_secs,
            samples,
        })
    }
}
