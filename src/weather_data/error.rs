use std::fmt;
use thiserror::Error;

/// The two OpenWeatherMap documents this crate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl Endpoint {
    /// Path segment appended to the configured base URL.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Current => write!(f, "current weather"),
            Endpoint::Forecast => write!(f, "forecast"),
        }
    }
}

/// Detailed cause of a failed lookup.
///
/// Callers never see this type: every variant is logged and then collapsed into
/// [`NotFound`] by [`crate::WeatherFetcher`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to decode {endpoint} response")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("{endpoint} response reported status {code:?}")]
    Status { endpoint: Endpoint, code: Option<u16> },

    #[error("{endpoint} response is missing required field '{field}'")]
    MissingField {
        endpoint: Endpoint,
        field: &'static str,
    },

    #[error("{endpoint} response has an invalid value for '{field}'")]
    InvalidField {
        endpoint: Endpoint,
        field: &'static str,
    },
}

/// The only lookup failure visible to callers.
///
/// A city that does not exist, a network failure and a malformed payload all
/// produce the same value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("City '{city}' not found")]
pub struct NotFound {
    pub city: String,
}

impl NotFound {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}
