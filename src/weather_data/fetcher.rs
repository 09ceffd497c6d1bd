use crate::types::current_conditions::CurrentConditions;
use crate::types::forecast_sample::ForecastSeries;
use crate::utils::error_chain;
use crate::weather_data::error::{Endpoint, FetchError, NotFound};
use crate::weather_data::models::{ensure_success, CurrentResponse, ForecastResponse};
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Unit system sent with every request.
const UNITS: &str = "metric";

/// Read-only client for the OpenWeatherMap current-weather and forecast endpoints.
///
/// Each lookup issues exactly one request. There are no retries; a slow request
/// is bounded only by the configured timeout.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherFetcher {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<WeatherFetcher, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(WeatherFetcher {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetches the current conditions for `city`.
    ///
    /// Any failure, whether an unknown city, an unreachable service or a malformed
    /// document, is reported as [`NotFound`]. The cause is logged.
    pub async fn current(&self, city: &str) -> Result<CurrentConditions, NotFound> {
        self.try_current(city)
            .await
            .map_err(|e| Self::not_found(Endpoint::Current, city, &e))
    }

    /// Fetches the 5-day / 3-hour forecast for `city`.
    ///
    /// Failures are reported the same way as for [`WeatherFetcher::current`].
    pub async fn forecast(&self, city: &str) -> Result<ForecastSeries, NotFound> {
        self.try_forecast(city)
            .await
            .map_err(|e| Self::not_found(Endpoint::Forecast, city, &e))
    }

    async fn try_current(&self, city: &str) -> Result<CurrentConditions, FetchError> {
        let response: CurrentResponse = self.get_document(Endpoint::Current, city).await?;
        ensure_success(Endpoint::Current, response.cod)?;
        CurrentConditions::try_from(response)
    }

    async fn try_forecast(&self, city: &str) -> Result<ForecastSeries, FetchError> {
        let response: ForecastResponse = self.get_document(Endpoint::Forecast, city).await?;
        ensure_success(Endpoint::Forecast, response.cod)?;
        let series = ForecastSeries::try_from(response)?;
        debug!("Decoded {} forecast samples for '{}'", series.len(), city);
        Ok(series)
    }

    /// Requests one document and decodes its body.
    ///
    /// The HTTP status line is not checked: the service reports an unknown city
    /// as a non-2xx response whose body still carries a `cod` marker.
    async fn get_document<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        city: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint.path_segment());
        info!("Requesting {} for '{}' from {}", endpoint, city, url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", UNITS)])
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;
        debug!(
            "Received {} bytes from {} (HTTP {})",
            body.len(),
            url,
            status
        );

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }

    fn not_found(endpoint: Endpoint, city: &str, error: &FetchError) -> NotFound {
        warn!(
            "{} lookup for '{}' failed: {}",
            endpoint,
            city,
            error_chain(error)
        );
        NotFound::new(city)
    }
}
