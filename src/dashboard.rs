//! Entry point tying the fetcher, the shaping views and the renderers together.

use crate::config::{DashboardConfig, DEFAULT_CITY};
use crate::error::DashboardError;
use crate::presentation::cards::metric_cards;
use crate::presentation::charts::{condition_donut, correlation_heatmap, hourly_chart, trend_chart};
use crate::presentation::error::RenderError;
use crate::presentation::export::ExportTable;
use crate::presentation::page::{DashboardPage, ForecastSection, HTML_FILENAME};
use crate::shaping::correlation::MetricTable;
use crate::shaping::forecast::{condition_tally, daily_summary, hourly_series};
use crate::types::correlation_matrix::CorrelationMatrix;
use crate::types::current_conditions::CurrentConditions;
use crate::types::forecast_sample::ForecastSeries;
use crate::utils::error_chain;
use crate::weather_data::error::NotFound;
use crate::weather_data::fetcher::WeatherFetcher;
use bon::bon;
use log::{debug, info, warn};
use polars::prelude::PolarsResult;
use std::path::{Path, PathBuf};

/// Shown instead of the dashboard when the current conditions cannot be looked up.
pub const NOT_FOUND_MESSAGE: &str = "City Not Found! Try a valid city name.";

/// Result of one search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Rendered(DashboardPage),
    /// Nothing but `message` is shown.
    NotFound { city: String, message: String },
}

/// A configured weather dashboard.
///
/// ```no_run
/// # use weatherdash::{Dashboard, DashboardConfig, DashboardError, SearchOutcome};
/// # async fn run() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::new(DashboardConfig::builder().api_key("secret").build())?;
/// match dashboard.search().city("Mumbai").call().await? {
///     SearchOutcome::Rendered(page) => println!("{}", page.heading()),
///     SearchOutcome::NotFound { message, .. } => eprintln!("{}", message),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    fetcher: WeatherFetcher,
}

#[bon]
impl Dashboard {
    pub fn new(config: DashboardConfig) -> Result<Self, DashboardError> {
        let fetcher = WeatherFetcher::new(&config.base_url, &config.api_key, config.timeout)
            .map_err(DashboardError::HttpClient)?;
        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Looks up `city` and renders its dashboard.
    ///
    /// The current conditions and the forecast are requested concurrently. A
    /// failed current-conditions lookup yields [`SearchOutcome::NotFound`]; a
    /// failed forecast only drops the forecast sections from the page.
    ///
    /// # Arguments
    ///
    /// * `.city(impl Into<String>)`: Optional. Defaults to `"Mumbai"`.
    ///
    /// # Errors
    ///
    /// Only rendering failures are errors. Lookup failures are never reported
    /// through `Err`.
    #[builder]
    pub async fn search(
        &self,
        #[builder(into)] city: Option<String>,
    ) -> Result<SearchOutcome, DashboardError> {
        let city = city.unwrap_or_else(|| DEFAULT_CITY.to_string());
        info!("Searching weather for '{}'", city);

        let (current, forecast) =
            tokio::join!(self.fetcher.current(&city), self.fetcher.forecast(&city));

        let current = match current {
            Ok(current) => current,
            Err(NotFound { city }) => {
                return Ok(SearchOutcome::NotFound {
                    city,
                    message: NOT_FOUND_MESSAGE.to_string(),
                })
            }
        };

        let page = self.render(&city, &current, forecast.ok().as_ref())?;
        Ok(SearchOutcome::Rendered(page))
    }

    /// Shapes and renders already-fetched data. Performs no I/O.
    pub fn render(
        &self,
        city: &str,
        current: &CurrentConditions,
        forecast: Option<&ForecastSeries>,
    ) -> Result<DashboardPage, DashboardError> {
        let forecast = forecast
            .map(|series| self.forecast_section(current, series))
            .transpose()?;

        Ok(DashboardPage {
            city: city.to_string(),
            cards: metric_cards(current),
            forecast,
        })
    }

    fn forecast_section(
        &self,
        current: &CurrentConditions,
        series: &ForecastSeries,
    ) -> Result<ForecastSection, RenderError> {
        let theme = &self.config.theme;
        let samples = &series.samples;
        let clock = self.config.label_zone.resolve(series.utc_offset_secs);

        let hourly = hourly_series(samples, &clock);
        let tally = condition_tally(samples);
        let daily = daily_summary(samples);
        let correlation = correlation_or_skip(
            MetricTable::from_samples(samples).and_then(|table| table.correlation()),
        );
        debug!(
            "Shaped {} samples: {} hourly points, {} categories, {} days",
            samples.len(),
            hourly.len(),
            tally.len(),
            daily.len()
        );

        let heatmap = correlation
            .as_ref()
            .map(|matrix| correlation_heatmap(matrix, theme))
            .transpose()?;
        let table = ExportTable::merge(&daily, current);
        let csv = table.to_csv()?;

        Ok(ForecastSection {
            hourly_chart: hourly_chart(&hourly, theme)?,
            donut_chart: condition_donut(&tally, theme)?,
            trend_chart: trend_chart(&daily, theme)?,
            hourly,
            tally,
            daily,
            correlation,
            heatmap,
            table,
            csv,
        })
    }

    /// Writes `index.html` and, when a forecast is present, `forecast.csv` into `dir`.
    ///
    /// The directory is created if needed. Returns the paths written.
    pub async fn export(
        &self,
        page: &DashboardPage,
        dir: &Path,
    ) -> Result<Vec<PathBuf>, DashboardError> {
        let html = page.to_html(&self.config.theme)?;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| DashboardError::OutputDirCreation(dir.to_path_buf(), e))?;

        let mut written = Vec::with_capacity(2);
        let html_path = dir.join(HTML_FILENAME);
        tokio::fs::write(&html_path, html)
            .await
            .map_err(|e| DashboardError::OutputWrite(html_path.clone(), e))?;
        written.push(html_path);

        if let Some(csv) = page.csv() {
            let csv_path = dir.join(csv.filename);
            tokio::fs::write(&csv_path, &csv.bytes)
                .await
                .map_err(|e| DashboardError::OutputWrite(csv_path.clone(), e))?;
            written.push(csv_path);
        }

        info!("Wrote {} file(s) to {}", written.len(), dir.display());
        Ok(written)
    }
}

/// A failed correlation only drops the heatmap.
fn correlation_or_skip(result: PolarsResult<Option<CorrelationMatrix>>) -> Option<CorrelationMatrix> {
    match result {
        Ok(matrix) => matrix,
        Err(e) => {
            warn!("Skipping correlation heatmap: {}", error_chain(&e));
            None
        }
    }
}
