mod config;
mod dashboard;
mod error;
mod logging;
mod presentation;
mod shaping;
mod types;
mod utils;
mod weather_data;

pub use config::{DashboardConfig, DEFAULT_BASE_URL, DEFAULT_CITY, DEFAULT_TIMEOUT};
pub use dashboard::{Dashboard, SearchOutcome, NOT_FOUND_MESSAGE};
pub use error::DashboardError;
pub use logging::{init_logging, LoggingError};
pub use utils::error_chain;

pub use presentation::cards::{metric_cards, MetricCard};
pub use presentation::charts::{
    condition_donut, correlation_heatmap, hourly_chart, trend_chart, DONUT_SLICES,
};
pub use presentation::error::RenderError;
pub use presentation::export::{
    CsvExport, ExportRow, ExportTable, CSV_FILENAME, CSV_MIME_TYPE, EXPORT_HEADERS,
};
pub use presentation::page::{DashboardPage, ForecastSection, HTML_FILENAME, PAGE_TITLE};
pub use presentation::theme::Theme;

pub use shaping::correlation::MetricTable;
pub use shaping::forecast::{
    condition_tally, daily_summary, hourly_series, FIVE_DAY_WINDOW, HOURLY_WINDOW, SUMMARY_DAYS,
};

pub use types::condition_tally::ConditionTally;
pub use types::correlation_matrix::{CorrelationMatrix, Metric};
pub use types::current_conditions::CurrentConditions;
pub use types::daily_summary::DailySummary;
pub use types::forecast_sample::{ForecastSample, ForecastSeries};
pub use types::hourly_point::HourlyPoint;
pub use types::label_zone::{LabelClock, LabelZone};

pub use weather_data::error::NotFound;
pub use weather_data::fetcher::WeatherFetcher;
