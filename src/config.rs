//! Immutable configuration for a [`Dashboard`](crate::Dashboard).

use crate::presentation::theme::Theme;
use crate::types::label_zone::LabelZone;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_CITY: &str = "Mumbai";
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings fixed for the lifetime of a dashboard.
///
/// ```
/// use weatherdash::{DashboardConfig, LabelZone};
///
/// let config = DashboardConfig::builder()
///     .api_key("secret")
///     .label_zone(LabelZone::Utc)
///     .build();
/// assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct DashboardConfig {
    #[builder(into)]
    pub api_key: String,
    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,
    /// Bound on each HTTP request.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    #[builder(default)]
    pub label_zone: LabelZone,
    #[builder(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::builder().api_key("key").build();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.label_zone, LabelZone::Local);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::builder()
            .api_key("key")
            .base_url("http://127.0.0.1:9000")
            .timeout(Duration::from_secs(2))
            .label_zone(LabelZone::City)
            .build();

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.label_zone, LabelZone::City);
    }
}
