//! Headline metric cards.

use crate::types::current_conditions::CurrentConditions;
use crate::utils::title_case;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub subtitle: String,
}

/// Temperature, humidity and wind cards, in display order.
pub fn metric_cards(current: &CurrentConditions) -> [MetricCard; 3] {
    [
        MetricCard {
            label: "Temperature",
            value: format!("{}°C", current.temperature),
            subtitle: format!("Feels like {}°C", current.feels_like),
        },
        MetricCard {
            label: "Humidity",
            value: format!("{}%", current.humidity),
            subtitle: format!("Pressure: {} hPa", current.pressure),
        },
        MetricCard {
            label: "Wind Speed",
            value: format!("{} m/s", current.wind_speed),
            subtitle: title_case(&current.description),
        },
    ]
}
