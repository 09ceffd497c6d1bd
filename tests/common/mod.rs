//! OpenWeatherMap documents and a mock server shared by the integration tests.

#![allow(dead_code)]

use chrono::DateTime;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// 2024-01-15 00:00:00 UTC
pub const FIRST_DT: i64 = 1_705_276_800;

pub fn mumbai_current() -> Value {
    json!({
        "cod": 200,
        "name": "Mumbai",
        "main": {
            "temp": 30.5,
            "feels_like": 35.2,
            "temp_min": 29.9,
            "temp_max": 31.0,
            "pressure": 1008,
            "humidity": 70
        },
        "wind": { "speed": 4.1, "deg": 270 },
        "weather": [{ "id": 721, "main": "Haze", "description": "haze", "icon": "50d" }]
    })
}

pub fn forecast_entry(index: usize) -> Value {
    let dt = FIRST_DT + 10_800 * index as i64;
    let dt_txt = DateTime::from_timestamp(dt, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default();
    let conditions = ["Clear", "Clouds", "Rain"];
    let temp = 28.0 + (index % 8) as f64 * 0.5;

    json!({
        "dt": dt,
        "dt_txt": dt_txt,
        "main": {
            "temp": temp,
            "temp_min": temp - 1.0,
            "temp_max": temp + 1.5,
            "pressure": 1012.0 - index as f64 * 0.25,
            "humidity": 60 + (index % 5) * 3
        },
        "wind": { "speed": 2.0 + (index % 3) as f64 },
        "weather": [{ "main": conditions[index % conditions.len()], "description": "sky" }]
    })
}

pub fn forecast(count: usize) -> Value {
    json!({
        "cod": "200",
        "message": 0,
        "cnt": count,
        "list": (0..count).map(forecast_entry).collect::<Vec<_>>(),
        "city": { "name": "Mumbai", "timezone": 19800 }
    })
}

pub fn city_not_found() -> Value {
    json!({ "cod": "404", "message": "city not found" })
}

pub async fn mount(server: &MockServer, endpoint: &str, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", endpoint)))
        .and(query_param("q", city))
        .and(query_param("appid", API_KEY))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .mount(server)
        .await;
}
