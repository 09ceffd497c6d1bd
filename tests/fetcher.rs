mod common;

use common::*;
use std::time::Duration;
use weatherdash::{NotFound, WeatherFetcher};
use wiremock::{MockServer, ResponseTemplate};

fn fetcher(server: &MockServer) -> Result<WeatherFetcher, reqwest::Error> {
    WeatherFetcher::new(&server.uri(), API_KEY, Duration::from_secs(5))
}

#[tokio::test]
async fn current_conditions_with_numeric_status() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;

    let current = fetcher(&server)?.current("Mumbai").await?;

    assert_eq!(current.temperature, 30.5);
    assert_eq!(current.feels_like, 35.2);
    assert_eq!(current.humidity, 70.0);
    assert_eq!(current.pressure, 1008.0);
    assert_eq!(current.wind_speed, 4.1);
    assert_eq!(current.description, "haze");
    Ok(())
}

#[tokio::test]
async fn forecast_with_string_status() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(forecast(40))).await;

    let series = fetcher(&server)?.forecast("Mumbai").await?;

    assert_eq!(series.len(), 40);
    assert_eq!(series.city_name.as_deref(), Some("Mumbai"));
    assert_eq!(series.utc_offset_secs, Some(19800));
    assert_eq!(series.samples[0].date, "2024-01-15");
    assert_eq!(series.samples[8].date, "2024-01-16");
    assert_eq!(series.samples[0].timestamp.timestamp(), FIRST_DT);
    assert_eq!(series.samples[1].condition, "Clouds");
    assert_eq!(series.samples[0].temp_max, Some(29.5));
    Ok(())
}

#[tokio::test]
async fn unknown_city_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let missing = || ResponseTemplate::new(404).set_body_json(city_not_found());
    mount(&server, "weather", "Nonexistentville", missing()).await;
    mount(&server, "forecast", "Nonexistentville", missing()).await;
    let fetcher = fetcher(&server)?;

    assert_eq!(
        fetcher.current("Nonexistentville").await,
        Err(NotFound::new("Nonexistentville"))
    );
    assert_eq!(
        fetcher.forecast("Nonexistentville").await,
        Err(NotFound::new("Nonexistentville"))
    );
    Ok(())
}

#[tokio::test]
async fn status_marker_is_checked_even_on_http_success() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(city_not_found())).await;

    assert!(fetcher(&server)?.current("Mumbai").await.is_err());
    Ok(())
}

#[tokio::test]
async fn malformed_documents_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_string("<html>busy</html>")).await;
    let mut partial = forecast(3);
    partial["list"] = serde_json::json!("not a list");
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(partial)).await;
    let fetcher = fetcher(&server)?;

    assert_eq!(fetcher.current("Mumbai").await, Err(NotFound::new("Mumbai")));
    assert_eq!(fetcher.forecast("Mumbai").await, Err(NotFound::new("Mumbai")));
    Ok(())
}

#[tokio::test]
async fn sample_without_temperature_keeps_the_forecast() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let mut document = forecast(40);
    document["list"][20]["main"]
        .as_object_mut()
        .ok_or("main is not an object")?
        .remove("temp");
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(document)).await;

    let series = fetcher(&server)?.forecast("Mumbai").await?;

    assert_eq!(series.len(), 40);
    assert_eq!(series.samples[20].temperature, None);
    assert!(series.samples[20].temp_min.is_some());
    assert_eq!(series.samples[19].temperature, Some(29.5));
    Ok(())
}

#[tokio::test]
async fn server_errors_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(500)).await;

    assert_eq!(
        fetcher(&server)?.current("Mumbai").await,
        Err(NotFound::new("Mumbai"))
    );
    Ok(())
}

#[tokio::test]
async fn missing_optional_metrics_stay_missing() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let mut document = forecast(2);
    document["list"][0]
        .as_object_mut()
        .ok_or("entry is not an object")?
        .remove("wind");
    document["list"][1]["main"]
        .as_object_mut()
        .ok_or("main is not an object")?
        .remove("pressure");
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(document)).await;

    let series = fetcher(&server)?.forecast("Mumbai").await?;

    assert_eq!(series.samples[0].wind_speed, None);
    assert_eq!(series.samples[1].pressure, None);
    assert_eq!(series.samples[1].wind_speed, Some(3.0));
    Ok(())
}
