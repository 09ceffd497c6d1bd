mod common;

use common::*;
use std::time::Duration;
use weatherdash::{
    Dashboard, DashboardConfig, DashboardPage, LabelZone, SearchOutcome, EXPORT_HEADERS,
    NOT_FOUND_MESSAGE,
};
use wiremock::{MockServer, ResponseTemplate};

fn dashboard(server: &MockServer) -> Result<Dashboard, weatherdash::DashboardError> {
    Dashboard::new(
        DashboardConfig::builder()
            .api_key(API_KEY)
            .base_url(server.uri())
            .timeout(Duration::from_secs(5))
            .label_zone(LabelZone::Utc)
            .build(),
    )
}

fn rendered(outcome: SearchOutcome) -> Result<DashboardPage, String> {
    match outcome {
        SearchOutcome::Rendered(page) => Ok(page),
        SearchOutcome::NotFound { message, .. } => Err(message),
    }
}

#[tokio::test]
async fn mumbai_dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(forecast(40))).await;

    // No city given: the search defaults to Mumbai.
    let page = rendered(dashboard(&server)?.search().call().await?)?;

    let values: Vec<&str> = page.cards.iter().map(|card| card.value.as_str()).collect();
    assert_eq!(values, ["30.5°C", "70%", "4.1 m/s"]);
    assert_eq!(page.heading(), "Current Weather in Mumbai");

    let section = page.forecast.as_ref().ok_or("forecast section missing")?;
    assert_eq!(section.hourly.len(), 8);
    assert_eq!(section.hourly[0].hour, "12 AM");
    assert_eq!(section.tally.total(), 40);
    assert_eq!(section.daily.len(), 5);
    assert!(section.heatmap.is_some());
    Ok(())
}

#[tokio::test]
async fn csv_export_matches_daily_summary() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(forecast(40))).await;

    let page = rendered(dashboard(&server)?.search().city("Mumbai").call().await?)?;
    let csv = page.csv().ok_or("csv missing")?;
    assert_eq!(csv.filename, "forecast.csv");
    assert_eq!(csv.mime_type, "text/csv");

    let text = csv.as_text().ok_or("csv is not UTF-8")?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(EXPORT_HEADERS.join(",").as_str()));

    let section = page.forecast.as_ref().ok_or("forecast section missing")?;
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), section.daily.len());
    for (line, day) in rows.iter().zip(&section.daily) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[0], day.date);
        assert_eq!(Some(fields[1].parse::<f64>()?), day.min_temp);
        assert_eq!(Some(fields[2].parse::<f64>()?), day.max_temp);
        assert_eq!(fields[3].parse::<f64>()?, 30.5);
        assert_eq!(fields[4].parse::<f64>()?, 70.0);
        assert_eq!(fields[5].parse::<f64>()?, 4.1);
    }
    Ok(())
}

#[tokio::test]
async fn nonexistent_city_shows_only_the_error() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let missing = || ResponseTemplate::new(404).set_body_json(city_not_found());
    mount(&server, "weather", "Nonexistentville", missing()).await;
    mount(&server, "forecast", "Nonexistentville", missing()).await;

    let outcome = dashboard(&server)?
        .search()
        .city("Nonexistentville")
        .call()
        .await?;

    match outcome {
        SearchOutcome::NotFound { city, message } => {
            assert_eq!(city, "Nonexistentville");
            assert_eq!(message, NOT_FOUND_MESSAGE);
        }
        SearchOutcome::Rendered(_) => panic!("a missing city must not render a dashboard"),
    }
    Ok(())
}

#[tokio::test]
async fn forecast_failure_keeps_the_cards() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(502).set_body_string("bad gateway")).await;

    let page = rendered(dashboard(&server)?.search().city("Mumbai").call().await?)?;

    assert_eq!(page.cards[0].value, "30.5°C");
    assert!(page.forecast.is_none());
    assert!(page.csv().is_none());
    Ok(())
}

#[tokio::test]
async fn sample_without_temperature_keeps_every_section() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    let mut document = forecast(40);
    document["list"][20]["main"]
        .as_object_mut()
        .ok_or("main is not an object")?
        .remove("temp");
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(document)).await;

    let page = rendered(dashboard(&server)?.search().city("Mumbai").call().await?)?;
    let section = page.forecast.as_ref().ok_or("forecast section missing")?;

    assert_eq!(section.hourly.len(), 8);
    assert_eq!(section.tally.total(), 40);
    assert_eq!(section.daily.len(), 5);
    assert!(section.heatmap.is_some());
    let csv = page.csv().and_then(|csv| csv.as_text()).ok_or("csv missing")?;
    assert_eq!(csv.lines().count(), 6);
    Ok(())
}

#[tokio::test]
async fn three_samples_on_one_date() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(forecast(3))).await;

    let page = rendered(dashboard(&server)?.search().city("Mumbai").call().await?)?;
    let section = page.forecast.as_ref().ok_or("forecast section missing")?;

    assert_eq!(section.hourly.len(), 3);
    assert_eq!(section.tally.total(), 3);
    assert_eq!(section.daily.len(), 1);
    assert_eq!(section.daily[0].date, "2024-01-15");
    assert_eq!(section.daily[0].min_temp, Some(27.0));
    assert_eq!(section.daily[0].max_temp, Some(29.5));
    Ok(())
}

#[tokio::test]
async fn writes_page_and_csv() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    mount(&server, "weather", "Mumbai", ResponseTemplate::new(200).set_body_json(mumbai_current())).await;
    mount(&server, "forecast", "Mumbai", ResponseTemplate::new(200).set_body_json(forecast(16))).await;
    let dashboard = dashboard(&server)?;
    let page = rendered(dashboard.search().city("Mumbai").call().await?)?;
    let dir = tempfile::tempdir()?;

    let written = dashboard.export(&page, dir.path()).await?;

    assert_eq!(written.len(), 2);
    let html = std::fs::read_to_string(dir.path().join("index.html"))?;
    assert!(html.contains("<svg"));
    assert!(html.contains("href=\"forecast.csv\""));
    let csv = std::fs::read_to_string(dir.path().join("forecast.csv"))?;
    assert_eq!(csv.lines().count(), 3);
    Ok(())
}
