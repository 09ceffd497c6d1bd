//! The assembled dashboard and its standalone HTML document.

use crate::presentation::cards::MetricCard;
use crate::presentation::error::RenderError;
use crate::presentation::export::{CsvExport, ExportTable, CSV_FILENAME, EXPORT_HEADERS};
use crate::presentation::theme::{hex, Theme};
use crate::types::condition_tally::ConditionTally;
use crate::types::correlation_matrix::CorrelationMatrix;
use crate::types::daily_summary::DailySummary;
use crate::types::hourly_point::HourlyPoint;
use crate::utils::title_case;
use html_escape::encode_text;
use std::fmt::Write as _;

pub const PAGE_TITLE: &str = "Weather Dashboard";
pub const HTML_FILENAME: &str = "index.html";

/// Everything derived from a successful forecast fetch.
#[derive(Debug, Clone)]
pub struct ForecastSection {
    pub hourly: Vec<HourlyPoint>,
    pub tally: ConditionTally,
    pub daily: Vec<DailySummary>,
    /// `None` when the metric table had no rows.
    pub correlation: Option<CorrelationMatrix>,
    pub hourly_chart: String,
    pub donut_chart: String,
    pub trend_chart: String,
    pub heatmap: Option<String>,
    pub table: ExportTable,
    pub csv: CsvExport,
}

/// A rendered dashboard for one city.
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub city: String,
    pub cards: [MetricCard; 3],
    /// `None` when the forecast lookup failed.
    pub forecast: Option<ForecastSection>,
}

impl DashboardPage {
    pub fn heading(&self) -> String {
        format!("Current Weather in {}", title_case(&self.city))
    }

    pub fn csv(&self) -> Option<&CsvExport> {
        self.forecast.as_ref().map(|section| &section.csv)
    }

    pub fn to_html(&self, theme: &Theme) -> Result<String, RenderError> {
        let mut html = String::new();
        self.write_html(&mut html, theme)?;
        Ok(html)
    }

    fn write_html(&self, out: &mut String, theme: &Theme) -> std::fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", PAGE_TITLE)?;
        writeln!(out, "<style>{}</style>", stylesheet(theme))?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<h1>{}</h1>", encode_text(&self.heading()))?;

        writeln!(out, "<section class=\"cards\">")?;
        for card in &self.cards {
            writeln!(
                out,
                "<div class=\"card\"><h3>{}</h3><p class=\"value\">{}</p><p>{}</p></div>",
                encode_text(card.label),
                encode_text(&card.value),
                encode_text(&card.subtitle)
            )?;
        }
        writeln!(out, "</section>")?;

        if let Some(section) = &self.forecast {
            write_forecast(out, section)?;
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_forecast(out: &mut String, section: &ForecastSection) -> std::fmt::Result {
    writeln!(out, "<section class=\"chart\"><h2>Next 24 Hours Forecast</h2>")?;
    writeln!(out, "{}</section>", section.hourly_chart)?;

    writeln!(out, "<section class=\"chart\"><h2>Weather Conditions Distribution</h2>")?;
    writeln!(out, "{}</section>", section.donut_chart)?;

    writeln!(out, "<section class=\"table\"><h2>5-Day Forecast</h2>")?;
    writeln!(out, "<table><thead><tr>")?;
    for header in EXPORT_HEADERS {
        write!(out, "<th>{}</th>", encode_text(header))?;
    }
    writeln!(out, "</tr></thead><tbody>")?;
    for row in section.table.rows() {
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            encode_text(&row.date),
            cell(row.min_temp),
            cell(row.max_temp),
            row.current_temp,
            row.current_humidity,
            row.current_wind_speed
        )?;
    }
    writeln!(out, "</tbody></table>")?;
    writeln!(
        out,
        "<p><a href=\"{}\" download>Download Forecast Data</a></p></section>",
        CSV_FILENAME
    )?;

    writeln!(out, "<section class=\"chart\"><h2>Temperature Trend</h2>")?;
    writeln!(out, "{}</section>", section.trend_chart)?;

    if let Some(heatmap) = &section.heatmap {
        writeln!(out, "<section class=\"chart\"><h2>Weather Metrics Correlation</h2>")?;
        writeln!(out, "{}</section>", heatmap)?;
    }
    Ok(())
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        "body {{ background: {bg}; color: {text}; font-family: sans-serif; margin: 2rem; }} \
         h1, h2 {{ color: {primary}; }} \
         .cards {{ display: flex; gap: 1rem; }} \
         .card {{ flex: 1; background: {card}; border-radius: 10px; padding: 1rem; }} \
         .card .value {{ font-size: 2rem; color: {primary}; }} \
         table {{ border-collapse: collapse; width: 100%; }} \
         th, td {{ border: 1px solid {card}; padding: 0.4rem; text-align: right; }} \
         a {{ color: {accent}; }}",
        bg = hex(theme.background),
        text = hex(theme.text),
        primary = hex(theme.primary),
        card = hex(theme.card),
        accent = hex(theme.accent),
    )
}
