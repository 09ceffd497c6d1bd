//! SVG charts drawn with plotters.
//!
//! Every public function renders into an in-memory SVG document and returns it
//! as a string ready to be inlined into the page.

use crate::presentation::error::RenderError;
use crate::presentation::theme::Theme;
use crate::types::condition_tally::ConditionTally;
use crate::types::correlation_matrix::CorrelationMatrix;
use crate::types::daily_summary::DailySummary;
use crate::types::hourly_point::HourlyPoint;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const HOURLY_SIZE: (u32, u32) = (900, 400);
const DONUT_SIZE: (u32, u32) = (500, 500);
const TREND_SIZE: (u32, u32) = (1200, 500);
const HEATMAP_SIZE: (u32, u32) = (560, 440);

/// At most this many categories are drawn in the donut.
pub const DONUT_SLICES: usize = 5;

const FONT: &str = "sans-serif";

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Next-24-hours temperature line with the area beneath it filled.
pub fn hourly_chart(points: &[HourlyPoint], theme: &Theme) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, HOURLY_SIZE).into_drawing_area();
        draw_hourly(&root, points, theme).map_err(|e| RenderError::chart("hourly", e))?;
        root.present()
            .map_err(|e| RenderError::chart("hourly", e))?;
    }
    Ok(svg)
}

/// Share of each condition category over the next five days.
pub fn condition_donut(tally: &ConditionTally, theme: &Theme) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, DONUT_SIZE).into_drawing_area();
        draw_donut(&root, tally, theme).map_err(|e| RenderError::chart("donut", e))?;
        root.present()
            .map_err(|e| RenderError::chart("donut", e))?;
    }
    Ok(svg)
}

/// Daily min and max temperature lines with the band between them shaded.
pub fn trend_chart(days: &[DailySummary], theme: &Theme) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, TREND_SIZE).into_drawing_area();
        draw_trend(&root, days, theme).map_err(|e| RenderError::chart("trend", e))?;
        root.present()
            .map_err(|e| RenderError::chart("trend", e))?;
    }
    Ok(svg)
}

/// Annotated correlation grid on a diverging scale centred at zero.
pub fn correlation_heatmap(
    matrix: &CorrelationMatrix,
    theme: &Theme,
) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, HEATMAP_SIZE).into_drawing_area();
        draw_heatmap(&root, matrix, theme).map_err(|e| RenderError::chart("heatmap", e))?;
        root.present()
            .map_err(|e| RenderError::chart("heatmap", e))?;
    }
    Ok(svg)
}

/// Value range of `values` with a 10% margin on both ends.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = max - min;
    let margin = if span.abs() < 1e-9 { 1.0 } else { span * 0.1 };
    (min - margin, max + margin)
}

/// Index axis `0..=last`, never empty.
fn index_axis(len: usize) -> std::ops::Range<i32> {
    let last = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
    0..last.max(1)
}

fn label_at(labels: &[String], index: i32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| labels.get(i))
        .cloned()
        .unwrap_or_default()
}

fn draw_hourly<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[HourlyPoint],
    theme: &Theme,
) -> DrawResult<DB> {
    root.fill(&theme.background)?;

    let labels: Vec<String> = points.iter().map(|p| p.hour.clone()).collect();
    let (low, high) = padded_range(points.iter().filter_map(|p| p.temperature));
    let coords: Vec<(i32, f64)> = (0..)
        .zip(points)
        .filter_map(|(i, p)| Some((i, p.temperature?)))
        .collect();

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(index_axis(points.len()), low..high)?;

    let x_formatter = |i: &i32| label_at(&labels, *i);
    chart
        .configure_mesh()
        .x_labels(points.len().max(2))
        .x_label_formatter(&x_formatter)
        .x_desc("Time")
        .y_desc("Temperature (°C)")
        .axis_style(theme.primary)
        .light_line_style(theme.primary.mix(0.06))
        .bold_line_style(theme.primary.mix(0.18))
        .label_style((FONT, 12).into_font().color(&theme.text))
        .axis_desc_style((FONT, 13).into_font().color(&theme.text))
        .draw()?;

    chart.draw_series(AreaSeries::new(
        coords.iter().copied(),
        low,
        theme.primary.mix(0.18),
    ))?;

    let primary = theme.primary;
    chart
        .draw_series(LineSeries::new(
            coords.iter().copied(),
            primary.stroke_width(3),
        ))?
        .label("Temp (°C)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], primary.stroke_width(3)));

    chart.draw_series(
        coords
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 5, primary.filled())),
    )?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(theme.card.mix(0.25))
        .border_style(theme.primary.mix(0.5))
        .label_font((FONT, 12).into_font().color(&theme.text))
        .draw()?;

    Ok(())
}

fn draw_donut<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    tally: &ConditionTally,
    theme: &Theme,
) -> DrawResult<DB> {
    root.fill(&theme.background)?;

    let slices: Vec<(&str, usize)> = tally.iter().take(DONUT_SLICES).collect();
    if slices.is_empty() {
        return Ok(());
    }

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.38;
    let sizes: Vec<f64> = slices.iter().map(|&(_, count)| count as f64).collect();
    // Shares are of every sample, including categories past the drawn slices.
    let total = tally.total() as f64;
    let labels: Vec<String> = slices
        .iter()
        .map(|&(name, count)| format!("{} {:.1}%", name, count as f64 * 100.0 / total))
        .collect();
    let colors: Vec<RGBColor> = theme.palette[..slices.len()].to_vec();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.donut_hole(radius * 0.55);
    pie.label_style((FONT, 14).into_font().color(&theme.text));
    root.draw(&pie)?;

    Ok(())
}

fn draw_trend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    days: &[DailySummary],
    theme: &Theme,
) -> DrawResult<DB> {
    root.fill(&theme.background)?;

    let labels: Vec<String> = days.iter().map(|d| d.date.clone()).collect();
    let (low, high) = padded_range(days.iter().flat_map(|d| [d.min_temp, d.max_temp]).flatten());
    let mins: Vec<(i32, f64)> = (0..)
        .zip(days)
        .filter_map(|(i, d)| Some((i, d.min_temp?)))
        .collect();
    let maxs: Vec<(i32, f64)> = (0..)
        .zip(days)
        .filter_map(|(i, d)| Some((i, d.max_temp?)))
        .collect();

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(
            "5-Day Temperature Trend",
            (FONT, 20).into_font().color(&theme.text),
        )
        .x_label_area_size(44)
        .y_label_area_size(60)
        .build_cartesian_2d(index_axis(days.len()), low..high)?;

    let x_formatter = |i: &i32| label_at(&labels, *i);
    chart
        .configure_mesh()
        .x_labels(days.len().max(2))
        .x_label_formatter(&x_formatter)
        .x_desc("Date")
        .y_desc("Temperature (°C)")
        .axis_style(theme.primary)
        .light_line_style(theme.primary.mix(0.05))
        .bold_line_style(theme.primary.mix(0.2))
        .label_style((FONT, 12).into_font().color(&theme.text))
        .axis_desc_style((FONT, 14).into_font().color(&theme.text))
        .draw()?;

    // The band only spans days with both bounds.
    let bounded: Vec<(i32, f64, f64)> = (0..)
        .zip(days)
        .filter_map(|(i, d)| Some((i, d.min_temp?, d.max_temp?)))
        .collect();
    if bounded.len() > 1 {
        let band: Vec<(i32, f64)> = bounded
            .iter()
            .map(|&(i, min, _)| (i, min))
            .chain(bounded.iter().rev().map(|&(i, _, max)| (i, max)))
            .collect();
        chart.draw_series(std::iter::once(Polygon::new(
            band,
            theme.primary.mix(0.2).filled(),
        )))?;
    }

    let (primary, accent) = (theme.primary, theme.accent);
    chart
        .draw_series(LineSeries::new(mins.iter().copied(), primary.stroke_width(3)))?
        .label("Min Temp")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], primary.stroke_width(3)));
    chart.draw_series(
        mins.iter()
            .map(|&(x, y)| Circle::new((x, y), 6, primary.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(maxs.iter().copied(), accent.stroke_width(3)))?
        .label("Max Temp")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], accent.stroke_width(3)));
    chart.draw_series(maxs.iter().map(|&(x, y)| {
        EmptyElement::at((x, y)) + Rectangle::new([(-5, -5), (5, 5)], accent.filled())
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(theme.card.mix(0.9))
        .border_style(theme.primary.mix(0.5))
        .label_font((FONT, 12).into_font().color(&theme.text))
        .draw()?;

    Ok(())
}

fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    matrix: &CorrelationMatrix,
    theme: &Theme,
) -> DrawResult<DB> {
    const LEFT: i32 = 100;
    const TOP: i32 = 50;
    const CELL: i32 = 80;
    const BAR_WIDTH: i32 = 16;
    const BAR_STEPS: i32 = 64;

    root.fill(&theme.background)?;

    let centered = |size: f64| {
        (FONT, size)
            .into_font()
            .color(&theme.text)
            .pos(Pos::new(HPos::Center, VPos::Center))
    };
    let metrics = matrix.metrics();
    let grid = CELL * metrics.len() as i32;

    root.draw(&Text::new(
        "Correlation Matrix: Temp · Pressure · Humidity · Wind",
        (LEFT + grid / 2, TOP / 2),
        centered(15.0),
    ))?;

    for (row, values) in (0..).zip(matrix.rows()) {
        for (column, value) in (0..).zip(values) {
            let x0 = LEFT + column * CELL;
            let y0 = TOP + row * CELL;
            let fill = value.map_or(theme.background, |v| theme.diverging(v));
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL, y0 + CELL)],
                fill.filled(),
            ))?;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL, y0 + CELL)],
                WHITE.mix(0.03),
            ))?;
            if let Some(v) = value {
                root.draw(&Text::new(
                    format!("{:.2}", v),
                    (x0 + CELL / 2, y0 + CELL / 2),
                    centered(13.0),
                ))?;
            }
        }
    }

    let row_label = (FONT, 12)
        .into_font()
        .color(&theme.text)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, metric) in (0..).zip(metrics.iter()) {
        root.draw(&Text::new(
            metric.column_name(),
            (LEFT - 8, TOP + i * CELL + CELL / 2),
            row_label.clone(),
        ))?;
        root.draw(&Text::new(
            metric.column_name(),
            (LEFT + i * CELL + CELL / 2, TOP + grid + 16),
            centered(12.0),
        ))?;
    }

    let bar_x = LEFT + grid + 30;
    let step_height = grid / BAR_STEPS;
    for step in 0..BAR_STEPS {
        let value = 1.0 - 2.0 * f64::from(step) / f64::from(BAR_STEPS - 1);
        let y0 = TOP + step * step_height;
        root.draw(&Rectangle::new(
            [(bar_x, y0), (bar_x + BAR_WIDTH, y0 + step_height)],
            theme.diverging(value).filled(),
        ))?;
    }
    let tick = (FONT, 11)
        .into_font()
        .color(&theme.text)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (label, y) in [
        ("1.00", TOP),
        ("0.00", TOP + grid / 2),
        ("-1.00", TOP + grid),
    ] {
        root.draw(&Text::new(label, (bar_x + BAR_WIDTH + 6, y), tick.clone()))?;
    }
    root.draw(&Text::new(
        "Correlation",
        (bar_x + BAR_WIDTH / 2, TOP + grid + 16),
        centered(11.0),
    ))?;

    Ok(())
}
