//! Tabular view of the forecast metrics and their pairwise correlation.

use crate::shaping::forecast::FIVE_DAY_WINDOW;
use crate::types::correlation_matrix::{CorrelationMatrix, Metric};
use crate::types::forecast_sample::ForecastSample;
use polars::prelude::*;

/// Temperature, pressure, humidity and wind speed for the first 40 samples.
///
/// One row per sample. Values missing from the forecast document are null in
/// the frame, never zero.
#[derive(Debug, Clone)]
pub struct MetricTable {
    frame: DataFrame,
}

impl MetricTable {
    pub fn from_samples(samples: &[ForecastSample]) -> PolarsResult<MetricTable> {
        let window = &samples[..samples.len().min(FIVE_DAY_WINDOW)];
        let temperature: Vec<Option<f64>> = window.iter().map(|s| s.temperature).collect();
        let pressure: Vec<Option<f64>> = window.iter().map(|s| s.pressure).collect();
        let humidity: Vec<Option<f64>> = window.iter().map(|s| s.humidity).collect();
        let wind_speed: Vec<Option<f64>> = window.iter().map(|s| s.wind_speed).collect();

        let frame = df!(
            Metric::Temperature.column_name() => temperature,
            Metric::Pressure.column_name() => pressure,
            Metric::Humidity.column_name() => humidity,
            Metric::WindSpeed.column_name() => wind_speed
        )?;

        Ok(MetricTable { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Pearson correlation for every pair of metric columns.
    ///
    /// Each pair only uses the rows where both values are present. Returns
    /// `Ok(None)` for an empty table.
    pub fn correlation(&self) -> PolarsResult<Option<CorrelationMatrix>> {
        if self.is_empty() {
            return Ok(None);
        }

        let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(Metric::ALL.len());
        for metric in Metric::ALL {
            let values = self.frame.column(metric.column_name())?.f64()?;
            columns.push(values.into_iter().collect());
        }

        let mut cells = [[None; 4]; 4];
        for row in 0..columns.len() {
            for column in row..columns.len() {
                let coefficient = if row == column {
                    pearson(&columns[row], &columns[column]).map(|_| 1.0)
                } else {
                    pearson(&columns[row], &columns[column])
                };
                cells[row][column] = coefficient;
                cells[column][row] = coefficient;
            }
        }

        Ok(Some(CorrelationMatrix::from_cells(cells)))
    }
}

/// Pearson coefficient over the pairwise-complete observations of `a` and `b`.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    Some((cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0))
}
