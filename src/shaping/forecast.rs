//! Derived views over the forecast sample sequence.
//!
//! All three views read the samples in their upstream order and never fail on
//! short input: fewer samples simply produce shorter outputs.

use crate::types::condition_tally::ConditionTally;
use crate::types::daily_summary::DailySummary;
use crate::types::forecast_sample::ForecastSample;
use crate::types::hourly_point::HourlyPoint;
use crate::types::label_zone::LabelClock;
use log::debug;

/// Samples covering the next 24 hours (8 x 3h).
pub const HOURLY_WINDOW: usize = 8;
/// Samples covering the next 5 days (40 x 3h).
pub const FIVE_DAY_WINDOW: usize = 40;
/// Maximum number of dates in the daily summary.
pub const SUMMARY_DAYS: usize = 5;

fn window(samples: &[ForecastSample], size: usize) -> &[ForecastSample] {
    &samples[..samples.len().min(size)]
}

/// Temperature for each of the first 8 samples, labelled with its hour.
pub fn hourly_series(samples: &[ForecastSample], clock: &LabelClock) -> Vec<HourlyPoint> {
    window(samples, HOURLY_WINDOW)
        .iter()
        .map(|sample| HourlyPoint {
            hour: clock.hour_label(sample.timestamp),
            temperature: sample.temperature,
        })
        .collect()
}

/// Condition categories counted over the first 40 samples.
pub fn condition_tally(samples: &[ForecastSample]) -> ConditionTally {
    window(samples, FIVE_DAY_WINDOW)
        .iter()
        .map(|sample| sample.condition.as_str())
        .collect()
}

/// One row per distinct date in sample order, at most 5 rows.
///
/// A date's min/max are taken from the first sample carrying that date. Later
/// samples of the same date are ignored even when they are colder or warmer.
pub fn daily_summary(samples: &[ForecastSample]) -> Vec<DailySummary> {
    let mut rows: Vec<DailySummary> = Vec::with_capacity(SUMMARY_DAYS);
    for sample in samples {
        if rows.len() == SUMMARY_DAYS {
            break;
        }
        if rows.iter().any(|row| row.date == sample.date) {
            continue;
        }
        rows.push(DailySummary {
            date: sample.date.clone(),
            min_temp: sample.temp_min,
            max_temp: sample.temp_max,
        });
    }
    debug!(
        "Summarized {} samples into {} daily rows",
        samples.len(),
        rows.len()
    );
    rows
}
