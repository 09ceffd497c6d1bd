use chrono::{DateTime, Duration};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weatherdash::{
    condition_tally, daily_summary, hourly_series, ForecastSample, LabelZone, MetricTable,
};

fn samples(count: usize) -> Vec<ForecastSample> {
    let start = DateTime::from_timestamp(1_705_276_800, 0).unwrap_or_default();
    (0..count)
        .map(|i| {
            let timestamp = start + Duration::hours(3 * i as i64);
            let temperature = 25.0 + (i % 8) as f64 * 0.75;
            ForecastSample {
                timestamp,
                date: timestamp.format("%Y-%m-%d").to_string(),
                temperature: Some(temperature),
                temp_min: Some(temperature - 1.0),
                temp_max: Some(temperature + 1.0),
                pressure: Some(1012.0 - i as f64 * 0.2),
                humidity: Some(55.0 + (i % 6) as f64 * 5.0),
                wind_speed: Some(1.5 + (i % 4) as f64),
                condition: ["Clear", "Clouds", "Rain", "Drizzle"][i % 4].to_string(),
            }
        })
        .collect()
}

fn bench_shaping(c: &mut Criterion) {
    let input = samples(40);
    let clock = LabelZone::Utc.resolve(None);

    c.bench_function("hourly_series", |b| b.iter(|| hourly_series(black_box(&input), &clock)));
    c.bench_function("condition_tally", |b| b.iter(|| condition_tally(black_box(&input))));
    c.bench_function("daily_summary", |b| b.iter(|| daily_summary(black_box(&input))));
    c.bench_function("correlation", |b| {
        b.iter(|| {
            MetricTable::from_samples(black_box(&input))
                .and_then(|table| table.correlation())
                .ok()
        })
    });
}

criterion_group!(benches, bench_shaping);
criterion_main!(benches);
