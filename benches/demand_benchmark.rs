use std::collections::BTreeSet;

use bikeshare_analytics::models::{FilterCriteria, RawRecord};
use bikeshare_analytics::processors::{FeatureDeriver, FilterEngine};
use bikeshare_analytics::analyzers::DemandAnalyzer;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Two years of hourly observations, cycling through the season and weather
// codes the way the calendar does
fn create_test_records(days: usize) -> Vec<RawRecord> {
    let mut records = Vec::with_capacity(days * 24);
    let base_date = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();

    for day in 0..days {
        let date = base_date + Duration::days(day as i64);
        let season = ((day / 91) % 4 + 1) as u8;
        for hour in 0..24u32 {
            let weather = ((day + hour as usize) % 4 + 1) as u8;
            let count = 20 + ((hour as u64 * 13 + day as u64 * 7) % 400);

            records.push(RawRecord::new(
                format!("{} {:02}:00:00", date.format("%Y-%m-%d"), hour),
                season,
                weather,
                count,
            ));
        }
    }

    records
}

fn benchmark_feature_derivation(c: &mut Criterion) {
    let deriver = FeatureDeriver::new();
    let mut group = c.benchmark_group("feature_derivation");

    for days in [30, 365, 730] {
        let raw = create_test_records(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &raw, |b, raw| {
            b.iter(|| deriver.derive(black_box(raw)).unwrap());
        });
    }

    group.finish();
}

fn benchmark_filter_and_aggregate(c: &mut Criterion) {
    let raw = create_test_records(730);
    let enriched = FeatureDeriver::new().derive(&raw).unwrap();
    let engine = FilterEngine::new();
    let analyzer = DemandAnalyzer::new();
    let criteria = FilterCriteria::new(BTreeSet::from([2011, 2012]), None, 6, 20).unwrap();

    c.bench_function("filter_two_years", |b| {
        b.iter(|| engine.apply(black_box(&enriched), black_box(&criteria)));
    });

    let filtered = engine.apply(&enriched, &criteria);

    c.bench_function("kpis", |b| {
        b.iter(|| analyzer.kpis(black_box(&filtered)).unwrap());
    });

    c.bench_function("weekday_hour_matrix", |b| {
        b.iter(|| analyzer.weekday_hour_matrix(black_box(&filtered)).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_feature_derivation,
    benchmark_filter_and_aggregate
);
criterion_main!(benches);
