use std::collections::BTreeSet;
use std::io::Write;

use bikeshare_analytics::analyzers::{DashboardReport, DemandAnalyzer};
use bikeshare_analytics::models::{Dataset, FilterCriteria, Season, WeatherKind, Weekday};
use bikeshare_analytics::processors::{FeatureDeriver, FilterEngine};
use bikeshare_analytics::readers::RentalReader;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

const HEADER: &str =
    "datetime,season,holiday,workingday,weather,temp,atemp,humidity,windspeed,casual,registered,count";

fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

/// CSV through reader, deriver, filter, and analyzer, checking the exact
/// numbers the dashboard would display.
#[test]
fn test_full_pipeline_from_csv_to_kpis() {
    let file = write_csv(&[
        // 2011-01-03 was a Monday; morning commute hours
        "2011-01-03 08:00:00,1,0,1,1,9.8,12.9,70,6.0,5,115,120",
        "2011-01-03 09:00:00,1,0,1,1,10.7,13.6,65,8.9,10,70,80",
        "2011-01-10 08:00:00,1,0,1,2,8.2,10.6,75,11.0,4,156,160",
        // A 2012 summer evening, filtered out below by year
        "2012-07-02 18:00:00,3,0,1,1,31.2,34.8,55,8.9,120,280,400",
    ]);

    let reader = RentalReader::new();
    let raw = reader.read_records(file.path()).unwrap();
    assert_eq!(raw.len(), 4);

    let dataset = Dataset::from_enriched(FeatureDeriver::new().derive(&raw).unwrap());
    assert_eq!(
        dataset.years(),
        BTreeSet::from([2011, 2012]),
        "both years present before filtering"
    );

    let criteria = FilterCriteria::new(BTreeSet::from([2011]), None, 0, 23).unwrap();
    let filtered = FilterEngine::new().apply(dataset.records(), &criteria);
    assert_eq!(filtered.len(), 3);

    let analyzer = DemandAnalyzer::new();
    let kpis = analyzer.kpis(&filtered).unwrap();

    // Hour 8 mean = (120 + 160) / 2 = 140, hour 9 mean = 80
    assert_eq!(kpis.total_rentals, 360);
    assert_eq!(kpis.avg_per_hour, 110.0);
    assert_eq!(kpis.peak_hour, 8);
    assert_eq!(kpis.peak_hour_value, 140.0);

    let by_weather = analyzer.mean_by_weather(&filtered).unwrap();
    assert_eq!(by_weather.len(), 2);
    assert_eq!(by_weather[0].weather, WeatherKind::Clear);
    assert_eq!(by_weather[0].mean_count, 100.0);
    assert_eq!(by_weather[1].weather, WeatherKind::MistCloudy);
    assert_eq!(by_weather[1].mean_count, 160.0);

    let matrix = analyzer.weekday_hour_matrix(&filtered).unwrap();
    assert_eq!(matrix.get(Weekday::Monday, 8), Some(140.0));
    assert_eq!(matrix.get(Weekday::Monday, 9), Some(80.0));
    assert_eq!(matrix.get(Weekday::Sunday, 8), None);
}

#[test]
fn test_season_filter_matches_derived_season() {
    let file = write_csv(&[
        "2011-01-15 10:00:00,1,0,0,1,5.0,6.0,50,10.0,10,20,30",
        "2011-07-15 10:00:00,3,0,1,1,30.0,33.0,60,5.0,40,60,100",
        "2011-10-15 10:00:00,4,0,1,2,15.0,17.0,70,12.0,20,40,60",
    ]);

    let raw = RentalReader::new().read_records(file.path()).unwrap();
    let dataset = Dataset::from_enriched(FeatureDeriver::new().derive(&raw).unwrap());

    let criteria =
        FilterCriteria::new(BTreeSet::from([2011]), Some(Season::Fall), 0, 23).unwrap();
    let filtered = FilterEngine::new().apply(dataset.records(), &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].count, 100);
    assert_eq!(filtered[0].season, Season::Fall);
}

#[test]
fn test_mmap_and_buffered_reads_agree() {
    let file = write_csv(&[
        "2012-04-01 06:00:00,2,0,0,1,18.0,21.2,62,7.0,30,80,110",
        "2012-04-01 07:00:00,2,0,0,2,18.9,22.0,60,7.0,45,150,195",
    ]);

    let buffered = RentalReader::new().read_records(file.path()).unwrap();
    let mapped = RentalReader::with_mmap(true)
        .read_records(file.path())
        .unwrap();

    assert_eq!(buffered, mapped);
}

#[test]
fn test_report_json_contract() {
    let file = write_csv(&["2011-01-03 08:00:00,1,0,1,1,9.8,12.9,70,6.0,5,115,120"]);

    let raw = RentalReader::new().read_records(file.path()).unwrap();
    let enriched = FeatureDeriver::new().derive(&raw).unwrap();
    let report = DashboardReport::build(&DemandAnalyzer::new(), &enriched).unwrap();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["kpis"]["total_rentals"], 120);
    assert_eq!(json["kpis"]["peak_hour"], 8);
    assert_eq!(json["mean_by_weather"][0]["weather"], "Clear");
    assert_eq!(json["mean_by_day_period"][0]["day_period"], "morning");
    assert_eq!(json["weekday_hour_heatmap"].as_array().unwrap().len(), 7);
    assert_eq!(json["weekday_hour_heatmap"][0]["weekday"], "Monday");
    assert_eq!(json["weekday_hour_heatmap"][0]["mean_counts"][8], 120.0);
    assert!(json["weekday_hour_heatmap"][1]["mean_counts"][8].is_null());
}

#[test]
fn test_rederivation_is_idempotent_over_the_same_csv() {
    let file = write_csv(&[
        "2011-11-05 14:00:00,4,0,0,3,12.0,14.0,88,15.0,3,25,28",
        "2011-11-06 15:00:00,4,0,0,1,14.0,16.0,60,9.0,30,90,120",
    ]);

    let reader = RentalReader::new();
    let deriver = FeatureDeriver::new();

    let first = deriver.derive(&reader.read_records(file.path()).unwrap()).unwrap();
    let second = deriver.derive(&reader.read_records(file.path()).unwrap()).unwrap();

    assert_eq!(first, second);
}
