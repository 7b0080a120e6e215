use std::collections::BTreeSet;
use std::path::Path;

use crate::analyzers::{DashboardReport, DemandAnalyzer};
use crate::cli::args::{Cli, Commands};
use crate::error::{AnalyticsError, Result};
use crate::models::{Dataset, FilterCriteria, Season, WeatherKind};
use crate::processors::{FeatureDeriver, FilterEngine};
use crate::readers::RentalReader;
use crate::utils::constants::DATETIME_FORMAT;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Report {
            input,
            years,
            season,
            hour_start,
            hour_end,
            format,
            mmap,
        } => {
            let season = parse_season_filter(&season)?;
            let format = parse_format(&format)?;

            let dataset = load_dataset(&input, mmap)?;

            let years: BTreeSet<i32> = match years {
                Some(years) => years.into_iter().collect(),
                None => dataset.years(),
            };
            let criteria = FilterCriteria::new(years, season, hour_start, hour_end)?;

            let filtered = FilterEngine::new().apply(dataset.records(), &criteria);
            if filtered.is_empty() {
                println!("No records match the current filter");
                return Ok(());
            }

            let report = DashboardReport::build(&DemandAnalyzer::new(), &filtered)?;

            match format {
                ReportFormat::Text => print_text_report(&criteria, filtered.len(), &report),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }

        Commands::Info { input, sample } => {
            let dataset = load_dataset(&input, false)?;
            print_dataset_info(&input, &dataset, sample);
        }

        Commands::Validate { input } => {
            let dataset = load_dataset(&input, false)?;
            println!(
                "✅ All {} records parsed and enriched successfully",
                dataset.len()
            );
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Read the CSV and derive features once, producing the immutable dataset
/// every interaction borrows from.
fn load_dataset(path: &Path, use_mmap: bool) -> Result<Dataset> {
    let progress = ProgressReporter::spinner("Loading dataset...");

    let reader = RentalReader::with_mmap(use_mmap);
    let raw = reader.read_records(path)?;

    progress.set_message("Deriving features...");
    let enriched = FeatureDeriver::new().derive(&raw)?;

    let dataset = Dataset::from_enriched(enriched);
    progress.finish_with_message(&format!("Loaded {} records", dataset.len()));

    Ok(dataset)
}

enum ReportFormat {
    Text,
    Json,
}

fn parse_format(s: &str) -> Result<ReportFormat> {
    match s {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => Err(AnalyticsError::InvalidFormat(format!(
            "Unknown report format '{}', expected 'text' or 'json'",
            other
        ))),
    }
}

/// Map the CLI's season argument, where "all" means no filter.
fn parse_season_filter(s: &str) -> Result<Option<Season>> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    Season::parse(s).map(Some).ok_or_else(|| {
        AnalyticsError::InvalidFormat(format!(
            "Unknown season '{}', expected all, spring, summer, fall, or winter",
            s
        ))
    })
}

fn format_criteria(criteria: &FilterCriteria) -> String {
    let years: Vec<String> = criteria.years.iter().map(|y| y.to_string()).collect();
    let season = criteria
        .season
        .map_or("all".to_string(), |s| s.to_string());

    format!(
        "years={} season={} hours={}-{}",
        years.join(","),
        season,
        criteria.hour_start,
        criteria.hour_end
    )
}

fn print_text_report(criteria: &FilterCriteria, record_count: usize, report: &DashboardReport) {
    println!("\nBike Sharing Demand Dashboard");
    println!("=============================");
    println!("Filters: {}", format_criteria(criteria));
    println!("Matched {} records\n", record_count);

    println!("Total rentals (filtered): {}", report.kpis.total_rentals);
    println!("Avg rentals/hour:         {:.1}", report.kpis.avg_per_hour);
    println!("Peak hour:                {}:00", report.kpis.peak_hour);
    println!("Peak hour avg:            {:.1}", report.kpis.peak_hour_value);

    println!("\nMean Rentals by Hour");
    println!("{:>5} {:>10}", "hour", "mean");
    for row in &report.mean_by_hour {
        println!("{:>5} {:>10.1}", row.hour, row.mean_count);
    }

    println!("\nMean Rentals by Weather Condition");
    for row in &report.mean_by_weather {
        println!("{:<16} {:>10.1}", row.weather.name(), row.mean_count);
    }

    println!("\nMean Rentals by Day Period");
    for row in &report.mean_by_day_period {
        println!("{:<16} {:>10.1}", row.day_period.name(), row.mean_count);
    }

    println!("\nDemand Heatmap: Hour vs Weekday (mean rentals, '-' = no data)");
    print!("{:<10}", "");
    for hour in 0..24 {
        print!("{:>6}", hour);
    }
    println!();
    for row in &report.weekday_hour_heatmap {
        print!("{:<10}", row.weekday.name());
        for cell in &row.mean_counts {
            match cell {
                Some(mean) => print!("{:>6.0}", mean),
                None => print!("{:>6}", "-"),
            }
        }
        println!();
    }

    println!("\nInsights");
    for insight in &report.insights {
        println!("- {}", insight);
    }
}

fn print_dataset_info(path: &Path, dataset: &Dataset, sample: usize) {
    println!("\nDataset: {}", path.display());
    println!("Records: {} total", dataset.len());

    if let Some((start, end)) = dataset.date_range() {
        println!(
            "Date range: {} to {}",
            start.format(DATETIME_FORMAT),
            end.format(DATETIME_FORMAT)
        );
    }

    let years: Vec<String> = dataset.years().iter().map(|y| y.to_string()).collect();
    println!("Years: {}", years.join(", "));

    let working_days = dataset
        .records()
        .iter()
        .filter(|r| r.is_working_day())
        .count();
    let holidays = dataset.records().iter().filter(|r| r.is_holiday()).count();
    println!(
        "Working-day records: {}, holiday records: {}",
        working_days, holidays
    );

    println!("\nRecords per season:");
    for season in Season::ALL {
        let count = dataset
            .records()
            .iter()
            .filter(|r| r.season == season)
            .count();
        println!("  {:<10} {}", season.name(), count);
    }

    println!("\nRecords per weather condition:");
    for weather in WeatherKind::ALL {
        let count = dataset
            .records()
            .iter()
            .filter(|r| r.weather == weather)
            .count();
        println!("  {:<16} {}", weather.name(), count);
    }

    if sample > 0 {
        println!("\nSample records (showing up to {}):", sample);
        for (i, record) in dataset.records().iter().take(sample).enumerate() {
            println!(
                "{}. {} | {} | {} | {} | count={}",
                i + 1,
                record.datetime.format(DATETIME_FORMAT),
                record.season,
                record.weather,
                record.day_period,
                record.count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_season_filter() {
        assert_eq!(parse_season_filter("all").unwrap(), None);
        assert_eq!(parse_season_filter("All").unwrap(), None);
        assert_eq!(
            parse_season_filter("winter").unwrap(),
            Some(Season::Winter)
        );
        assert!(parse_season_filter("monsoon").is_err());
    }

    #[test]
    fn test_parse_format_rejects_unknown() {
        assert!(parse_format("text").is_ok());
        assert!(parse_format("json").is_ok());
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn test_format_criteria_line() {
        let criteria = FilterCriteria::new(
            BTreeSet::from([2011, 2012]),
            Some(Season::Summer),
            6,
            20,
        )
        .unwrap();
        assert_eq!(
            format_criteria(&criteria),
            "years=2011,2012 season=summer hours=6-20"
        );
    }
}
