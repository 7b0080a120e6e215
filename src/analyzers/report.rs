use serde::Serialize;

use super::{DayPeriodMean, DemandAnalyzer, DemandKpis, HourlyMean, WeatherMean};
use crate::error::Result;
use crate::models::{EnrichedRecord, Weekday};
use crate::utils::constants::INSIGHTS;

/// One heatmap row: a weekday and its 24 hourly mean cells. Absent
/// (weekday, hour) combinations serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub weekday: Weekday,
    pub mean_counts: [Option<f64>; 24],
}

/// The complete payload handed to external chart and KPI renderers.
///
/// Field names are the stable contract; the JSON output mode of the CLI
/// serializes this struct verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub kpis: DemandKpis,
    pub mean_by_hour: Vec<HourlyMean>,
    pub mean_by_weather: Vec<WeatherMean>,
    pub mean_by_day_period: Vec<DayPeriodMean>,
    pub weekday_hour_heatmap: Vec<HeatmapRow>,
    pub insights: Vec<&'static str>,
}

impl DashboardReport {
    /// Run every aggregation over a filtered record slice. Fails with
    /// `EmptyInput` on zero records, like the individual operations.
    pub fn build(analyzer: &DemandAnalyzer, records: &[EnrichedRecord]) -> Result<Self> {
        let matrix = analyzer.weekday_hour_matrix(records)?;
        let weekday_hour_heatmap = matrix
            .rows()
            .map(|(weekday, row)| HeatmapRow {
                weekday,
                mean_counts: *row,
            })
            .collect();

        Ok(Self {
            kpis: analyzer.kpis(records)?,
            mean_by_hour: analyzer.mean_by_hour(records)?,
            mean_by_weather: analyzer.mean_by_weather(records)?,
            mean_by_day_period: analyzer.mean_by_day_period(records)?,
            weekday_hour_heatmap,
            insights: INSIGHTS.to_vec(),
        })
    }
}
