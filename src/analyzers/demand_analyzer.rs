use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{AnalyticsError, Result};
use crate::models::{DayPeriod, EnrichedRecord, WeatherKind, Weekday};

/// Mean rentals for one hour of day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyMean {
    pub hour: u32,
    pub mean_count: f64,
}

/// Mean rentals under one weather condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherMean {
    pub weather: WeatherKind,
    pub mean_count: f64,
}

/// Mean rentals in one day period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPeriodMean {
    pub day_period: DayPeriod,
    pub mean_count: f64,
}

/// Scalar headline metrics over a filtered record set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandKpis {
    /// Raw sum of `count` over the filtered records.
    pub total_rentals: u64,
    /// Mean of the per-hour means, not the global mean. The two differ
    /// whenever hours carry unequal record counts.
    pub avg_per_hour: f64,
    /// Hour with the highest per-hour mean; ties go to the smallest hour.
    pub peak_hour: u32,
    pub peak_hour_value: f64,
}

/// Mean rentals per (weekday, hour) cell, Monday-first rows and hour
/// columns 0-23. A cell with no observations is `None`, never 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayHourMatrix {
    cells: [[Option<f64>; 24]; 7],
}

impl WeekdayHourMatrix {
    pub fn get(&self, weekday: Weekday, hour: u32) -> Option<f64> {
        self.cells[weekday.index()][hour as usize]
    }

    pub fn row(&self, weekday: Weekday) -> &[Option<f64>; 24] {
        &self.cells[weekday.index()]
    }

    /// Rows in the fixed Monday-to-Sunday order.
    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[Option<f64>; 24])> + '_ {
        Weekday::ALL.iter().map(move |w| (*w, self.row(*w)))
    }
}

/// Computes grouped demand statistics over a filtered record slice.
///
/// Every operation uses the arithmetic mean of `count` within a group and
/// fails with `EmptyInput` when handed zero records; a mean over nothing
/// is undefined and is never reported as 0 or NaN.
pub struct DemandAnalyzer;

impl DemandAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// One row per distinct hour present, ascending by hour.
    pub fn mean_by_hour(&self, records: &[EnrichedRecord]) -> Result<Vec<HourlyMean>> {
        if records.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        let mut groups: BTreeMap<u32, (u64, usize)> = BTreeMap::new();
        for record in records {
            let entry = groups.entry(record.hour).or_insert((0, 0));
            entry.0 += record.count;
            entry.1 += 1;
        }

        Ok(groups
            .into_iter()
            .map(|(hour, (sum, n))| HourlyMean {
                hour,
                mean_count: sum as f64 / n as f64,
            })
            .collect())
    }

    /// One row per distinct weather condition present, in code order.
    pub fn mean_by_weather(&self, records: &[EnrichedRecord]) -> Result<Vec<WeatherMean>> {
        if records.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        let mut groups: HashMap<WeatherKind, (u64, usize)> = HashMap::new();
        for record in records {
            let entry = groups.entry(record.weather).or_insert((0, 0));
            entry.0 += record.count;
            entry.1 += 1;
        }

        Ok(WeatherKind::ALL
            .iter()
            .filter_map(|weather| {
                groups.get(weather).map(|(sum, n)| WeatherMean {
                    weather: *weather,
                    mean_count: *sum as f64 / *n as f64,
                })
            })
            .collect())
    }

    /// One row per distinct day period present, night through evening.
    pub fn mean_by_day_period(&self, records: &[EnrichedRecord]) -> Result<Vec<DayPeriodMean>> {
        if records.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        let mut groups: HashMap<DayPeriod, (u64, usize)> = HashMap::new();
        for record in records {
            let entry = groups.entry(record.day_period).or_insert((0, 0));
            entry.0 += record.count;
            entry.1 += 1;
        }

        Ok(DayPeriod::ALL
            .iter()
            .filter_map(|period| {
                groups.get(period).map(|(sum, n)| DayPeriodMean {
                    day_period: *period,
                    mean_count: *sum as f64 / *n as f64,
                })
            })
            .collect())
    }

    /// Mean rentals per (weekday, hour) combination.
    pub fn weekday_hour_matrix(&self, records: &[EnrichedRecord]) -> Result<WeekdayHourMatrix> {
        if records.is_empty() {
            return Err(AnalyticsError::EmptyInput);
        }

        let mut sums = [[(0u64, 0usize); 24]; 7];
        for record in records {
            let cell = &mut sums[record.weekday.index()][record.hour as usize];
            cell.0 += record.count;
            cell.1 += 1;
        }

        let mut cells = [[None; 24]; 7];
        for (row, sum_row) in cells.iter_mut().zip(sums.iter()) {
            for (cell, (sum, n)) in row.iter_mut().zip(sum_row.iter()) {
                if *n > 0 {
                    *cell = Some(*sum as f64 / *n as f64);
                }
            }
        }

        Ok(WeekdayHourMatrix { cells })
    }

    /// Headline KPIs derived from the per-hour means.
    pub fn kpis(&self, records: &[EnrichedRecord]) -> Result<DemandKpis> {
        let by_hour = self.mean_by_hour(records)?;

        let total_rentals: u64 = records.iter().map(|r| r.count).sum();

        let avg_per_hour =
            by_hour.iter().map(|r| r.mean_count).sum::<f64>() / by_hour.len() as f64;

        // Ascending hour order plus a strict comparison gives the
        // smallest-hour tie-break.
        let mut peak = &by_hour[0];
        for row in &by_hour[1..] {
            if row.mean_count > peak.mean_count {
                peak = row;
            }
        }

        Ok(DemandKpis {
            total_rentals,
            avg_per_hour,
            peak_hour: peak.hour,
            peak_hour_value: peak.mean_count,
        })
    }
}

impl Default for DemandAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
