use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DayPeriod, Season, WeatherKind, Weekday};

/// A raw observation with its timestamp parsed and all calendar and
/// categorical features derived.
///
/// Every derived field is a pure function of the record's own
/// `datetime`/`season`/`weather`; there is no cross-record dependency, so
/// an enriched set can be filtered and aggregated repeatedly without
/// re-derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub datetime: NaiveDateTime,
    pub year: i32,
    pub month: u32,
    pub hour: u32,
    pub weekday: Weekday,
    pub season: Season,
    pub weather: WeatherKind,
    pub day_period: DayPeriod,

    // Passthrough fields, carried unchanged from the raw record
    pub holiday: u8,
    pub workingday: u8,
    pub temp: f32,
    pub atemp: f32,
    pub humidity: f32,
    pub windspeed: f32,
    pub casual: u32,
    pub registered: u32,
    pub count: u64,
}

impl EnrichedRecord {
    pub fn is_working_day(&self) -> bool {
        self.workingday == 1
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday == 1
    }
}
