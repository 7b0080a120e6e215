use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::error::Result;
use crate::models::{DayPeriod, EnrichedRecord, RawRecord, Season, WeatherKind, Weekday};
use crate::utils::constants::DATETIME_FORMAT;

/// Derives calendar and categorical features from raw rental observations.
///
/// Derivation is pure and deterministic: re-running on the same input
/// yields identical output. A record with an unparseable timestamp or an
/// unknown season/weather code aborts the whole pass; the load is
/// all-or-nothing.
pub struct FeatureDeriver;

impl FeatureDeriver {
    pub fn new() -> Self {
        Self
    }

    pub fn derive(&self, raw: &[RawRecord]) -> Result<Vec<EnrichedRecord>> {
        let enriched = raw
            .iter()
            .map(|record| self.enrich_record(record))
            .collect::<Result<Vec<_>>>()?;

        debug!(records = enriched.len(), "derived calendar and categorical features");
        Ok(enriched)
    }

    /// Enrich a single observation. Pure function of the record's own
    /// `datetime`/`season`/`weather`.
    pub fn enrich_record(&self, raw: &RawRecord) -> Result<EnrichedRecord> {
        let datetime = NaiveDateTime::parse_from_str(&raw.datetime, DATETIME_FORMAT)?;

        let hour = datetime.hour();

        Ok(EnrichedRecord {
            datetime,
            year: datetime.year(),
            month: datetime.month(),
            hour,
            weekday: Weekday::from_chrono(datetime.weekday()),
            season: Season::from_code(raw.season)?,
            weather: WeatherKind::from_code(raw.weather)?,
            day_period: DayPeriod::from_hour(hour),
            holiday: raw.holiday,
            workingday: raw.workingday,
            temp: raw.temp,
            atemp: raw.atemp,
            humidity: raw.humidity,
            windspeed: raw.windspeed,
            casual: raw.casual,
            registered: raw.registered,
            count: raw.count,
        })
    }
}

impl Default for FeatureDeriver {
    fn default() -> Self {
        Self::new()
    }
}
