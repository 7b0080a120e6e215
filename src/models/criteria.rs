use std::collections::BTreeSet;

use validator::Validate;

use super::{EnrichedRecord, Season};
use crate::error::{AnalyticsError, Result};

/// User-selected predicate over the enriched record set.
///
/// The hour range is inclusive on both ends, unlike the exclusive-upper
/// day-period binning; the two rules apply independently to the same field.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct FilterCriteria {
    pub years: BTreeSet<i32>,

    /// `None` means no season filter (the UI's "All" sentinel).
    pub season: Option<Season>,

    #[validate(range(max = 23))]
    pub hour_start: u32,

    #[validate(range(max = 23))]
    pub hour_end: u32,
}

impl FilterCriteria {
    pub fn new(
        years: BTreeSet<i32>,
        season: Option<Season>,
        hour_start: u32,
        hour_end: u32,
    ) -> Result<Self> {
        let criteria = Self {
            years,
            season,
            hour_start,
            hour_end,
        };
        criteria.validate_relationships()?;
        Ok(criteria)
    }

    /// The widest criteria over a given year set: every season, every hour.
    pub fn all_hours(years: BTreeSet<i32>) -> Self {
        Self {
            years,
            season: None,
            hour_start: 0,
            hour_end: 23,
        }
    }

    pub fn validate_relationships(&self) -> Result<()> {
        self.validate()?;

        if self.hour_start > self.hour_end {
            return Err(AnalyticsError::InvalidHourRange {
                start: self.hour_start,
                end: self.hour_end,
            });
        }

        Ok(())
    }

    /// Whether a record passes every predicate. An empty year set matches
    /// nothing; there is no implicit all-years fallback.
    pub fn matches(&self, record: &EnrichedRecord) -> bool {
        self.years.contains(&record.year)
            && self.season.map_or(true, |s| record.season == s)
            && record.hour >= self.hour_start
            && record.hour <= self.hour_end
    }
}
