use std::collections::BTreeSet;

use super::EnrichedRecord;

/// The process-wide immutable enriched record set.
///
/// Constructed once after derivation and handed out by shared reference;
/// filtering and aggregation only ever borrow it, so repeated interactions
/// reuse the same derivation without locking.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<EnrichedRecord>,
}

impl Dataset {
    pub fn from_enriched(records: Vec<EnrichedRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present, ascending. The CLI uses this as the default
    /// year selection when none is given.
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Earliest and latest timestamp present, or `None` for an empty set.
    pub fn date_range(&self) -> Option<(chrono::NaiveDateTime, chrono::NaiveDateTime)> {
        let first = self.records.first()?.datetime;
        let (min, max) = self
            .records
            .iter()
            .fold((first, first), |(min, max), record| {
                (min.min(record.datetime), max.max(record.datetime))
            });
        Some((min, max))
    }
}
