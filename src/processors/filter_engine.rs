use crate::models::{EnrichedRecord, FilterCriteria};

/// Applies a `FilterCriteria` to an enriched record slice.
///
/// The input is never mutated and the output preserves input order, so the
/// engine is safe to run repeatedly with different criteria against the
/// same shared dataset.
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(
        &self,
        records: &[EnrichedRecord],
        criteria: &FilterCriteria,
    ) -> Vec<EnrichedRecord> {
        records
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect()
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
