pub mod categories;
pub mod criteria;
pub mod dataset;
pub mod enriched;
pub mod raw;

pub use categories::{DayPeriod, Season, WeatherKind, Weekday};
pub use criteria::FilterCriteria;
pub use dataset::Dataset;
pub use enriched::EnrichedRecord;
pub use raw::RawRecord;
