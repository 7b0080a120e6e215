/// Timestamp layout used by the rental dataset.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hour-of-day bounds
pub const MIN_HOUR: u32 = 0;
pub const MAX_HOUR: u32 = 23;

/// Day-period bin uppers (exclusive)
pub const NIGHT_END_HOUR: u32 = 6;
pub const MORNING_END_HOUR: u32 = 12;
pub const AFTERNOON_END_HOUR: u32 = 18;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Static insights block rendered at the bottom of the text report.
pub const INSIGHTS: [&str; 3] = [
    "Rentals vary strongly by hour - morning and evening peaks.",
    "Seasonal patterns show highest rentals in summer/fall.",
    "Weather heavily affects bike usage.",
];
