use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Datetime parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Season code {code} is outside the known set 1-4")]
    UnmappedSeason { code: u8 },

    #[error("Weather code {code} is outside the known set 1-4")]
    UnmappedWeather { code: u8 },

    #[error("Invalid hour range: start {start} > end {end}")]
    InvalidHourRange { start: u32, end: u32 },

    #[error("Aggregation requested on an empty record set")]
    EmptyInput,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
