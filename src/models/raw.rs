use serde::{Deserialize, Serialize};

/// One raw observation as it appears in the input CSV.
///
/// The timestamp is kept unparsed; parsing it is the feature deriver's job.
/// `temp` through `registered` are passthrough fields: carried along but not
/// used by any derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub datetime: String,
    pub season: u8,
    pub holiday: u8,
    pub workingday: u8,
    pub weather: u8,
    pub temp: f32,
    pub atemp: f32,
    pub humidity: f32,
    pub windspeed: f32,
    pub casual: u32,
    pub registered: u32,
    pub count: u64,
}

impl RawRecord {
    /// Construct a record from the four fields the pipeline derives and
    /// aggregates over, zeroing the passthrough columns.
    pub fn new(datetime: String, season: u8, weather: u8, count: u64) -> Self {
        Self {
            datetime,
            season,
            holiday: 0,
            workingday: 0,
            weather,
            temp: 0.0,
            atemp: 0.0,
            humidity: 0.0,
            windspeed: 0.0,
            casual: 0,
            registered: 0,
            count,
        }
    }
}
