use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::utils::constants::{
    AFTERNOON_END_HOUR, MAX_HOUR, MORNING_END_HOUR, NIGHT_END_HOUR,
};

/// Season of a rental observation, mapped from the dataset's 1-4 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Map a raw season code. Codes outside 1-4 are an error, never a
    /// silent default.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Fall),
            4 => Ok(Season::Winter),
            _ => Err(AnalyticsError::UnmappedSeason { code }),
        }
    }

    pub fn as_code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Parse a user-facing season name (CLI filter value).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Weather condition, mapped from the dataset's 1-4 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherKind {
    Clear = 1,
    #[serde(rename = "Mist/Cloudy")]
    MistCloudy = 2,
    #[serde(rename = "Light Rain/Snow")]
    LightRainSnow = 3,
    #[serde(rename = "Heavy Rain/Fog")]
    HeavyRainFog = 4,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 4] = [
        WeatherKind::Clear,
        WeatherKind::MistCloudy,
        WeatherKind::LightRainSnow,
        WeatherKind::HeavyRainFog,
    ];

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(WeatherKind::Clear),
            2 => Ok(WeatherKind::MistCloudy),
            3 => Ok(WeatherKind::LightRainSnow),
            4 => Ok(WeatherKind::HeavyRainFog),
            _ => Err(AnalyticsError::UnmappedWeather { code }),
        }
    }

    pub fn as_code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::MistCloudy => "Mist/Cloudy",
            WeatherKind::LightRainSnow => "Light Rain/Snow",
            WeatherKind::HeavyRainFog => "Heavy Rain/Fog",
        }
    }
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse time-of-day bucket derived from the hour of day.
///
/// Bins are lower-inclusive, upper-exclusive: [0,6) night, [6,12) morning,
/// [12,18) afternoon, [18,24) evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 4] = [
        DayPeriod::Night,
        DayPeriod::Morning,
        DayPeriod::Afternoon,
        DayPeriod::Evening,
    ];

    /// Bin an hour of day into its half-open interval. Hours above 23 are
    /// clamped before binning.
    pub fn from_hour(hour: u32) -> Self {
        match hour.min(MAX_HOUR) {
            h if h < NIGHT_END_HOUR => DayPeriod::Night,
            h if h < MORNING_END_HOUR => DayPeriod::Morning,
            h if h < AFTERNOON_END_HOUR => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayPeriod::Night => "night",
            DayPeriod::Morning => "morning",
            DayPeriod::Afternoon => "afternoon",
            DayPeriod::Evening => "evening",
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Day of week with the fixed Monday-first ordering used by the
/// weekday x hour matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Row index in the Monday-first matrix axis.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
