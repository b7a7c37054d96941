use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A previously searched city, as persisted in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

/// Coordinates resolved from a city name. Derived per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One raw forecast entry as delivered upstream (three-hour resolution).
#[derive(Debug, Clone)]
pub struct ForecastEntry {
    /// City-local reporting time, parsed from the provider's `dt_txt`.
    pub timestamp: NaiveDateTime,
    pub icon: String,
    pub description: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub humidity: f64,
}

/// Raw multi-day forecast series for a city, ordered by timestamp.
#[derive(Debug, Clone)]
pub struct ForecastSeries {
    pub city: String,
    pub entries: Vec<ForecastEntry>,
}

/// Shaped forecast sample returned to API clients.
///
/// Numeric fields are rounded to integers; `date` is formatted `MM/DD/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    pub city: String,
    pub date: String,
    pub icon: String,
    pub icon_description: String,
    pub temp_f: i64,
    pub wind_speed: i64,
    pub humidity: i64,
}
