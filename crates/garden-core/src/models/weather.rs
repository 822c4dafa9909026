//! Daily forecast rows as served by the weather endpoint.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Forecast for a single day. Index 0 of a forecast is today.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyWeather {
    /// Calendar date of the forecast
    pub date: Date,

    /// Daily high in °F
    #[serde(rename = "temp_max")]
    pub temp_max_f: f64,

    /// Daily low in °F
    #[serde(rename = "temp_min")]
    pub temp_min_f: f64,

    /// Total precipitation in millimetres
    #[serde(rename = "precipitation")]
    pub precipitation_mm: f64,

    /// Free-text condition, e.g. "Patchy rain nearby"
    #[serde(default)]
    pub condition: String,

    /// Advisory flag from the data source; "Yes" means water
    #[serde(default)]
    pub water_needed: String,

    /// Opaque icon URL, never interpreted
    #[serde(rename = "icon", default, skip_serializing_if = "Option::is_none")]
    pub icon_ref: Option<String>,
}

impl DailyWeather {
    /// The data source's own watering advice, independent of
    /// [`crate::advice::should_water_today`].
    pub fn source_recommends_water(&self) -> bool {
        self.water_needed == "Yes"
    }

    /// Case-insensitive substring match against the condition text.
    pub fn condition_contains(&self, needle: &str) -> bool {
        self.condition.to_lowercase().contains(&needle.to_lowercase())
    }
}
