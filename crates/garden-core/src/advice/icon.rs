//! Weather condition to icon classification.

use serde::{Deserialize, Serialize};

/// Icon family for a forecast condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Rain,
    Sun,
    Cloudy,
    Wind,
    /// Fallback for anything unrecognised
    Warm,
}

impl WeatherIcon {
    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Sun => "☀",
            WeatherIcon::Cloudy => "☁",
            WeatherIcon::Wind => "🌬",
            WeatherIcon::Warm => "🌡",
        }
    }
}

/// Ordered substring rules; the first group with a match wins.
const ICON_RULES: &[(&[&str], WeatherIcon)] = &[
    (&["rain", "shower"], WeatherIcon::Rain),
    (&["sun", "clear"], WeatherIcon::Sun),
    (&["cloud"], WeatherIcon::Cloudy),
    (&["wind"], WeatherIcon::Wind),
];

/// Classify free-text condition into an icon, case-insensitively.
///
/// # Examples
///
/// ```rust
/// use garden_core::advice::{classify_weather_icon, WeatherIcon};
///
/// assert_eq!(classify_weather_icon("Patchy rain nearby"), WeatherIcon::Rain);
/// assert_eq!(classify_weather_icon("Sunny"), WeatherIcon::Sun);
/// assert_eq!(classify_weather_icon("Fog"), WeatherIcon::Warm);
/// ```
pub fn classify_weather_icon(condition: &str) -> WeatherIcon {
    let condition = condition.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| condition.contains(needle)))
        .map_or(WeatherIcon::Warm, |(_, icon)| *icon)
}
