//! Week-level weather insights for the forecast view.

use serde::{Deserialize, Serialize};

use super::watering::HEAT_THRESHOLD_F;
use crate::models::DailyWeather;

/// Weekly total (mm) below which rainfall counts as low.
pub const LOW_RAINFALL_TOTAL_MM: f64 = 10.0;

/// Single-day precipitation (mm) that raises a storm alert.
pub const STORM_DAY_PRECIPITATION_MM: f64 = 20.0;

/// Aggregate observations over a forecast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherInsights {
    /// Mean of the daily highs in °F
    pub average_high_f: f64,
    /// Sum of daily precipitation in mm
    pub total_precipitation_mm: f64,
    /// Today's high may stress plants
    pub heat_stress_today: bool,
    /// The week is dry enough to plan regular watering
    pub low_rainfall: bool,
    /// Storms or a very wet day are expected
    pub storm_alert: bool,
}

impl WeatherInsights {
    /// Compute insights, or `None` for an empty forecast.
    pub fn from_forecast(forecast: &[DailyWeather]) -> Option<Self> {
        let today = forecast.first()?;
        let days = forecast.len() as f64;
        let total_high: f64 = forecast.iter().map(|day| day.temp_max_f).sum();
        let total_precipitation_mm: f64 = forecast.iter().map(|day| day.precipitation_mm).sum();

        Some(Self {
            average_high_f: total_high / days,
            total_precipitation_mm,
            heat_stress_today: today.temp_max_f > HEAT_THRESHOLD_F,
            low_rainfall: total_precipitation_mm < LOW_RAINFALL_TOTAL_MM,
            storm_alert: forecast.iter().any(|day| {
                day.condition_contains("storm") || day.precipitation_mm > STORM_DAY_PRECIPITATION_MM
            }),
        })
    }

    /// Advice sentence for the temperature panel.
    pub fn temperature_advice(&self) -> &'static str {
        if self.heat_stress_today {
            "Today's high temperature may stress some plants. Consider providing shade or extra water."
        } else {
            "Current temperatures are within a good range for plant growth."
        }
    }

    /// Advice sentence for the precipitation panel.
    pub fn precipitation_advice(&self) -> &'static str {
        if self.low_rainfall {
            "Low rainfall expected. Plan to water your garden regularly."
        } else {
            "Good rainfall expected. Monitor soil moisture to avoid overwatering."
        }
    }
}
