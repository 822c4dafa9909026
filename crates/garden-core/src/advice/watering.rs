//! Rule-based watering recommendation.

use crate::models::DailyWeather;

/// Precipitation (mm) above which today counts as already watered.
pub const TODAY_RAIN_THRESHOLD_MM: f64 = 5.0;

/// Daily high (°F) above which plants need water regardless of tomorrow.
pub const HEAT_THRESHOLD_F: f64 = 85.0;

/// Precipitation (mm) tomorrow below which we should not wait for rain.
pub const TOMORROW_RAIN_THRESHOLD_MM: f64 = 5.0;

/// Decide whether the garden should be watered today.
///
/// Needs today and tomorrow; a shorter forecast yields `false`. Rules are
/// checked in order and the first match decides:
///
/// 1. rain in today's condition → no
/// 2. more than 5 mm today → no
/// 3. today's high above 85 °F → yes
/// 4. no rain in tomorrow's condition and under 5 mm tomorrow → yes
/// 5. otherwise → no
///
/// This is advisory UI logic and separate from the source's own
/// [`DailyWeather::source_recommends_water`] flag.
pub fn should_water_today(forecast: &[DailyWeather]) -> bool {
    let [today, tomorrow, ..] = forecast else {
        return false;
    };

    if today.condition_contains("rain") {
        return false;
    }
    if today.precipitation_mm > TODAY_RAIN_THRESHOLD_MM {
        return false;
    }
    if today.temp_max_f > HEAT_THRESHOLD_F {
        return true;
    }

    !tomorrow.condition_contains("rain") && tomorrow.precipitation_mm < TOMORROW_RAIN_THRESHOLD_MM
}
