//! Derived gardening advice computed from fetched forecast data.
//!
//! Everything here is a pure function of its inputs; nothing is cached. The
//! planner calls into these on each snapshot read.
//!
//! - [`watering`]: the "water today?" heuristic
//! - [`icon`]: condition text to icon family
//! - [`insights`]: weekly temperature/precipitation observations
//! - [`tips`]: general tips rotated by day

pub mod icon;
pub mod insights;
pub mod tips;
pub mod watering;

pub use icon::{classify_weather_icon, WeatherIcon};
pub use insights::WeatherInsights;
pub use tips::{tip_for_day, GARDENING_TIPS};
pub use watering::should_water_today;
