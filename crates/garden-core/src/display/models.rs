//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data. All
//! output is markdown for the terminal renderer.

use std::fmt;

use super::datetime::{DayLabel, LongDate};
use crate::{
    advice::{classify_weather_icon, WeatherInsights},
    models::{
        CropCategory, CropInfo, DailyWeather, GardenEntry, GardenStatus, GardenSummary,
        PlantingInfo,
    },
};

const NOT_LISTED: &str = "N/A";

impl fmt::Display for GardenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CropCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn schedule_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<&String>,
) -> fmt::Result {
    writeln!(f, "- **{label}**: {}", value.map_or(NOT_LISTED, String::as_str))
}

impl fmt::Display for CropInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name)?;
        writeln!(f)?;
        schedule_line(f, "Start seeds indoors", self.indoor_start.as_ref())?;
        schedule_line(f, "Plant seedlings", self.seedling_transplant.as_ref())?;
        schedule_line(f, "Direct sow", self.direct_sow.as_ref())?;
        writeln!(f)
    }
}

impl fmt::Display for PlantingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        schedule_line(f, "Start seeds indoors", self.indoor_start.as_ref())?;
        schedule_line(f, "Plant seedlings", self.seedlings.as_ref())?;
        schedule_line(f, "Direct sow", self.direct_sow.as_ref())
    }
}

impl fmt::Display for GardenEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.crop,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Planting date**: {}", LongDate(&self.planting_date))?;
        write!(f, "{}", self.planting_info)?;
        writeln!(f)
    }
}

impl fmt::Display for DailyWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = classify_weather_icon(&self.condition);
        write!(
            f,
            "- **{}** {} {}, {:.0}°F / {:.0}°F, {:.1} mm",
            DayLabel(&self.date),
            icon.glyph(),
            self.condition,
            self.temp_max_f,
            self.temp_min_f,
            self.precipitation_mm
        )?;
        if self.source_recommends_water() {
            write!(f, " (water needed)")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for GardenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**Total**: {} | **Planned**: {} | **Planted**: {} | **Harvested**: {}",
            self.total, self.planned, self.planted, self.harvested
        )
    }
}

impl fmt::Display for WeatherInsights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Weather Insights")?;
        writeln!(f)?;
        writeln!(f, "### Temperature")?;
        writeln!(f)?;
        writeln!(f, "Average high: {:.1}°F", self.average_high_f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.temperature_advice())?;
        writeln!(f)?;
        writeln!(f, "### Precipitation")?;
        writeln!(f)?;
        writeln!(f, "Total expected: {:.1} mm", self.total_precipitation_mm)?;
        writeln!(f)?;
        writeln!(f, "{}", self.precipitation_advice())?;

        if self.storm_alert {
            writeln!(f)?;
            writeln!(f, "### Storm Alert")?;
            writeln!(f)?;
            writeln!(
                f,
                "Storms or heavy rain expected this week. Secure tall plants and check drainage."
            )?;
        }
        Ok(())
    }
}
