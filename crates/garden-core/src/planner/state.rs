//! The planner's state snapshot and the pure views derived from it.

use crate::{
    advice::{self, WeatherInsights},
    models::{
        filter_crops, ActiveView, CropCategory, CropInfo, DailyWeather, GardenEntry, GardenSummary,
    },
};

/// Everything the rendering layer needs to draw the planner.
///
/// Obtained through [`super::GardenPlanner::snapshot`] or a
/// [`super::GardenPlanner::subscribe`] receiver. Changing a snapshot has no
/// effect on the planner; mutations go through the planner's operations.
#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    /// Raw region input as last submitted, valid or not
    pub region_input: String,
    /// Planting calendar of the last successful load
    pub crops: Vec<CropInfo>,
    /// Forecast of the last successful load; index 0 is today
    pub forecast: Vec<DailyWeather>,
    /// Crop name search text
    pub search_query: String,
    /// Crop category tab
    pub category: CropCategory,
    /// Crop picked for the add form
    pub selected_crop: Option<CropInfo>,
    /// Whether the add form is open
    pub form_visible: bool,
    /// The user's garden, in creation order
    pub garden: Vec<GardenEntry>,
    /// A region load is in flight
    pub loading: bool,
    /// The single current error message
    pub error: Option<String>,
    /// Screen to show
    pub active_view: ActiveView,
    pub(crate) load_generation: u64,
}

impl PlannerState {
    /// Crops matching the current search query and category, in fetch order.
    pub fn filtered_crops(&self) -> impl Iterator<Item = &CropInfo> {
        filter_crops(&self.crops, &self.search_query, self.category)
    }

    /// Status counts over the garden, recomputed on every call.
    pub fn garden_summary(&self) -> GardenSummary {
        GardenSummary::from_entries(&self.garden)
    }

    /// Whether the heuristic recommends watering today.
    pub fn should_water_today(&self) -> bool {
        advice::should_water_today(&self.forecast)
    }

    /// Weekly insights, if a forecast is loaded.
    pub fn weather_insights(&self) -> Option<WeatherInsights> {
        WeatherInsights::from_forecast(&self.forecast)
    }

    /// Look up a garden entry by id.
    pub fn entry(&self, id: u64) -> Option<&GardenEntry> {
        self.garden.iter().find(|entry| entry.id == id)
    }
}
