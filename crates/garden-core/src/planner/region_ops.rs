//! Region loading for the GardenPlanner.

use super::{GardenPlanner, PlannerState};
use crate::{
    error::{GardenError, Result},
    models::{ActiveView, RegionCode},
};

/// How a call to [`GardenPlanner::load_region_data`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both fetches succeeded and were applied.
    Loaded { crops: usize, forecast_days: usize },
    /// A newer load started before this one finished; nothing was applied.
    Superseded,
}

impl GardenPlanner {
    /// Fetches the planting calendar and then the forecast for `region`.
    ///
    /// The raw input is recorded first. Invalid input is rejected without any
    /// network call. A failed weather fetch keeps the crops that were already
    /// replaced. When another load starts before this one finishes, this one
    /// applies nothing further and returns [`LoadOutcome::Superseded`].
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` for anything but exactly five digits
    /// Returns `GardenError::DataFetch` if either fetch fails
    pub async fn load_region_data(&self, region: &str) -> Result<LoadOutcome> {
        let region_input = region.to_string();
        self.state
            .send_modify(|state| state.region_input = region_input);

        let region = match RegionCode::parse(region) {
            Ok(region) => region,
            Err(e) => return self.fail(e),
        };

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.load_generation += 1;
            generation = state.load_generation;
            state.loading = true;
            state.error = None;
        });
        log::debug!("Loading region {region} (generation {generation})");

        let result = self.fetch_region(&region, generation).await;

        let error = result.as_ref().err().map(GardenError::user_message);
        let current = self.apply_if_current(generation, |state| {
            state.loading = false;
            if let Some(message) = error {
                state.error = Some(message);
            }
        });

        if !current {
            log::debug!("Load of region {region} superseded");
            return Ok(LoadOutcome::Superseded);
        }
        if let Err(e) = &result {
            log::warn!("Loading region {region} failed: {e}");
        }
        result
    }

    async fn fetch_region(&self, region: &RegionCode, generation: u64) -> Result<LoadOutcome> {
        let crops = self.api.fetch_planting_data(region).await?;
        let crop_count = crops.len();
        if !self.apply_if_current(generation, |state| state.crops = crops) {
            return Ok(LoadOutcome::Superseded);
        }

        let forecast = self.api.fetch_weather(region).await?;
        let forecast_days = forecast.len();
        if !self.apply_if_current(generation, |state| {
            state.forecast = forecast;
            state.active_view = ActiveView::Weather;
        }) {
            return Ok(LoadOutcome::Superseded);
        }

        Ok(LoadOutcome::Loaded {
            crops: crop_count,
            forecast_days,
        })
    }

    /// Applies `update` only while `generation` is still the newest load.
    fn apply_if_current(&self, generation: u64, update: impl FnOnce(&mut PlannerState)) -> bool {
        self.state.send_if_modified(|state| {
            if state.load_generation != generation {
                return false;
            }
            update(state);
            true
        })
    }
}
