//! Browsing and selection operations for the GardenPlanner.

use super::GardenPlanner;
use crate::{
    error::{GardenError, Result},
    models::{ActiveView, CropCategory, CropInfo},
    params::BrowseCrops,
};

impl GardenPlanner {
    /// Sets the crop name search text.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_modify(|state| state.search_query = query);
    }

    /// Sets the crop category tab.
    pub fn set_category(&self, category: CropCategory) {
        self.state.send_modify(|state| state.category = category);
    }

    /// Sets query and category together and returns the matching crops.
    pub fn browse_crops(&self, params: &BrowseCrops) -> Vec<CropInfo> {
        let query = params.query.clone();
        let category = params.category;
        self.state.send_modify(|state| {
            state.search_query = query;
            state.category = category;
        });
        self.state.borrow().filtered_crops().cloned().collect()
    }

    /// Selects `crop` for adding, replacing any prior selection, and opens
    /// the add form.
    pub fn select_crop(&self, crop: CropInfo) {
        self.state.send_modify(|state| {
            state.selected_crop = Some(crop);
            state.form_visible = true;
        });
    }

    /// Selects the first fetched crop whose name equals `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::CropNotFound` if no fetched crop has that name
    pub fn select_crop_by_name(&self, name: &str) -> Result<CropInfo> {
        let wanted = name.trim().to_lowercase();
        let found = self
            .state
            .borrow()
            .crops
            .iter()
            .find(|crop| crop.name.to_lowercase() == wanted)
            .cloned();

        match found {
            Some(crop) => {
                self.select_crop(crop.clone());
                Ok(crop)
            }
            None => self.fail(GardenError::CropNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Drops the selection and closes the add form.
    pub fn clear_selection(&self) {
        self.state.send_if_modified(|state| {
            let changed = state.selected_crop.is_some() || state.form_visible;
            state.selected_crop = None;
            state.form_visible = false;
            changed
        });
    }

    /// Switches the screen the renderer should show.
    pub fn set_active_view(&self, view: ActiveView) {
        self.state.send_modify(|state| state.active_view = view);
    }
}
