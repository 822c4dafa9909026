//! Garden entry operations for the GardenPlanner.

use std::collections::HashSet;

use jiff::civil::Date;

use super::GardenPlanner;
use crate::{
    error::{GardenError, Result},
    models::{ActiveView, GardenEntry, GardenStatus, GardenSummary},
    params::AddToGarden,
};

impl GardenPlanner {
    /// Adds the selected crop to the garden as a planned entry.
    ///
    /// On success the error, selection and add form are cleared and the view
    /// switches to Garden. If the entry cannot be stored the garden is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::NoSelection` if no crop is selected
    /// Returns `GardenError::MissingDate` if `planting_date` is blank
    /// Returns `GardenError::InvalidInput` if `planting_date` is not `YYYY-MM-DD`
    /// Returns `GardenError::Database` if the entry cannot be stored
    pub async fn add_to_garden(&self, planting_date: &str) -> Result<GardenEntry> {
        let selected = self.state.borrow().selected_crop.clone();
        let Some(crop) = selected else {
            return self.fail(GardenError::NoSelection);
        };

        let planting_date = planting_date.trim();
        if planting_date.is_empty() {
            return self.fail(GardenError::MissingDate);
        }
        let date = match planting_date.parse::<Date>() {
            Ok(date) => date,
            Err(e) => {
                return self.fail(
                    GardenError::invalid_input("planting_date")
                        .with_reason(format!("'{planting_date}' is not a YYYY-MM-DD date ({e})")),
                )
            }
        };

        let entry = GardenEntry::planned(self.allocate_id(), &crop, date);
        let stored = entry.clone();
        if let Err(e) = self.with_database(move |db| db.insert_entry(&stored)).await {
            return self.fail(e);
        }

        let added = entry.clone();
        self.state.send_modify(|state| {
            state.garden.push(added);
            state.error = None;
            state.selected_crop = None;
            state.form_visible = false;
            state.active_view = ActiveView::Garden;
        });
        log::info!("Added {} (id {}) planting on {}", entry.crop, entry.id, entry.planting_date);
        Ok(entry)
    }

    /// Selects a fetched crop by name and adds it in one step.
    pub async fn add_crop(&self, params: &AddToGarden) -> Result<GardenEntry> {
        self.select_crop_by_name(&params.crop)?;
        self.add_to_garden(&params.planting_date).await
    }

    /// Sets the status of entry `id`. Any status may be set directly.
    ///
    /// A missing id is a no-op that returns `Ok(None)`.
    pub async fn update_status(
        &self,
        id: u64,
        status: GardenStatus,
    ) -> Result<Option<GardenEntry>> {
        if self.state.borrow().entry(id).is_none() {
            log::debug!("No garden entry {id} to update");
            return Ok(None);
        }

        if let Err(e) = self
            .with_database(move |db| db.update_entry_status(id, status))
            .await
        {
            return self.fail(e);
        }

        let mut updated = None;
        self.state.send_if_modified(|state| {
            let Some(entry) = state.garden.iter_mut().find(|entry| entry.id == id) else {
                return false;
            };
            entry.status = status;
            updated = Some(entry.clone());
            true
        });
        Ok(updated)
    }

    /// Moves entry `id` one step along Planned → Planted → Harvested.
    ///
    /// A harvested entry is returned unchanged; a missing id yields `Ok(None)`.
    pub async fn advance_status(&self, id: u64) -> Result<Option<GardenEntry>> {
        let current = self.state.borrow().entry(id).cloned();
        let Some(entry) = current else {
            return Ok(None);
        };

        match entry.status.next() {
            Some(next) => self.update_status(id, next).await,
            None => Ok(Some(entry)),
        }
    }

    /// Removes entry `id`. Returns whether an entry was removed.
    pub async fn remove_from_garden(&self, id: u64) -> Result<bool> {
        if self.state.borrow().entry(id).is_none() {
            return Ok(false);
        }

        if let Err(e) = self.with_database(move |db| db.remove_entry(id)).await {
            return self.fail(e);
        }

        let removed = self.state.send_if_modified(|state| {
            let before = state.garden.len();
            state.garden.retain(|entry| entry.id != id);
            state.garden.len() != before
        });
        Ok(removed)
    }

    /// Status counts over the current garden.
    pub fn garden_summary(&self) -> GardenSummary {
        self.state.borrow().garden_summary()
    }

    /// The garden as a pretty-printed JSON array.
    pub fn export_garden_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state.borrow().garden)?)
    }

    /// Replaces the garden with the entries in `json`, keeping their ids.
    /// Entries are ordered by id, the order the store reloads them in.
    /// Returns the number of entries imported.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Serialization` if `json` is not a garden array
    /// Returns `GardenError::InvalidInput` if two entries share an id or an
    /// id is outside `1..=i64::MAX`
    pub async fn import_garden_json(&self, json: &str) -> Result<usize> {
        let mut entries: Vec<GardenEntry> = match serde_json::from_str(json) {
            Ok(entries) => entries,
            Err(e) => return self.fail(e.into()),
        };

        if let Some(entry) = entries.iter().find(|entry| !is_storable_id(entry.id)) {
            return self.fail(
                GardenError::invalid_input("garden")
                    .with_reason(format!("entry id {} is out of range", entry.id)),
            );
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = entries.iter().find(|entry| !seen.insert(entry.id)) {
            return self.fail(
                GardenError::invalid_input("garden")
                    .with_reason(format!("duplicate entry id {}", duplicate.id)),
            );
        }

        entries.sort_by_key(|entry| entry.id);
        let stored = entries.clone();
        if let Err(e) = self.with_database(move |db| db.replace_entries(&stored)).await {
            return self.fail(e);
        }

        let count = entries.len();
        let max_id = entries.iter().map(|entry| entry.id).max().unwrap_or(0);
        self.reserve_ids_through(max_id);
        self.state.send_modify(|state| {
            state.garden = entries;
            state.error = None;
        });
        log::info!("Imported {count} garden entries");
        Ok(count)
    }
}

/// Ids are stored as SQLite integers and 0 is never allocated.
fn is_storable_id(id: u64) -> bool {
    id != 0 && i64::try_from(id).is_ok()
}
