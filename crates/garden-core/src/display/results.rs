//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of add, update,
//! and remove operations with consistent messaging and resource display.

use std::fmt;

use crate::models::GardenEntry;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use garden_core::{
///     display::CreateResult,
///     models::{CropInfo, GardenEntry},
/// };
/// use jiff::civil::date;
///
/// let entry = GardenEntry::planned(1, &CropInfo::named("Tomato"), date(2024, 5, 1));
/// let output = CreateResult::new(entry).to_string();
/// assert!(output.starts_with("Added Tomato to your garden with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<GardenEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added {} to your garden with ID: {}",
            self.resource.crop, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the update.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<GardenEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated garden entry with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<GardenEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed '{}' (ID: {}) from your garden",
            self.resource.crop, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{CropInfo, GardenStatus};

    #[test]
    fn test_update_result_lists_changes() {
        let mut entry = GardenEntry::planned(4, &CropInfo::named("Carrot"), date(2024, 4, 1));
        entry.status = GardenStatus::Planted;
        let output =
            UpdateResult::with_changes(entry, vec!["Status: planned → planted".to_string()])
                .to_string();
        assert!(output.starts_with("Updated garden entry with ID: 4"));
        assert!(output.contains("- Status: planned → planted"));
        assert!(output.contains("➤ Planted"));
    }

    #[test]
    fn test_delete_result() {
        let entry = GardenEntry::planned(2, &CropInfo::named("Dill"), date(2024, 4, 1));
        assert_eq!(
            DeleteResult::new(entry).to_string(),
            "Removed 'Dill' (ID: 2) from your garden\n"
        );
    }
}
