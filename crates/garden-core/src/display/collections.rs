//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items in order and prints a fixed message when
//! the collection is empty.

use std::fmt;

use crate::models::{CropInfo, DailyWeather, GardenEntry};

/// Newtype wrapper for displaying a list of crops.
///
/// # Examples
///
/// ```rust
/// use garden_core::{display::Crops, models::CropInfo};
///
/// let crops = Crops(vec![CropInfo::named("Tomato")]);
/// assert!(crops.to_string().contains("## Tomato"));
/// assert_eq!(Crops(vec![]).to_string(), "No crops match the current filters.\n");
/// ```
pub struct Crops(pub Vec<CropInfo>);

impl Crops {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of crops in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Crops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No crops match the current filters.");
        }
        for crop in &self.0 {
            write!(f, "{crop}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a forecast, one line per day.
pub struct Forecast(pub Vec<DailyWeather>);

impl Forecast {
    /// Check if the forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No forecast available.");
        }
        for day in &self.0 {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the garden list.
pub struct GardenEntries(pub Vec<GardenEntry>);

impl GardenEntries {
    /// Check if the garden is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the garden.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, GardenEntry> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a GardenEntries {
    type Item = &'a GardenEntry;
    type IntoIter = std::slice::Iter<'a, GardenEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for GardenEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(
                f,
                "Your garden is empty. Add crops from the planting calendar to get started."
            );
        }
        for entry in &self.0 {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
