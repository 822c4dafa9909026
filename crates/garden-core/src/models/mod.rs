//! Data models for the garden planner.
//!
//! This module contains the domain models the planner works with. Two kinds of
//! data live here:
//!
//! - **Reference data** fetched per region and replaced wholesale on every
//!   successful load: [`CropInfo`] rows from the planting calendar and
//!   [`DailyWeather`] rows from the forecast.
//! - **Owned data** created by the user: [`GardenEntry`] values with a
//!   [`GardenStatus`] lifecycle.
//!
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data and presentation apart.
//!
//! # Wire Formats
//!
//! Crop rows use the planting calendar's column headers as keys (`"Crop"`,
//! `"Start Seeds Indoors"`, `"Plant Seedlings"`, `"Direct Sow/Plant"`).
//! Forecast rows use `temp_max`, `temp_min`, `precipitation`, `condition`,
//! `icon` and `water_needed`. Garden entries serialize as
//! `{id, crop, planting_date, planting_info, status}`.
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{CropInfo, GardenEntry, GardenStatus, GardenSummary};
//! use jiff::civil::date;
//!
//! let tomato = CropInfo {
//!     name: "Tomato".to_string(),
//!     indoor_start: Some("Mar 1-15".to_string()),
//!     seedling_transplant: None,
//!     direct_sow: None,
//! };
//! let entry = GardenEntry::planned(1, &tomato, date(2024, 5, 1));
//! assert_eq!(entry.status, GardenStatus::Planned);
//! assert_eq!(entry.planting_info.indoor_start.as_deref(), Some("Mar 1-15"));
//!
//! let summary = GardenSummary::from_entries(&[entry]);
//! assert_eq!(summary.total, 1);
//! ```

pub mod crop;
pub mod filters;
pub mod garden;
pub mod region;
pub mod status;
pub mod summary;
pub mod view;
pub mod weather;


pub use crop::CropInfo;
pub use filters::{filter_crops, CropCategory};
pub use garden::{GardenEntry, PlantingInfo};
pub use region::RegionCode;
pub use status::GardenStatus;
pub use summary::GardenSummary;
pub use view::ActiveView;
pub use weather::DailyWeather;
