//! Command-line interface definitions using clap
//!
//! Argument structs carry the clap derives and convert into the plain
//! parameter types from `garden_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → GardenPlanner
//! ```
//!
//! Core parameter types stay free of clap attributes, so help text, aliases
//! and value enums can change here without touching the core.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use garden_core::{
    models::{CropCategory, GardenStatus},
    params::{AddToGarden, BrowseCrops, Id, UpdateStatus},
};

/// Plan a vegetable garden from local planting calendars and weather
///
/// Looks up what to plant and when for a 5-digit ZIP code, shows the week's
/// forecast with watering advice, and keeps track of what you have planned,
/// planted and harvested.
#[derive(Parser)]
#[command(version, about, name = "garden")]
pub struct Args {
    /// Base URL of the planting API
    #[arg(
        long,
        global = true,
        env = "GARDEN_API_URL",
        default_value = garden_core::api::DEFAULT_API_URL
    )]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/garden/garden.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the garden CLI
///
/// Running without a command lists the garden.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the planting calendar for a region
    #[command(alias = "c")]
    Crops(CropsArgs),
    /// Show the forecast, watering advice and weekly insights for a region
    #[command(alias = "w")]
    Weather(RegionArgs),
    /// Add a crop from a region's planting calendar to the garden
    #[command(alias = "a")]
    Add(AddArgs),
    /// List garden entries with a status summary
    #[command(alias = "ls")]
    List,
    /// Set the status of a garden entry
    #[command(alias = "s")]
    Status(StatusArgs),
    /// Move a garden entry one step forward (planned → planted → harvested)
    Advance(IdArgs),
    /// Remove an entry from the garden
    #[command(alias = "rm")]
    Remove(IdArgs),
    /// Write the garden as JSON
    Export(ExportArgs),
    /// Replace the garden with entries from a JSON file
    Import(ImportArgs),
    /// Show a gardening tip
    Tip,
}

/// Show the planting calendar for a region
#[derive(ClapArgs)]
pub struct CropsArgs {
    #[arg(help = "5-digit ZIP code")]
    pub region: String,
    #[arg(short, long, help = "Only crops whose name contains this text")]
    pub search: Option<String>,
    #[arg(short, long, value_enum, default_value_t = CategoryArg::All)]
    pub category: CategoryArg,
}

impl From<&CropsArgs> for BrowseCrops {
    fn from(val: &CropsArgs) -> Self {
        BrowseCrops {
            query: val.search.clone().unwrap_or_default(),
            category: val.category.into(),
        }
    }
}

#[derive(ClapArgs)]
pub struct RegionArgs {
    #[arg(help = "5-digit ZIP code")]
    pub region: String,
}

/// Add a crop to the garden
///
/// Loads the region's planting calendar first so the crop's schedule can be
/// copied into the entry.
#[derive(ClapArgs)]
pub struct AddArgs {
    #[arg(help = "5-digit ZIP code")]
    pub region: String,
    #[arg(help = "Crop name as listed in the planting calendar")]
    pub crop: String,
    #[arg(help = "Planting date (YYYY-MM-DD)")]
    pub date: String,
}

impl From<&AddArgs> for AddToGarden {
    fn from(val: &AddArgs) -> Self {
        AddToGarden {
            crop: val.crop.clone(),
            planting_date: val.date.clone(),
        }
    }
}

#[derive(ClapArgs)]
pub struct StatusArgs {
    #[arg(help = "ID of the garden entry")]
    pub id: u64,
    #[arg(value_enum, help = "New status")]
    pub status: StatusArg,
}

impl From<StatusArgs> for UpdateStatus {
    fn from(val: StatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            status: val.status.into(),
        }
    }
}

#[derive(ClapArgs)]
pub struct IdArgs {
    #[arg(help = "ID of the garden entry")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs)]
pub struct ExportArgs {
    #[arg(short, long, help = "Write to this file instead of standard output")]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ImportArgs {
    #[arg(help = "JSON file produced by `garden export`")]
    pub file: PathBuf,
}

/// Command-line representation of garden entry statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    /// Not in the ground yet
    Planned,
    /// In the ground
    Planted,
    /// Done for the season
    Harvested,
}

impl From<StatusArg> for GardenStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Planned => GardenStatus::Planned,
            StatusArg::Planted => GardenStatus::Planted,
            StatusArg::Harvested => GardenStatus::Harvested,
        }
    }
}

/// Command-line representation of crop categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    All,
    Vegetables,
    Herbs,
    Fruits,
}

impl From<CategoryArg> for CropCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::All => CropCategory::All,
            CategoryArg::Vegetables => CropCategory::Vegetables,
            CategoryArg::Herbs => CropCategory::Herbs,
            CategoryArg::Fruits => CropCategory::Fruits,
        }
    }
}
