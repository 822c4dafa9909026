//! Command handlers bridging parsed arguments to the planner.

use std::{fmt::Write as _, fs};

use anyhow::{Context, Result};
use garden_core::{
    advice::tip_for_day,
    display::{
        CreateResult, Crops, DeleteResult, Forecast, GardenEntries, OperationStatus, UpdateResult,
    },
    models::CropCategory,
    params::{AddToGarden, BrowseCrops, Id, UpdateStatus},
    GardenPlanner,
};
use log::info;

use crate::{
    args::{AddArgs, CropsArgs, ExportArgs, IdArgs, ImportArgs, RegionArgs, StatusArgs},
    renderer::TerminalRenderer,
};

/// Runs one command against a planner and renders the outcome.
pub struct Cli {
    planner: GardenPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: GardenPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    async fn load_region(&self, region: &str) -> Result<()> {
        self.planner
            .load_region_data(region)
            .await
            .with_context(|| format!("Failed to load data for region '{region}'"))?;
        Ok(())
    }

    pub async fn crops(&self, args: &CropsArgs) -> Result<()> {
        self.load_region(&args.region).await?;
        let params = BrowseCrops::from(args);
        let crops = Crops(self.planner.browse_crops(&params));

        let mut output = format!("# Planting Calendar for {}\n\n", args.region);
        if params.category != CropCategory::All || !params.query.is_empty() {
            write!(output, "*{}", params.category)?;
            if !params.query.is_empty() {
                write!(output, " matching \"{}\"", params.query)?;
            }
            writeln!(output, ": {} crops*\n", crops.len())?;
        }
        write!(output, "{crops}")?;
        self.renderer.render(&output)
    }

    pub async fn weather(&self, args: &RegionArgs) -> Result<()> {
        self.load_region(&args.region).await?;
        let state = self.planner.snapshot();

        let mut output = format!("# 7-Day Weather Forecast for {}\n\n", args.region);
        if state.should_water_today() {
            writeln!(output, "## Watering Recommended Today\n")?;
            writeln!(
                output,
                "Your plants could use some water based on the current weather conditions.\n"
            )?;
        }
        write!(output, "{}", Forecast(state.forecast.clone()))?;
        if let Some(insights) = state.weather_insights() {
            write!(output, "\n{insights}")?;
        }
        self.renderer.render(&output)
    }

    pub async fn add(&self, args: &AddArgs) -> Result<()> {
        self.load_region(&args.region).await?;
        let entry = self
            .planner
            .add_crop(&AddToGarden::from(args))
            .await
            .context("Failed to add crop to garden")?;
        info!("Added garden entry {}", entry.id);
        self.renderer.render(&CreateResult::new(entry).to_string())
    }

    pub fn list(&self) -> Result<()> {
        let state = self.planner.snapshot();
        let mut output = String::from("# My Garden\n\n");
        if !state.garden.is_empty() {
            writeln!(output, "{}", state.garden_summary())?;
        }
        write!(output, "{}", GardenEntries(state.garden))?;
        self.renderer.render(&output)
    }

    pub async fn status(&self, args: StatusArgs) -> Result<()> {
        let UpdateStatus { id, status } = args.into();
        let previous = self.planner.snapshot().entry(id).map(|entry| entry.status);

        match self.planner.update_status(id, status).await? {
            Some(entry) => {
                let changes = previous
                    .filter(|old| *old != status)
                    .map(|old| vec![format!("Status: {old} → {status}")])
                    .unwrap_or_default();
                self.renderer
                    .render(&UpdateResult::with_changes(entry, changes).to_string())
            }
            None => self.render_missing(id),
        }
    }

    pub async fn advance(&self, args: IdArgs) -> Result<()> {
        let Id { id } = args.into();
        let previous = self.planner.snapshot().entry(id).map(|entry| entry.status);

        match self.planner.advance_status(id).await? {
            Some(entry) if previous == Some(entry.status) => self.renderer.render(
                &OperationStatus::success(format!(
                    "{} (ID: {}) is already {}",
                    entry.crop, entry.id, entry.status
                ))
                .to_string(),
            ),
            Some(entry) => {
                let changes = previous
                    .map(|old| vec![format!("Status: {old} → {}", entry.status)])
                    .unwrap_or_default();
                self.renderer
                    .render(&UpdateResult::with_changes(entry, changes).to_string())
            }
            None => self.render_missing(id),
        }
    }

    pub async fn remove(&self, args: IdArgs) -> Result<()> {
        let Id { id } = args.into();
        let Some(entry) = self.planner.snapshot().entry(id).cloned() else {
            return self.render_missing(id);
        };

        if self.planner.remove_from_garden(id).await? {
            self.renderer.render(&DeleteResult::new(entry).to_string())
        } else {
            self.render_missing(id)
        }
    }

    pub fn export(&self, args: ExportArgs) -> Result<()> {
        let json = self
            .planner
            .export_garden_json()
            .context("Failed to serialize garden")?;

        match args.output {
            Some(path) => {
                fs::write(&path, format!("{json}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Exported {} garden entries to {}",
                        self.planner.snapshot().garden.len(),
                        path.display()
                    ))
                    .to_string(),
                )
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }

    pub async fn import(&self, args: &ImportArgs) -> Result<()> {
        let json = fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read {}", args.file.display()))?;
        let count = self
            .planner
            .import_garden_json(&json)
            .await
            .with_context(|| format!("Failed to import {}", args.file.display()))?;
        self.renderer.render(
            &OperationStatus::success(format!("Imported {count} garden entries")).to_string(),
        )
    }

    pub fn tip(&self) -> Result<()> {
        let day = jiff::Zoned::now().day_of_year();
        let tip = tip_for_day(u32::try_from(day).unwrap_or_default());
        self.renderer.render(&format!("## Gardening Tip\n\n{tip}\n"))
    }

    fn render_missing(&self, id: u64) -> Result<()> {
        self.renderer.render(
            &OperationStatus::failure(format!("No garden entry with ID {id}")).to_string(),
        )
    }
}
