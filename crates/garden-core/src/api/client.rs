//! Typed operations over a [`Transport`].

use std::sync::Arc;

use super::{envelope::decode, Method, Transport};
use crate::{
    error::Result,
    models::{CropInfo, DailyWeather, GardenEntry, RegionCode},
};

const PLANTING_FALLBACK: &str = "Failed to fetch planting data";
const WEATHER_FALLBACK: &str = "Failed to fetch weather data";
const ADD_GARDEN_FALLBACK: &str = "Failed to add crop to garden";

/// Client for the planting API.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Wrap a transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the planting calendar for a region.
    pub async fn fetch_planting_data(&self, region: &RegionCode) -> Result<Vec<CropInfo>> {
        let body = self
            .transport
            .call(&format!("planting-data/{region}"), Method::Get, None)
            .await?;
        decode(body, PLANTING_FALLBACK)
    }

    /// Fetch the daily forecast for a region.
    pub async fn fetch_weather(&self, region: &RegionCode) -> Result<Vec<DailyWeather>> {
        let body = self
            .transport
            .call(&format!("weather/{region}"), Method::Get, None)
            .await?;
        decode(body, WEATHER_FALLBACK)
    }

    /// Fetch the server-side garden list.
    ///
    /// A non-success envelope yields an empty list; transport failures are
    /// still reported.
    pub async fn fetch_garden(&self) -> Result<Vec<GardenEntry>> {
        let body = self.transport.call("garden", Method::Get, None).await?;
        Ok(decode(body, "").unwrap_or_else(|e| {
            log::warn!("Server garden unavailable: {e}");
            Vec::new()
        }))
    }

    /// Post one entry to the server-side garden list and return the server's
    /// `data` payload unchanged (the reference server echoes the whole list).
    pub async fn add_garden_entry(&self, entry: &GardenEntry) -> Result<serde_json::Value> {
        let payload = serde_json::to_value(entry)?;
        let body = self
            .transport
            .call("garden", Method::Post, Some(payload))
            .await?;
        decode(body, ADD_GARDEN_FALLBACK)
    }
}
