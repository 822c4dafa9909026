use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use garden_core::{
    api::{Method, Transport},
    GardenPlanner, PlannerBuilder,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::sync::Notify;

/// In-memory stand-in for the planting API.
///
/// Unknown endpoints answer with a failure envelope. A gated endpoint waits
/// for its `Notify` before answering.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<String, Value>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<(Method, String)>>,
}

impl FakeTransport {
    pub fn respond(&self, endpoint: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), body);
    }

    pub fn gate(&self, endpoint: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, endpoint)| endpoint.clone())
            .collect()
    }

    pub fn with_region(region: &str, crops: &[&str]) -> Self {
        let transport = Self::default();
        transport.add_region(region, crops);
        transport
    }

    pub fn add_region(&self, region: &str, crops: &[&str]) {
        self.respond(&format!("planting-data/{region}"), crops_envelope(crops));
        self.respond(&format!("weather/{region}"), mild_week());
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn call(
        &self,
        endpoint: &str,
        method: Method,
        _body: Option<Value>,
    ) -> garden_core::Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method, endpoint.to_string()));

        let gate = self.gates.lock().unwrap().get(endpoint).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| json!({"success": false, "error": format!("No route for {endpoint}")})))
    }
}

pub fn crops_envelope(names: &[&str]) -> Value {
    let rows: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "Crop": name,
                "Start Seeds Indoors": "Mar 1-15",
                "Plant Seedlings": "Apr 15-30",
                "Direct Sow/Plant": null
            })
        })
        .collect();
    json!({"success": true, "data": rows})
}

pub fn mild_week() -> Value {
    let days: Vec<Value> = (1..=7)
        .map(|day| {
            json!({
                "date": format!("2024-05-{day:02}"),
                "temp_max": 70.0,
                "temp_min": 52.0,
                "precipitation": 1.0,
                "condition": "Partly cloudy",
                "water_needed": "No",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png"
            })
        })
        .collect();
    json!({"success": true, "data": days})
}

/// Helper function to create a test planner without persistence
pub async fn create_test_planner(transport: Arc<FakeTransport>) -> GardenPlanner {
    PlannerBuilder::new()
        .with_transport(transport)
        .build()
        .await
        .expect("Failed to create planner")
}

/// Helper function to create a test planner backed by a database file
pub async fn create_persistent_planner(
    transport: Arc<FakeTransport>,
) -> (TempDir, GardenPlanner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = reopen_planner(transport, &temp_dir).await;
    (temp_dir, planner)
}

pub async fn reopen_planner(transport: Arc<FakeTransport>, temp_dir: &TempDir) -> GardenPlanner {
    PlannerBuilder::new()
        .with_transport(transport)
        .with_database_path(Some(temp_dir.path().join("garden.db")))
        .build()
        .await
        .expect("Failed to create planner")
}
