//! Integration tests comparing CLI output with the core Display
//! implementations it renders.

use std::{path::Path, process::Command};

use garden_core::{display::GardenEntries, GardenPlanner, PlannerBuilder};
use tempfile::TempDir;

const GARDEN: &str = r#"[
  {"id": 2, "crop": "Carrot", "planting_date": "2024-04-01", "status": "harvested"},
  {"id": 5, "crop": "Dill", "planting_date": "2024-04-15",
   "planting_info": {"indoor_start": null, "seedlings": null, "direct_sow": "Apr 1-30"}}
]"#;

/// Helper function to create a planner over a temporary database
async fn create_test_planner(temp_dir: &TempDir) -> GardenPlanner {
    PlannerBuilder::new()
        .with_api_url("http://127.0.0.1:9/api")
        .with_database_path(Some(temp_dir.path().join("garden.db")))
        .build()
        .await
        .expect("Failed to create planner")
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &Path, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_garden"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_list_matches_core_display() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let planner = create_test_planner(&temp_dir).await;
    planner
        .import_garden_json(GARDEN)
        .await
        .expect("Failed to import garden");

    let state = planner.snapshot();
    let expected = format!(
        "# My Garden\n\n{}\n{}",
        state.garden_summary(),
        GardenEntries(state.garden.clone())
    );

    let output = run_cli_command(&temp_dir.path().join("garden.db"), &["list"]);
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_cli_changes_visible_to_core() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("garden.db");
    create_test_planner(&temp_dir)
        .await
        .import_garden_json(GARDEN)
        .await
        .expect("Failed to import garden");

    run_cli_command(&db_path, &["advance", "5"]);
    run_cli_command(&db_path, &["remove", "2"]);

    let planner = create_test_planner(&temp_dir).await;
    let summary = planner.garden_summary();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.planted, 1);
}
