mod common;

use std::sync::Arc;

use common::{
    create_persistent_planner, create_test_planner, crops_envelope, mild_week, reopen_planner,
    FakeTransport,
};
use garden_core::{
    models::{ActiveView, CropCategory, GardenStatus},
    params::BrowseCrops,
    AddToGarden, GardenError, LoadOutcome,
};
use serde_json::json;

#[tokio::test]
async fn test_invalid_region_rejected_without_network() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato"]));
    let planner = create_test_planner(transport.clone()).await;

    for input in ["1234", "12a45", "", "123456", " 12345"] {
        let err = planner.load_region_data(input).await.unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { .. }));
        assert_eq!(
            planner.snapshot().error.as_deref(),
            Some("Please enter a valid 5-digit ZIP code")
        );
    }
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_weather_failure_keeps_new_crops() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond("planting-data/30301", crops_envelope(&["Okra", "Pepper"]));
    transport.respond(
        "weather/30301",
        json!({"success": false, "error": "Weather service unavailable"}),
    );
    let planner = create_test_planner(transport.clone()).await;

    let err = planner.load_region_data("30301").await.unwrap_err();
    assert_eq!(err.to_string(), "Weather service unavailable");

    let state = planner.snapshot();
    assert_eq!(state.crops.len(), 2);
    assert!(state.forecast.is_empty());
    assert_eq!(state.error.as_deref(), Some("Weather service unavailable"));
    assert_eq!(state.active_view, ActiveView::Plan);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_failure_without_server_message_uses_fallback() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond("planting-data/30301", json!({"success": false}));
    let planner = create_test_planner(transport).await;

    let err = planner.load_region_data("30301").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch planting data");
}

#[tokio::test]
async fn test_loading_flag_tracks_load() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato"]));
    let gate = transport.gate("weather/12345");
    let planner = Arc::new(create_test_planner(transport.clone()).await);
    let mut changes = planner.subscribe();

    let task = {
        let planner = planner.clone();
        tokio::spawn(async move { planner.load_region_data("12345").await })
    };

    changes
        .wait_for(|state| state.loading)
        .await
        .expect("planner dropped");
    gate.notify_one();

    let outcome = task.await.unwrap().unwrap();
    assert_eq!(
        outcome,
        LoadOutcome::Loaded {
            crops: 1,
            forecast_days: 7
        }
    );
    let state = planner.snapshot();
    assert!(!state.loading);
    assert_eq!(state.active_view, ActiveView::Weather);
}

#[tokio::test]
async fn test_newer_load_supersedes_older() {
    let transport = Arc::new(FakeTransport::with_region("11111", &["Carrot"]));
    transport.add_region("22222", &["Lettuce", "Broccoli"]);
    let gate = transport.gate("planting-data/11111");
    let planner = Arc::new(create_test_planner(transport.clone()).await);
    let mut changes = planner.subscribe();

    let older = {
        let planner = planner.clone();
        tokio::spawn(async move { planner.load_region_data("11111").await })
    };
    changes
        .wait_for(|state| state.loading)
        .await
        .expect("planner dropped");

    let newer = planner.load_region_data("22222").await.unwrap();
    assert!(matches!(newer, LoadOutcome::Loaded { crops: 2, .. }));

    gate.notify_one();
    assert_eq!(older.await.unwrap().unwrap(), LoadOutcome::Superseded);

    let state = planner.snapshot();
    let names: Vec<_> = state.crops.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Lettuce", "Broccoli"]);
    assert_eq!(state.region_input, "22222");
    assert!(!state.loading);
    assert!(state.error.is_none());
    // The superseded load never asked for its weather
    assert!(!transport.calls().contains(&"weather/11111".to_string()));
}

#[tokio::test]
async fn test_filtering_by_query_and_category() {
    let transport = Arc::new(FakeTransport::with_region(
        "12345",
        &["Tomato", "Potato", "Cherry Tomato", "Basil", "Strawberry"],
    ));
    let planner = create_test_planner(transport).await;
    planner.load_region_data("12345").await.unwrap();

    planner.set_search_query("tom");
    let names: Vec<String> = planner
        .snapshot()
        .filtered_crops()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(names, vec!["Tomato", "Cherry Tomato"]);

    let vegetables = planner.browse_crops(&BrowseCrops {
        query: String::new(),
        category: CropCategory::Vegetables,
    });
    let names: Vec<_> = vegetables.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Tomato", "Cherry Tomato"]);

    planner.set_category(CropCategory::Fruits);
    assert_eq!(planner.snapshot().filtered_crops().count(), 1);
}

#[tokio::test]
async fn test_add_without_selection_leaves_garden_unchanged() {
    let planner = create_test_planner(Arc::new(FakeTransport::default())).await;

    let err = planner.add_to_garden("2024-05-01").await.unwrap_err();
    assert!(matches!(err, GardenError::NoSelection));
    assert_eq!(err.to_string(), "Please select a crop first");
    assert!(planner.snapshot().garden.is_empty());
}

#[tokio::test]
async fn test_same_crop_twice_gets_distinct_ids() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato"]));
    let planner = create_test_planner(transport).await;
    planner.load_region_data("12345").await.unwrap();

    let first = planner
        .add_crop(&AddToGarden {
            crop: "Tomato".to_string(),
            planting_date: "2024-05-01".to_string(),
        })
        .await
        .unwrap();
    let second = planner
        .add_crop(&AddToGarden {
            crop: "Tomato".to_string(),
            planting_date: "2024-06-01".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(planner.snapshot().garden, vec![first, second]);
}

#[tokio::test]
async fn test_update_status_changes_only_that_entry() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato", "Basil"]));
    let planner = create_test_planner(transport).await;
    planner.load_region_data("12345").await.unwrap();
    for name in ["Tomato", "Basil"] {
        planner.select_crop_by_name(name).unwrap();
        planner.add_to_garden("2024-05-01").await.unwrap();
    }

    let before = planner.garden_summary();
    let original = planner.snapshot().garden;
    let updated = planner
        .update_status(original[0].id, GardenStatus::Harvested)
        .await
        .unwrap()
        .expect("entry exists");

    let after = planner.garden_summary();
    assert_eq!(after.harvested, before.harvested + 1);
    assert_eq!(after.total, before.total);

    let garden = planner.snapshot().garden;
    assert_eq!(garden[0], updated);
    assert_eq!(garden[0].crop, original[0].crop);
    assert_eq!(garden[0].planting_date, original[0].planting_date);
    assert_eq!(garden[1], original[1]);
}

#[tokio::test]
async fn test_remove_unknown_id_is_noop() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato"]));
    let planner = create_test_planner(transport).await;
    planner.load_region_data("12345").await.unwrap();
    planner.select_crop_by_name("Tomato").unwrap();
    planner.add_to_garden("2024-05-01").await.unwrap();

    let before = planner.snapshot().garden;
    assert!(!planner.remove_from_garden(999).await.unwrap());
    assert_eq!(planner.snapshot().garden, before);

    assert!(planner.remove_from_garden(before[0].id).await.unwrap());
    assert!(!planner.remove_from_garden(before[0].id).await.unwrap());
    assert!(planner.snapshot().garden.is_empty());
}

#[tokio::test]
async fn test_subscribers_see_each_mutation() {
    let planner = create_test_planner(Arc::new(FakeTransport::default())).await;
    let mut changes = planner.subscribe();
    changes.mark_unchanged();

    planner.set_search_query("mint");
    assert!(changes.has_changed().unwrap());
    assert_eq!(changes.borrow_and_update().search_query, "mint");

    planner.set_active_view(ActiveView::Garden);
    assert!(changes.has_changed().unwrap());
    assert_eq!(changes.borrow_and_update().active_view, ActiveView::Garden);

    // Removing a missing entry changes nothing
    planner.remove_from_garden(7).await.unwrap();
    assert!(!changes.has_changed().unwrap());
}

#[tokio::test]
async fn test_json_export_import_round_trip() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato", "Dill", "Mint"]));
    let planner = create_test_planner(transport.clone()).await;
    planner.load_region_data("12345").await.unwrap();
    for (name, date) in [("Mint", "2024-04-10"), ("Tomato", "2024-05-01"), ("Dill", "2024-05-20")] {
        planner.select_crop_by_name(name).unwrap();
        planner.add_to_garden(date).await.unwrap();
    }
    planner.advance_status(2).await.unwrap();
    let original = planner.snapshot().garden;
    let json = planner.export_garden_json().unwrap();

    let (_temp_dir, restored) = create_persistent_planner(transport).await;
    assert_eq!(restored.import_garden_json(&json).await.unwrap(), 3);
    assert_eq!(restored.snapshot().garden, original);
    assert_eq!(restored.export_garden_json().unwrap(), json);
}

#[tokio::test]
async fn test_persisted_garden_continues_ids() {
    let transport = Arc::new(FakeTransport::with_region("12345", &["Tomato", "Basil"]));
    let (temp_dir, planner) = create_persistent_planner(transport.clone()).await;
    planner.load_region_data("12345").await.unwrap();
    for name in ["Tomato", "Basil", "Tomato"] {
        planner.select_crop_by_name(name).unwrap();
        planner.add_to_garden("2024-05-01").await.unwrap();
    }
    planner.remove_from_garden(3).await.unwrap();
    planner.update_status(2, GardenStatus::Planted).await.unwrap();
    let saved = planner.snapshot().garden;
    drop(planner);

    let reopened = reopen_planner(transport, &temp_dir).await;
    assert_eq!(reopened.snapshot().garden, saved);

    reopened.load_region_data("12345").await.unwrap();
    reopened.select_crop_by_name("Basil").unwrap();
    let entry = reopened.add_to_garden("2024-06-01").await.unwrap();
    assert_eq!(entry.id, 3);
}

#[tokio::test]
async fn test_watering_and_insights_from_state() {
    let transport = Arc::new(FakeTransport::default());
    transport.respond("planting-data/12345", crops_envelope(&["Tomato"]));
    transport.respond("weather/12345", mild_week());
    let planner = create_test_planner(transport).await;

    assert!(!planner.snapshot().should_water_today());
    assert!(planner.snapshot().weather_insights().is_none());

    planner.load_region_data("12345").await.unwrap();
    let state = planner.snapshot();
    // 1 mm today and tomorrow on a 70°F partly cloudy day
    assert!(state.should_water_today());
    let insights = state.weather_insights().expect("forecast loaded");
    assert!(insights.low_rainfall);
    assert!(!insights.storm_alert);
}
