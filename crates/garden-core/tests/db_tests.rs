use garden_core::{
    models::{CropInfo, GardenEntry, GardenStatus},
    Database, GardenError,
};
use jiff::civil::date;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn entry(id: u64, name: &str) -> GardenEntry {
    let crop = CropInfo {
        indoor_start: Some("Feb 15-28".to_string()),
        direct_sow: Some("Apr 1-15".to_string()),
        ..CropInfo::named(name)
    };
    GardenEntry::planned(id, &crop, date(2024, 4, id as i8))
}

#[test]
fn test_empty_database() {
    let (_temp_file, db) = create_test_db();

    assert!(db.list_entries().expect("Failed to list").is_empty());
    assert_eq!(db.max_entry_id().expect("Failed to read max id"), 0);
}

#[test]
fn test_insert_and_list_in_id_order() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_entry(&entry(2, "Lettuce")).expect("Failed to insert");
    db.insert_entry(&entry(1, "Carrot")).expect("Failed to insert");

    let entries = db.list_entries().expect("Failed to list");
    assert_eq!(entries, vec![entry(1, "Carrot"), entry(2, "Lettuce")]);
    assert_eq!(entries[0].planting_info.seedlings, None);
    assert_eq!(db.max_entry_id().expect("Failed to read max id"), 2);
}

#[test]
fn test_duplicate_id_is_rejected() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_entry(&entry(1, "Carrot")).expect("Failed to insert");
    let err = db.insert_entry(&entry(1, "Dill")).unwrap_err();
    assert!(matches!(err, GardenError::Database { .. }));
}

#[test]
fn test_update_status() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_entry(&entry(1, "Carrot")).expect("Failed to insert");

    assert!(db
        .update_entry_status(1, GardenStatus::Harvested)
        .expect("Failed to update"));
    assert!(!db
        .update_entry_status(5, GardenStatus::Planted)
        .expect("Failed to update"));

    let entries = db.list_entries().expect("Failed to list");
    assert_eq!(entries[0].status, GardenStatus::Harvested);
}

#[test]
fn test_remove_entry() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_entry(&entry(1, "Carrot")).expect("Failed to insert");

    assert!(db.remove_entry(1).expect("Failed to remove"));
    assert!(!db.remove_entry(1).expect("Failed to remove"));
    assert!(db.list_entries().expect("Failed to list").is_empty());
}

#[test]
fn test_replace_entries() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_entry(&entry(1, "Carrot")).expect("Failed to insert");

    let replacement = vec![entry(9, "Mint"), entry(4, "Thyme")];
    db.replace_entries(&replacement).expect("Failed to replace");

    let entries = db.list_entries().expect("Failed to list");
    assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![4, 9]);
    assert_eq!(db.max_entry_id().expect("Failed to read max id"), 9);
}

#[test]
fn test_schema_survives_reopen() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let mut db = Database::new(temp_file.path()).expect("Failed to create test database");
        db.insert_entry(&entry(3, "Basil")).expect("Failed to insert");
    }

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_entries().expect("Failed to list"), vec![entry(3, "Basil")]);
}
