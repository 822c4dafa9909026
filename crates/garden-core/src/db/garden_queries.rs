//! Garden entry CRUD operations.

use jiff::civil::Date;
use rusqlite::{params, types::Type, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{GardenEntry, GardenStatus, PlantingInfo},
};

const INSERT_ENTRY_SQL: &str = "INSERT INTO garden_entries (id, crop, planting_date, indoor_start, seedlings, direct_sow, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_ENTRIES_SQL: &str = "SELECT id, crop, planting_date, indoor_start, seedlings, direct_sow, status FROM garden_entries ORDER BY id";
const UPDATE_STATUS_SQL: &str = "UPDATE garden_entries SET status = ?1 WHERE id = ?2";
const DELETE_ENTRY_SQL: &str = "DELETE FROM garden_entries WHERE id = ?1";
const DELETE_ALL_SQL: &str = "DELETE FROM garden_entries";
const MAX_ID_SQL: &str = "SELECT COALESCE(MAX(id), 0) FROM garden_entries";

impl super::Database {
    /// Helper function to construct a GardenEntry from a database row
    fn build_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<GardenEntry> {
        let date_str: String = row.get(2)?;
        let planting_date = date_str
            .parse::<Date>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        let status_str: String = row.get(6)?;
        let status = status_str.parse::<GardenStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                6,
                Type::Text,
                format!("Invalid status: {status_str}").into(),
            )
        })?;

        Ok(GardenEntry {
            id: row.get::<_, i64>(0)? as u64,
            crop: row.get(1)?,
            planting_date,
            planting_info: PlantingInfo {
                indoor_start: row.get(3)?,
                seedlings: row.get(4)?,
                direct_sow: row.get(5)?,
            },
            status,
        })
    }

    /// Returns every stored entry in creation (id) order.
    pub fn list_entries(&self) -> Result<Vec<GardenEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ENTRIES_SQL)
            .db_context("Failed to prepare garden query")?;

        let entries = stmt
            .query_map([], Self::build_entry_from_row)
            .db_context("Failed to query garden entries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read garden entries")?;
        Ok(entries)
    }

    fn insert_row(connection: &Connection, entry: &GardenEntry) -> Result<()> {
        connection
            .execute(
                INSERT_ENTRY_SQL,
                params![
                    entry.id as i64,
                    entry.crop,
                    entry.planting_date.to_string(),
                    entry.planting_info.indoor_start,
                    entry.planting_info.seedlings,
                    entry.planting_info.direct_sow,
                    entry.status.as_str(),
                ],
            )
            .db_context("Failed to insert garden entry")?;
        Ok(())
    }

    /// Stores a new entry under its own id.
    pub fn insert_entry(&mut self, entry: &GardenEntry) -> Result<()> {
        Self::insert_row(&self.connection, entry)
    }

    /// Sets the status of an entry. Returns false if no such entry exists.
    pub fn update_entry_status(&mut self, id: u64, status: GardenStatus) -> Result<bool> {
        let changed = self
            .connection
            .execute(UPDATE_STATUS_SQL, params![status.as_str(), id as i64])
            .db_context("Failed to update garden entry status")?;
        Ok(changed > 0)
    }

    /// Deletes an entry. Returns false if no such entry exists.
    pub fn remove_entry(&mut self, id: u64) -> Result<bool> {
        let changed = self
            .connection
            .execute(DELETE_ENTRY_SQL, params![id as i64])
            .db_context("Failed to delete garden entry")?;
        Ok(changed > 0)
    }

    /// Replaces the whole garden with `entries` in one transaction.
    pub fn replace_entries(&mut self, entries: &[GardenEntry]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ALL_SQL, [])
            .db_context("Failed to clear garden entries")?;
        for entry in entries {
            Self::insert_row(&tx, entry)?;
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Highest stored id, or 0 for an empty garden.
    pub fn max_entry_id(&self) -> Result<u64> {
        let max: i64 = self
            .connection
            .query_row(MAX_ID_SQL, [], |row| row.get(0))
            .db_context("Failed to read highest garden entry id")?;
        Ok(max as u64)
    }
}
