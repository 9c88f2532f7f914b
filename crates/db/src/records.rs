use chrono::{SecondsFormat, Utc};
use ctc_core::{ProductionRecord, StoredRecord};
use rusqlite::{OptionalExtension, params};

use crate::Db;
use crate::error::{DbError, Result};
use crate::helpers::{RECORD_COLUMNS, row_to_stored_record};

impl Db {
    pub fn insert_record(&self, owner_id: &str, record: &ProductionRecord) -> Result<StoredRecord> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.conn.execute(
            r#"
            INSERT INTO production_record (
              owner_id, date, input_kg, tea_made_gl, tea_made_ors, ctc_hours,
              dryer_hours, heater_hours, coal_kg, electricity_units, mandays, created_at
            ) VALUES (
              ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12
            )
            "#,
            params![
                owner_id,
                record.date,
                record.input_kg,
                record.tea_made_gl,
                record.tea_made_ors,
                record.ctc_hours,
                record.dryer_hours,
                record.heater_hours,
                record.coal_kg,
                record.electricity_units,
                record.mandays,
                created_at,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, owner_id, date = %record.date, "inserted production record");
        self.get_record(owner_id, id)?
            .ok_or(DbError::RecordNotFound(id))
    }

    /// All records of one owner in insertion order.
    pub fn list_records_by_owner(&self, owner_id: &str) -> Result<Vec<StoredRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM production_record WHERE owner_id = ?1 ORDER BY id ASC"
        ))?;
        let rows = stmt
            .query_map(params![owner_id], row_to_stored_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get_record(&self, owner_id: &str, id: i64) -> Result<Option<StoredRecord>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {RECORD_COLUMNS} FROM production_record WHERE owner_id = ?1 AND id = ?2"
                ),
                params![owner_id, id],
                row_to_stored_record,
            )
            .optional()
            .map_err(DbError::from)
    }

    /// Deletes a record only when it belongs to `owner_id`.
    pub fn delete_record(&self, owner_id: &str, id: i64) -> Result<bool> {
        let deleted = self.conn.execute(
            "DELETE FROM production_record WHERE owner_id = ?1 AND id = ?2",
            params![owner_id, id],
        )?;
        Ok(deleted > 0)
    }
}
