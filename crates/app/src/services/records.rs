use crate::error::{AppError, Result};
use crate::services::{SharedConfig, open_db, require_owner};
use ctc_core::{RecordForm, StoredRecord};
use ctc_db::Db;

#[derive(Clone)]
pub struct RecordsService {
    config: SharedConfig,
}

impl RecordsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    /// Validates a submitted form and persists it for `owner_id`.
    pub fn add(&self, owner_id: &str, form: &RecordForm) -> Result<StoredRecord> {
        let owner_id = require_owner(owner_id)?;
        let record = form.parse().inspect_err(|err| {
            tracing::warn!(owner_id, error = %err, "rejected record form");
        })?;
        let db = self.db()?;
        let stored = db.insert_record(owner_id, &record)?;
        tracing::info!(owner_id, id = stored.id, date = %stored.record.date, "record added");
        Ok(stored)
    }

    pub fn list(&self, owner_id: &str) -> Result<Vec<StoredRecord>> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        Ok(db.list_records_by_owner(owner_id)?)
    }

    pub fn delete(&self, owner_id: &str, id: i64) -> Result<()> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        if !db.delete_record(owner_id, id)? {
            return Err(AppError::NotFound(format!("record {} not found", id)));
        }
        tracing::info!(owner_id, id, "record deleted");
        Ok(())
    }
}
