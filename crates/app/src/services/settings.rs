use crate::error::Result;
use crate::services::{SharedConfig, open_db};
use ctc_core::Weekday;
use ctc_db::Db;

/// Snapshot of user-configurable settings stored in the DB.
#[derive(Debug, Clone)]
pub struct SettingsSnapshot {
    pub week_start: Weekday,
}

#[derive(Clone)]
pub struct SettingsService {
    config: SharedConfig,
}

impl SettingsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    pub fn get(&self) -> Result<SettingsSnapshot> {
        let db = self.db()?;
        Ok(SettingsSnapshot {
            week_start: db.get_week_start()?,
        })
    }

    pub fn update(&self, week_start: Option<Weekday>) -> Result<()> {
        let db = self.db()?;
        if let Some(day) = week_start {
            db.set_week_start(day)?;
            tracing::info!(week_start = %day, "week start updated");
        }
        Ok(())
    }
}
