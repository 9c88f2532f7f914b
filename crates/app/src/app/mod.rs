use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::services::AppServices;
use ctc_core::Weekday;
use ctc_db::Db;

/// Paths needed to run the local tracker.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
}

/// Application state shared by frontend backends (HTTP, CLI).
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: AppServices,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        let config = AppConfig { db_path };
        let services = AppServices::new(&config);
        Self { config, services }
    }

    pub fn is_fresh_db(&self) -> bool {
        !self.config.db_path.exists()
    }

    pub fn setup_db(&self) -> Result<()> {
        setup_db(&self.config.db_path)
    }

    /// Migrates the database and, for a brand-new one, seeds the week start.
    pub fn initialize(&self, default_week_start: Weekday) -> Result<()> {
        let is_fresh_db = self.is_fresh_db();
        self.setup_db()?;
        if is_fresh_db {
            self.services.settings.update(Some(default_week_start))?;
            tracing::info!(db = %self.config.db_path.display(), "created database");
        }
        Ok(())
    }
}

fn setup_db(path: &Path) -> Result<()> {
    let mut db = Db::open(path)?;
    db.migrate()?;
    Ok(())
}
