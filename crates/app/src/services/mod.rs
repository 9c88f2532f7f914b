mod records;
mod reports;
mod settings;

use std::sync::Arc;

use crate::app::AppConfig;
use crate::error::{AppError, Result};
use ctc_db::Db;

pub use records::RecordsService;
pub use reports::{OwnerReport, ReportsService};
pub use settings::{SettingsService, SettingsSnapshot};

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub records: RecordsService,
    pub reports: ReportsService,
    pub settings: SettingsService,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            records: RecordsService::new(shared.clone()),
            reports: ReportsService::new(shared.clone()),
            settings: SettingsService::new(shared),
        }
    }
}

fn open_db(config: &SharedConfig) -> Result<Db> {
    Ok(Db::open(&config.db_path)?)
}

/// Owner ids come from the identity provider; the app only checks presence.
fn require_owner(owner_id: &str) -> Result<&str> {
    let trimmed = owner_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput("owner id is required".to_string()));
    }
    Ok(trimmed)
}
