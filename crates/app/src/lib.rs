pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod startup;
pub mod util;

pub use app::{AppConfig, AppState};
pub use config::ReportParams;
pub use error::{ApiError, AppError, Result};
pub use logging::LoggingConfig;
pub use services::{AppServices, OwnerReport, SettingsSnapshot};
pub use startup::{AppPaths, DB_FILE_NAME, ensure_app_data_dir};
pub use util::time::{
    ReportWindow, parse_week_start_input, parse_window, resolve_now, resolve_report_window,
};
