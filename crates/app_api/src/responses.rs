use ctc_core::{Report, StoredRecord, WindowFilter};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<StoredRecord>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub window: WindowFilter,
    pub now: String,
    pub week_start: String,
    pub flagged: usize,
    #[serde(flatten)]
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub week_start: String,
    pub db_path: String,
    pub app_data_dir: String,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}
