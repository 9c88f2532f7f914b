use ctc_core::RecordForm;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct EmptyRequest {}

#[derive(Debug, Deserialize)]
pub struct RecordsAddRequest {
    pub record: RecordForm,
}

#[derive(Debug, Deserialize)]
pub struct RecordsDeleteRequest {
    pub id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    pub window: Option<String>,
    pub now: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SettingsPutRequest {
    pub week_start: Option<String>,
}
