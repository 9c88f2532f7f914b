use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(#[from] ctc_db::DbError),
    #[error("{0}")]
    Record(#[from] ctc_core::CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err {
            AppError::InvalidInput(_) => (400, Some("invalid_input".to_string())),
            AppError::Record(_) => (400, Some("invalid_record".to_string())),
            AppError::NotFound(_) => (404, Some("not_found".to_string())),
            AppError::Db(_) | AppError::Io(_) => (500, None),
        };
        Self {
            status,
            message: err.to_string(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctc_core::{CoreError, RecordField};

    #[test]
    fn record_errors_map_to_bad_request() {
        let api = ApiError::from(AppError::Record(CoreError::InvalidRecordField(
            RecordField::CoalKg,
        )));
        assert_eq!(api.status, 400);
        assert_eq!(api.code.as_deref(), Some("invalid_record"));
        assert_eq!(api.message, "invalid record field: coalKg");
    }

    #[test]
    fn not_found_maps_to_404() {
        let api = ApiError::from(AppError::NotFound("record 7 not found".to_string()));
        assert_eq!(api.status, 404);
        assert_eq!(api.code.as_deref(), Some("not_found"));
    }
}
