use crate::record::RecordField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("invalid record field: {0}")]
    InvalidRecordField(RecordField),
    #[error("{0} must not be negative")]
    NegativeField(RecordField),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
