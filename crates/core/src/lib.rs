mod error;
pub mod metric_value;
mod metrics;
mod record;
mod report;
mod window;

pub use error::{CoreError, Result};
pub use metrics::{
    DerivedMetrics, coal_ratio, derive_metrics, electric_ratio, recovery_gl, recovery_ors, round2,
    total_hours,
};
pub use record::{DATE_FORMAT, ProductionRecord, RecordField, RecordForm, StoredRecord};
pub use report::{ChartPoint, Report, ReportAggregator, ReportRow, RowMetrics, aggregate};
pub use window::{
    CalendarPolicy, ParseWindowError, WindowFilter, parse_record_date, parse_week_start,
    week_start_name,
};

pub use chrono::Weekday;
