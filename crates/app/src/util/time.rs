use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};

use crate::config::ReportParams;
use crate::error::{AppError, Result};
use ctc_core::{DATE_FORMAT, WindowFilter, Weekday, parse_week_start};

/// Window plus the reference instant it is evaluated against.
#[derive(Clone, Debug)]
pub struct ReportWindow {
    pub window: WindowFilter,
    pub now: DateTime<FixedOffset>,
}

pub fn resolve_report_window(params: &ReportParams) -> Result<ReportWindow> {
    let window = parse_window(params.window.as_deref())?;
    let now = resolve_now(params.now.as_deref())?;
    Ok(ReportWindow { window, now })
}

pub fn parse_window(value: Option<&str>) -> Result<WindowFilter> {
    match value {
        None => Ok(WindowFilter::All),
        Some(value) => value
            .parse::<WindowFilter>()
            .map_err(|err| AppError::InvalidInput(err.to_string())),
    }
}

/// Reads the reference instant for a report.
///
/// RFC 3339 timestamps keep their own offset, so their calendar decides the
/// window. A bare `YYYY-MM-DD` is taken as local noon of that day. Without a
/// value the local clock is read here, never inside the core.
pub fn resolve_now(value: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(Local::now().fixed_offset());
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }
    let day = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|err| AppError::InvalidInput(format!("invalid reference time: {}", err)))?;
    let noon = day
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| AppError::InvalidInput("invalid local date".to_string()))?;
    Local
        .from_local_datetime(&noon)
        .earliest()
        .map(|local| local.fixed_offset())
        .ok_or_else(|| AppError::InvalidInput("invalid local date".to_string()))
}

pub fn parse_week_start_input(value: &str) -> Result<Weekday> {
    parse_week_start(value)
        .ok_or_else(|| AppError::InvalidInput(format!("unsupported week start {}", value)))
}
