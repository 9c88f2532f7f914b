use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::record::DATE_FORMAT;

/// Named reporting window relative to a reference instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowFilter {
    #[default]
    All,
    Today,
    #[serde(alias = "week")]
    ThisWeek,
    #[serde(alias = "month")]
    ThisMonth,
}

impl WindowFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowFilter::All => "all",
            WindowFilter::Today => "today",
            WindowFilter::ThisWeek => "this_week",
            WindowFilter::ThisMonth => "this_month",
        }
    }
}

impl fmt::Display for WindowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported window {0}")]
pub struct ParseWindowError(pub String);

impl FromStr for WindowFilter {
    type Err = ParseWindowError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(WindowFilter::All),
            "today" => Ok(WindowFilter::Today),
            "week" | "this_week" | "thisweek" => Ok(WindowFilter::ThisWeek),
            "month" | "this_month" | "thismonth" => Ok(WindowFilter::ThisMonth),
            _ => Err(ParseWindowError(value.to_string())),
        }
    }
}

/// Calendar boundary rules used to classify dates into windows.
///
/// Days and months follow the calendar of the reference instant's time
/// zone. Weeks run for seven days starting on `week_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPolicy {
    week_start: Weekday,
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
        }
    }
}

impl CalendarPolicy {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// First day of the week containing `day`.
    pub fn start_of_week(&self, day: NaiveDate) -> Option<NaiveDate> {
        let offset = (7 + day.weekday().num_days_from_monday()
            - self.week_start.num_days_from_monday())
            % 7;
        day.checked_sub_days(Days::new(u64::from(offset)))
    }

    /// Classifies a record date against `window`.
    ///
    /// `All` never inspects the date. Every other window fails with
    /// [`CoreError::InvalidDate`] when the date cannot be read.
    pub fn contains<Tz: TimeZone>(
        &self,
        window: WindowFilter,
        date: &str,
        now: &DateTime<Tz>,
    ) -> Result<bool> {
        if window == WindowFilter::All {
            return Ok(true);
        }
        let day = parse_record_date(date, &now.timezone())?;
        let today = now.date_naive();
        let matched = match window {
            WindowFilter::All => true,
            WindowFilter::Today => day == today,
            WindowFilter::ThisWeek => {
                let start = self
                    .start_of_week(today)
                    .ok_or_else(|| CoreError::InvalidDate(today.to_string()))?;
                let offset = day.signed_duration_since(start).num_days();
                (0..7).contains(&offset)
            }
            WindowFilter::ThisMonth => day.year() == today.year() && day.month() == today.month(),
        };
        Ok(matched)
    }
}

/// Reads a record date as a calendar day.
///
/// Plain `YYYY-MM-DD` dates are taken as-is; RFC 3339 timestamps are moved
/// into `tz` before taking their day.
pub fn parse_record_date<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|parsed| parsed.with_timezone(tz).date_naive())
        .map_err(|_| CoreError::InvalidDate(value.to_string()))
}

/// Parses a weekday name such as `monday` or `Sun`.
pub fn parse_week_start(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}

pub fn week_start_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
