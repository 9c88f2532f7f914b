use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::metrics::{
    DerivedMetrics, coal_ratio, derive_metrics, electric_ratio, recovery_gl, recovery_ors, round2,
};
use crate::record::ProductionRecord;
use crate::window::{CalendarPolicy, WindowFilter};

/// Derived metrics for a report row, or why they could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowMetrics {
    Available(DerivedMetrics),
    Unavailable { reason: String },
}

/// One record's raw fields plus its rounded metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(flatten)]
    pub record: ProductionRecord,
    pub metrics: RowMetrics,
}

impl ReportRow {
    pub fn from_record(record: &ProductionRecord) -> Self {
        let metrics = match derive_metrics(record) {
            Ok(metrics) => RowMetrics::Available(metrics.rounded()),
            Err(err) => RowMetrics::Unavailable {
                reason: err.to_string(),
            },
        };
        Self {
            record: record.clone(),
            metrics,
        }
    }

    pub fn flagged(record: &ProductionRecord, err: &CoreError) -> Self {
        Self {
            record: record.clone(),
            metrics: RowMetrics::Unavailable {
                reason: err.to_string(),
            },
        }
    }

    pub fn metrics(&self) -> Option<&DerivedMetrics> {
        match &self.metrics {
            RowMetrics::Available(metrics) => Some(metrics),
            RowMetrics::Unavailable { .. } => None,
        }
    }

    /// Marker shown in place of the metrics of a flagged row.
    pub fn issue(&self) -> Option<String> {
        match &self.metrics {
            RowMetrics::Available(_) => None,
            RowMetrics::Unavailable { reason } => Some(format!("metrics unavailable: {reason}")),
        }
    }
}

/// Chart values for one record. Each metric is derived on its own, so a
/// record missing an hours field still charts its ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    #[serde(
        rename = "recoveryGL",
        default,
        with = "crate::metric_value::option"
    )]
    pub recovery_gl: Option<f64>,
    #[serde(
        rename = "recoveryORS",
        default,
        with = "crate::metric_value::option"
    )]
    pub recovery_ors: Option<f64>,
    #[serde(rename = "coalRatio", default, with = "crate::metric_value::option")]
    pub coal_ratio: Option<f64>,
    #[serde(
        rename = "electricRatio",
        default,
        with = "crate::metric_value::option"
    )]
    pub electric_ratio: Option<f64>,
}

impl ChartPoint {
    pub fn from_record(record: &ProductionRecord) -> Self {
        Self {
            date: record.date.clone(),
            recovery_gl: recovery_gl(record).ok().map(round2),
            recovery_ors: recovery_ors(record).ok().map(round2),
            coal_ratio: coal_ratio(record).ok().map(round2),
            electric_ratio: electric_ratio(record).ok().map(round2),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    #[serde(rename = "chartPoints")]
    pub chart_points: Vec<ChartPoint>,
}

impl Report {
    pub fn flagged_rows(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.metrics().is_none())
    }
}

/// Filters records into a window and projects them into report output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAggregator {
    calendar: CalendarPolicy,
}

impl ReportAggregator {
    pub fn new(calendar: CalendarPolicy) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> CalendarPolicy {
        self.calendar
    }

    /// Single pass over `records` in their given order.
    ///
    /// Records whose date cannot be classified are kept as flagged rows so a
    /// data-entry defect stays visible; they get no chart point since they
    /// cannot be placed on the time axis.
    pub fn aggregate<Tz: TimeZone>(
        &self,
        records: &[ProductionRecord],
        window: WindowFilter,
        now: &DateTime<Tz>,
    ) -> Report {
        let mut report = Report::default();
        for record in records {
            match self.calendar.contains(window, &record.date, now) {
                Ok(true) => {
                    report.rows.push(ReportRow::from_record(record));
                    report.chart_points.push(ChartPoint::from_record(record));
                }
                Ok(false) => {}
                Err(err) => report.rows.push(ReportRow::flagged(record, &err)),
            }
        }
        report
    }
}

/// Aggregates with the default Monday-start calendar.
pub fn aggregate<Tz: TimeZone>(
    records: &[ProductionRecord],
    window: WindowFilter,
    now: &DateTime<Tz>,
) -> Report {
    ReportAggregator::default().aggregate(records, window, now)
}
