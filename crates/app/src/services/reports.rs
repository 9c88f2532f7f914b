use chrono::{DateTime, TimeZone};

use crate::error::Result;
use crate::services::{SharedConfig, open_db, require_owner};
use ctc_core::{
    CalendarPolicy, ProductionRecord, Report, ReportAggregator, Weekday, WindowFilter,
};
use ctc_db::Db;

/// A report together with the week start its calendar was built from.
#[derive(Debug, Clone)]
pub struct OwnerReport {
    pub report: Report,
    pub week_start: Weekday,
}

#[derive(Clone)]
pub struct ReportsService {
    config: SharedConfig,
}

impl ReportsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<Db> {
        open_db(&self.config)
    }

    /// Fetches the owner's records and aggregates them for `window`.
    pub fn report<Tz: TimeZone>(
        &self,
        owner_id: &str,
        window: WindowFilter,
        now: &DateTime<Tz>,
    ) -> Result<OwnerReport> {
        let owner_id = require_owner(owner_id)?;
        let db = self.db()?;
        let calendar = CalendarPolicy::new(db.get_week_start()?);
        let records: Vec<ProductionRecord> = db
            .list_records_by_owner(owner_id)?
            .into_iter()
            .map(|stored| stored.record)
            .collect();
        let aggregator = ReportAggregator::new(calendar);
        let report = aggregator.aggregate(&records, window, now);
        let flagged = report.flagged_rows().count();
        if flagged > 0 {
            tracing::warn!(owner_id, %window, flagged, "report contains flagged rows");
        }
        tracing::debug!(
            owner_id,
            %window,
            fetched = records.len(),
            rows = report.rows.len(),
            "report aggregated"
        );
        Ok(OwnerReport {
            report,
            week_start: aggregator.calendar().week_start(),
        })
    }
}
