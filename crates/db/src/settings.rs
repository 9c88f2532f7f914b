use ctc_core::{Weekday, parse_week_start, week_start_name};
use rusqlite::params;

use crate::Db;
use crate::error::Result;

pub const WEEK_START_KEY: &str = "week_start";

impl Db {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM app_setting WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get::<_, String>(0)?))
        } else {
            Ok(None)
        }
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO app_setting (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_week_start(&self) -> Result<Weekday> {
        let day = self
            .get_setting(WEEK_START_KEY)?
            .and_then(|value| parse_week_start(&value))
            .unwrap_or(Weekday::Mon);
        Ok(day)
    }

    pub fn set_week_start(&self, day: Weekday) -> Result<()> {
        self.set_setting(WEEK_START_KEY, week_start_name(day))
    }
}
