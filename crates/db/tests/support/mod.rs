#![allow(dead_code)]

use std::path::PathBuf;

use ctc_core::ProductionRecord;
use ctc_db::Db;
use tempfile::TempDir;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn make_record(date: &str) -> ProductionRecord {
    ProductionRecord {
        date: date.to_string(),
        input_kg: Some(100.0),
        tea_made_gl: Some(25.0),
        tea_made_ors: Some(5.0),
        ctc_hours: Some(8.0),
        dryer_hours: Some(6.0),
        heater_hours: Some(2.0),
        coal_kg: Some(10.0),
        electricity_units: Some(50.0),
        mandays: Some(12.0),
    }
}
