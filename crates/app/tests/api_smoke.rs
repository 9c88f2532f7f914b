use chrono::{TimeZone, Utc};
use ctc_app::{AppError, AppState, logging};
use ctc_core::{RecordForm, Weekday, WindowFilter};
use tempfile::tempdir;

fn form(date: &str, dryer_hours: &str) -> RecordForm {
    RecordForm {
        date: date.to_string(),
        input_kg: "100".to_string(),
        tea_made_gl: "25".to_string(),
        tea_made_ors: "5".to_string(),
        ctc_hours: "8".to_string(),
        dryer_hours: dryer_hours.to_string(),
        heater_hours: "2".to_string(),
        coal_kg: "10".to_string(),
        electricity_units: "50".to_string(),
        mandays: "12".to_string(),
    }
}

fn setup() -> (tempfile::TempDir, AppState) {
    logging::init_test();
    let dir = tempdir().expect("temp dir");
    let app_state = AppState::new(dir.path().join("app.sqlite"));
    app_state.initialize(Weekday::Mon).expect("initialize");
    (dir, app_state)
}

#[test]
fn report_service_smoke() {
    let (_dir, app_state) = setup();
    let records = &app_state.services.records;
    records
        .add("owner-a", &form("2024-06-10", "6"))
        .expect("add first");
    records
        .add("owner-a", &form("2024-05-20", "6"))
        .expect("add second");
    records
        .add("owner-b", &form("2024-06-11", "6"))
        .expect("add other owner");

    let now = Utc
        .with_ymd_and_hms(2024, 6, 12, 9, 0, 0)
        .single()
        .expect("now");
    let report = app_state
        .services
        .reports
        .report("owner-a", WindowFilter::ThisWeek, &now)
        .expect("report")
        .report;
    assert_eq!(report.rows.len(), 1);
    let metrics = report.rows[0].metrics().expect("metrics");
    assert_eq!(metrics.recovery_gl, 25.0);
    assert_eq!(metrics.total_hours, 16.0);

    let all = app_state
        .services
        .reports
        .report("owner-a", WindowFilter::All, &now)
        .expect("report")
        .report;
    assert_eq!(all.rows.len(), 2);
    assert_eq!(all.chart_points[1].date, "2024-05-20");
}

#[test]
fn invalid_forms_are_rejected_before_insert() {
    let (_dir, app_state) = setup();
    let err = app_state
        .services
        .records
        .add("owner-a", &form("2024-06-10", ""))
        .expect_err("blank field");
    assert!(matches!(err, AppError::Record(_)));
    assert_eq!(err.to_string(), "invalid record field: dryerHours");
    assert!(
        app_state
            .services
            .records
            .list("owner-a")
            .expect("list")
            .is_empty()
    );
}

#[test]
fn owner_id_is_required() {
    let (_dir, app_state) = setup();
    let err = app_state
        .services
        .records
        .list("  ")
        .expect_err("missing owner");
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn delete_reports_missing_records() {
    let (_dir, app_state) = setup();
    let stored = app_state
        .services
        .records
        .add("owner-a", &form("2024-06-10", "6"))
        .expect("add");
    let err = app_state
        .services
        .records
        .delete("owner-b", stored.id)
        .expect_err("foreign record");
    assert!(matches!(err, AppError::NotFound(_)));
    app_state
        .services
        .records
        .delete("owner-a", stored.id)
        .expect("delete");
}

#[test]
fn week_start_setting_changes_weekly_report() {
    let (_dir, app_state) = setup();
    app_state
        .services
        .records
        .add("owner-a", &form("2024-06-09", "6"))
        .expect("add sunday");
    let now = Utc
        .with_ymd_and_hms(2024, 6, 12, 9, 0, 0)
        .single()
        .expect("now");
    let reports = &app_state.services.reports;

    let monday = reports
        .report("owner-a", WindowFilter::ThisWeek, &now)
        .expect("report");
    assert_eq!(monday.week_start, Weekday::Mon);
    assert!(monday.report.rows.is_empty());

    app_state
        .services
        .settings
        .update(Some(Weekday::Sun))
        .expect("update");
    assert_eq!(
        app_state.services.settings.get().expect("get").week_start,
        Weekday::Sun
    );
    let sunday = reports
        .report("owner-a", WindowFilter::ThisWeek, &now)
        .expect("report");
    assert_eq!(sunday.week_start, Weekday::Sun);
    assert_eq!(sunday.report.rows.len(), 1);
}

#[test]
fn fresh_database_is_seeded_with_configured_week_start() {
    let dir = tempdir().expect("temp dir");
    let app_state = AppState::new(dir.path().join("seeded.sqlite"));
    assert!(app_state.is_fresh_db());
    app_state.initialize(Weekday::Sat).expect("initialize");
    assert_eq!(
        app_state.services.settings.get().expect("get").week_start,
        Weekday::Sat
    );

    app_state.initialize(Weekday::Mon).expect("reinitialize");
    assert_eq!(
        app_state.services.settings.get().expect("get").week_start,
        Weekday::Sat
    );
}
