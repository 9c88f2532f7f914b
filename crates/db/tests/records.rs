mod support;

use ctc_core::{CoreError, RecordField, derive_metrics};
use rusqlite::Connection;
use support::{make_record, setup_db};

#[test]
fn insert_returns_persisted_record() {
    let test_db = setup_db();
    let db = &test_db.db;
    let record = make_record("2024-06-10");

    let stored = db.insert_record("owner-a", &record).expect("insert");
    assert!(stored.id > 0);
    assert_eq!(stored.owner_id, "owner-a");
    assert_eq!(stored.record, record);
    assert!(!stored.created_at.is_empty());
}

#[test]
fn list_is_scoped_to_owner_and_keeps_insertion_order() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_record("owner-a", &make_record("2024-06-12"))
        .expect("insert a1");
    db.insert_record("owner-b", &make_record("2024-06-11"))
        .expect("insert b1");
    db.insert_record("owner-a", &make_record("2024-06-01"))
        .expect("insert a2");

    let records = db.list_records_by_owner("owner-a").expect("list");
    let dates: Vec<&str> = records
        .iter()
        .map(|stored| stored.record.date.as_str())
        .collect();
    assert_eq!(dates, vec!["2024-06-12", "2024-06-01"]);
    assert!(db.list_records_by_owner("nobody").expect("list").is_empty());
}

#[test]
fn absent_and_non_numeric_columns_read_as_missing() {
    let test_db = setup_db();
    {
        let conn = Connection::open(&test_db.path).expect("open conn");
        conn.execute(
            r#"
            INSERT INTO production_record (
              owner_id, date, input_kg, tea_made_gl, tea_made_ors, ctc_hours,
              dryer_hours, heater_hours, coal_kg, electricity_units, mandays, created_at
            ) VALUES (
              'owner-a', '2024-06-10', '100', 25, 5.5, 8, NULL, 'two', 10, 50, 12,
              '2024-06-10T00:00:00.000Z'
            )
            "#,
            [],
        )
        .expect("insert raw row");
    }

    let records = test_db.db.list_records_by_owner("owner-a").expect("list");
    assert_eq!(records.len(), 1);
    let record = &records[0].record;
    assert_eq!(record.input_kg, Some(100.0));
    assert_eq!(record.tea_made_gl, Some(25.0));
    assert_eq!(record.tea_made_ors, Some(5.5));
    assert_eq!(record.dryer_hours, None);
    assert_eq!(record.heater_hours, None);
}

#[test]
fn infinite_and_nan_columns_read_as_missing() {
    let test_db = setup_db();
    {
        let conn = Connection::open(&test_db.path).expect("open conn");
        conn.execute(
            r#"
            INSERT INTO production_record (
              owner_id, date, input_kg, tea_made_gl, tea_made_ors, ctc_hours,
              dryer_hours, heater_hours, coal_kg, electricity_units, mandays, created_at
            ) VALUES (
              'owner-a', '2024-06-10', 'inf', 25, 'NaN', 8, 6, 2, 10, 50, 'infinity',
              '2024-06-10T00:00:00.000Z'
            )
            "#,
            [],
        )
        .expect("insert raw row");
    }

    let records = test_db.db.list_records_by_owner("owner-a").expect("list");
    let record = &records[0].record;
    assert_eq!(record.input_kg, None);
    assert_eq!(record.tea_made_ors, None);
    assert_eq!(record.mandays, None);
    assert_eq!(
        derive_metrics(record),
        Err(CoreError::InvalidRecordField(RecordField::InputKg))
    );
}

#[test]
fn delete_only_removes_own_records() {
    let test_db = setup_db();
    let db = &test_db.db;
    let stored = db
        .insert_record("owner-a", &make_record("2024-06-10"))
        .expect("insert");

    assert!(!db.delete_record("owner-b", stored.id).expect("delete other"));
    assert!(db.get_record("owner-a", stored.id).expect("get").is_some());
    assert!(db.delete_record("owner-a", stored.id).expect("delete own"));
    assert!(db.get_record("owner-a", stored.id).expect("get").is_none());
}
