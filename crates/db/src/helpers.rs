use ctc_core::{ProductionRecord, StoredRecord};
use rusqlite::Row;
use rusqlite::types::ValueRef;

pub(crate) const RECORD_COLUMNS: &str = r#"
    id, owner_id, created_at, date, input_kg, tea_made_gl, tea_made_ors,
    ctc_hours, dryer_hours, heater_hours, coal_kg, electricity_units, mandays
"#;

/// Reads a measurement column without trusting its storage class.
///
/// Finite numbers, stored as such or as numeric text, are accepted; anything
/// else (including `inf` and `NaN` text) comes back as `None` so metric
/// derivation can name the bad field.
pub(crate) fn numeric_column(
    row: &Row<'_>,
    index: usize,
) -> std::result::Result<Option<f64>, rusqlite::Error> {
    let value = match row.get_ref(index)? {
        ValueRef::Integer(value) => Some(value as f64),
        ValueRef::Real(value) => Some(value),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .ok()
            .and_then(|text| text.trim().parse::<f64>().ok()),
        ValueRef::Null | ValueRef::Blob(_) => None,
    };
    Ok(value.filter(|value| value.is_finite()))
}

pub(crate) fn row_to_stored_record(
    row: &Row<'_>,
) -> std::result::Result<StoredRecord, rusqlite::Error> {
    Ok(StoredRecord {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        created_at: row.get(2)?,
        record: ProductionRecord {
            date: row.get(3)?,
            input_kg: numeric_column(row, 4)?,
            tea_made_gl: numeric_column(row, 5)?,
            tea_made_ors: numeric_column(row, 6)?,
            ctc_hours: numeric_column(row, 7)?,
            dryer_hours: numeric_column(row, 8)?,
            heater_hours: numeric_column(row, 9)?,
            coal_kg: numeric_column(row, 10)?,
            electricity_units: numeric_column(row, 11)?,
            mandays: numeric_column(row, 12)?,
        },
    })
}
