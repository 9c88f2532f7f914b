use ctc_core::{ProductionRecord, RecordField, ReportRow, StoredRecord};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ReportLine {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Input")]
    input_kg: String,
    #[tabled(rename = "GL")]
    tea_made_gl: String,
    #[tabled(rename = "ORS")]
    tea_made_ors: String,
    #[tabled(rename = "Recovery GL %")]
    recovery_gl: String,
    #[tabled(rename = "Recovery ORS %")]
    recovery_ors: String,
    #[tabled(rename = "CTC Hrs")]
    ctc_hours: String,
    #[tabled(rename = "Dryer Hrs")]
    dryer_hours: String,
    #[tabled(rename = "Heater Hrs")]
    heater_hours: String,
    #[tabled(rename = "Total Hrs")]
    total_hours: String,
    #[tabled(rename = "Coal")]
    coal_kg: String,
    #[tabled(rename = "Coal Ratio")]
    coal_ratio: String,
    #[tabled(rename = "Electric")]
    electricity_units: String,
    #[tabled(rename = "Electric Ratio")]
    electric_ratio: String,
    #[tabled(rename = "Mandays")]
    mandays: String,
}

impl ReportLine {
    fn from_row(row: &ReportRow) -> Self {
        let record = &row.record;
        let derived =
            |value: Option<f64>| value.map(format_metric).unwrap_or_else(|| "!".to_string());
        let metrics = row.metrics();
        Self {
            date: record.date.clone(),
            input_kg: field_cell(record, RecordField::InputKg),
            tea_made_gl: field_cell(record, RecordField::TeaMadeGl),
            tea_made_ors: field_cell(record, RecordField::TeaMadeOrs),
            recovery_gl: derived(metrics.map(|m| m.recovery_gl)),
            recovery_ors: derived(metrics.map(|m| m.recovery_ors)),
            ctc_hours: field_cell(record, RecordField::CtcHours),
            dryer_hours: field_cell(record, RecordField::DryerHours),
            heater_hours: field_cell(record, RecordField::HeaterHours),
            total_hours: derived(metrics.map(|m| m.total_hours)),
            coal_kg: field_cell(record, RecordField::CoalKg),
            coal_ratio: derived(metrics.map(|m| m.coal_ratio)),
            electricity_units: field_cell(record, RecordField::ElectricityUnits),
            electric_ratio: derived(metrics.map(|m| m.electric_ratio)),
            mandays: field_cell(record, RecordField::Mandays),
        }
    }
}

#[derive(Tabled)]
struct RecordLine {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Input (Kg)")]
    input_kg: String,
    #[tabled(rename = "Tea Made GL (Kg)")]
    tea_made_gl: String,
    #[tabled(rename = "Tea Made ORS (Kg)")]
    tea_made_ors: String,
    #[tabled(rename = "CTC Hours")]
    ctc_hours: String,
    #[tabled(rename = "Dryer Hours")]
    dryer_hours: String,
    #[tabled(rename = "Heater Hours")]
    heater_hours: String,
    #[tabled(rename = "Coal (Kg)")]
    coal_kg: String,
    #[tabled(rename = "Electricity (Units)")]
    electricity_units: String,
    #[tabled(rename = "Mandays")]
    mandays: String,
}

impl RecordLine {
    fn from_stored(stored: &StoredRecord) -> Self {
        let record = &stored.record;
        Self {
            id: stored.id,
            date: record.date.clone(),
            input_kg: field_cell(record, RecordField::InputKg),
            tea_made_gl: field_cell(record, RecordField::TeaMadeGl),
            tea_made_ors: field_cell(record, RecordField::TeaMadeOrs),
            ctc_hours: field_cell(record, RecordField::CtcHours),
            dryer_hours: field_cell(record, RecordField::DryerHours),
            heater_hours: field_cell(record, RecordField::HeaterHours),
            coal_kg: field_cell(record, RecordField::CoalKg),
            electricity_units: field_cell(record, RecordField::ElectricityUnits),
            mandays: field_cell(record, RecordField::Mandays),
        }
    }
}

pub fn render_report(rows: &[ReportRow]) -> String {
    Table::new(rows.iter().map(ReportLine::from_row)).to_string()
}

pub fn render_records(records: &[StoredRecord]) -> String {
    Table::new(records.iter().map(RecordLine::from_stored)).to_string()
}

/// Two decimals for finite values; the sentinel spelled out otherwise.
pub fn format_metric(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn field_cell(record: &ProductionRecord, field: RecordField) -> String {
    match record.value(field) {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, input_kg: Option<f64>) -> ProductionRecord {
        ProductionRecord {
            date: date.to_string(),
            input_kg,
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

    #[test]
    fn metrics_use_two_decimals_and_named_sentinels() {
        assert_eq!(format_metric(25.0), "25.00");
        assert_eq!(format_metric(1.0 / 3.0), "0.33");
        assert_eq!(format_metric(f64::INFINITY), "Infinity");
        assert_eq!(format_metric(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_metric(f64::NAN), "NaN");
    }

    #[test]
    fn report_lines_format_metrics_and_flags() {
        let valid = ReportRow::from_record(&record("2024-06-10", Some(100.0)));
        let valid = ReportLine::from_row(&valid);
        assert_eq!(valid.recovery_gl, "25.00");
        assert_eq!(valid.coal_ratio, "0.40");
        assert_eq!(valid.total_hours, "16.00");

        let flagged = ReportRow::from_record(&record("2024-06-11", None));
        let flagged = ReportLine::from_row(&flagged);
        assert_eq!(flagged.input_kg, "-");
        assert_eq!(flagged.recovery_gl, "!");
        assert_eq!(flagged.mandays, "12");
    }

    #[test]
    fn report_table_has_headers_and_rows() {
        let rows = vec![
            ReportRow::from_record(&record("2024-06-10", Some(100.0))),
            ReportRow::from_record(&record("2024-06-11", Some(0.0))),
        ];
        let table = render_report(&rows);
        assert!(table.contains("Recovery GL %"));
        assert!(table.contains("Electric Ratio"));
        assert!(table.contains("2024-06-10"));
        assert!(table.contains("25.00"));
        assert!(table.contains("Infinity"));
    }
}
