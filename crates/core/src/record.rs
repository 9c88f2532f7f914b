use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields captured for one production day, in entry-form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "inputKg")]
    InputKg,
    #[serde(rename = "teaMadeGL")]
    TeaMadeGl,
    #[serde(rename = "teaMadeORS")]
    TeaMadeOrs,
    #[serde(rename = "ctcHours")]
    CtcHours,
    #[serde(rename = "dryerHours")]
    DryerHours,
    #[serde(rename = "heaterHours")]
    HeaterHours,
    #[serde(rename = "coalKg")]
    CoalKg,
    #[serde(rename = "electricityUnits")]
    ElectricityUnits,
    #[serde(rename = "mandays")]
    Mandays,
}

impl RecordField {
    pub const ALL: [RecordField; 10] = [
        RecordField::Date,
        RecordField::InputKg,
        RecordField::TeaMadeGl,
        RecordField::TeaMadeOrs,
        RecordField::CtcHours,
        RecordField::DryerHours,
        RecordField::HeaterHours,
        RecordField::CoalKg,
        RecordField::ElectricityUnits,
        RecordField::Mandays,
    ];

    pub const NUMERIC: [RecordField; 9] = [
        RecordField::InputKg,
        RecordField::TeaMadeGl,
        RecordField::TeaMadeOrs,
        RecordField::CtcHours,
        RecordField::DryerHours,
        RecordField::HeaterHours,
        RecordField::CoalKg,
        RecordField::ElectricityUnits,
        RecordField::Mandays,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordField::Date => "date",
            RecordField::InputKg => "inputKg",
            RecordField::TeaMadeGl => "teaMadeGL",
            RecordField::TeaMadeOrs => "teaMadeORS",
            RecordField::CtcHours => "ctcHours",
            RecordField::DryerHours => "dryerHours",
            RecordField::HeaterHours => "heaterHours",
            RecordField::CoalKg => "coalKg",
            RecordField::ElectricityUnits => "electricityUnits",
            RecordField::Mandays => "mandays",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordField::Date => "Date",
            RecordField::InputKg => "Input (Kg)",
            RecordField::TeaMadeGl => "Tea Made GL (Kg)",
            RecordField::TeaMadeOrs => "Tea Made ORS (Kg)",
            RecordField::CtcHours => "CTC Hours",
            RecordField::DryerHours => "Dryer Hours",
            RecordField::HeaterHours => "Heater Hours",
            RecordField::CoalKg => "Coal (Kg)",
            RecordField::ElectricityUnits => "Electricity (Units)",
            RecordField::Mandays => "Mandays",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day of raw measurements as held by the record source.
///
/// Numeric fields are optional because the store may hand back rows with
/// absent or non-numeric values; metric derivation reports those instead of
/// treating them as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    pub date: String,
    #[serde(default)]
    pub input_kg: Option<f64>,
    #[serde(default, rename = "teaMadeGL")]
    pub tea_made_gl: Option<f64>,
    #[serde(default, rename = "teaMadeORS")]
    pub tea_made_ors: Option<f64>,
    #[serde(default)]
    pub ctc_hours: Option<f64>,
    #[serde(default)]
    pub dryer_hours: Option<f64>,
    #[serde(default)]
    pub heater_hours: Option<f64>,
    #[serde(default)]
    pub coal_kg: Option<f64>,
    #[serde(default)]
    pub electricity_units: Option<f64>,
    #[serde(default)]
    pub mandays: Option<f64>,
}

impl ProductionRecord {
    pub fn value(&self, field: RecordField) -> Option<f64> {
        match field {
            RecordField::Date => None,
            RecordField::InputKg => self.input_kg,
            RecordField::TeaMadeGl => self.tea_made_gl,
            RecordField::TeaMadeOrs => self.tea_made_ors,
            RecordField::CtcHours => self.ctc_hours,
            RecordField::DryerHours => self.dryer_hours,
            RecordField::HeaterHours => self.heater_hours,
            RecordField::CoalKg => self.coal_kg,
            RecordField::ElectricityUnits => self.electricity_units,
            RecordField::Mandays => self.mandays,
        }
    }

    /// Returns the numeric value of `field`, failing when it is absent or
    /// not a finite number.
    pub fn require(&self, field: RecordField) -> Result<f64> {
        match self.value(field) {
            Some(value) if value.is_finite() => Ok(value),
            _ => Err(CoreError::InvalidRecordField(field)),
        }
    }
}

/// A record as persisted by the record source, scoped to its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: i64,
    pub owner_id: String,
    pub created_at: String,
    pub record: ProductionRecord,
}

/// Free-text values exactly as typed into the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordForm {
    #[serde(deserialize_with = "form_value")]
    pub date: String,
    #[serde(deserialize_with = "form_value")]
    pub input_kg: String,
    #[serde(rename = "teaMadeGL", deserialize_with = "form_value")]
    pub tea_made_gl: String,
    #[serde(rename = "teaMadeORS", deserialize_with = "form_value")]
    pub tea_made_ors: String,
    #[serde(deserialize_with = "form_value")]
    pub ctc_hours: String,
    #[serde(deserialize_with = "form_value")]
    pub dryer_hours: String,
    #[serde(deserialize_with = "form_value")]
    pub heater_hours: String,
    #[serde(deserialize_with = "form_value")]
    pub coal_kg: String,
    #[serde(deserialize_with = "form_value")]
    pub electricity_units: String,
    #[serde(deserialize_with = "form_value")]
    pub mandays: String,
}

impl RecordForm {
    pub fn value(&self, field: RecordField) -> &str {
        match field {
            RecordField::Date => &self.date,
            RecordField::InputKg => &self.input_kg,
            RecordField::TeaMadeGl => &self.tea_made_gl,
            RecordField::TeaMadeOrs => &self.tea_made_ors,
            RecordField::CtcHours => &self.ctc_hours,
            RecordField::DryerHours => &self.dryer_hours,
            RecordField::HeaterHours => &self.heater_hours,
            RecordField::CoalKg => &self.coal_kg,
            RecordField::ElectricityUnits => &self.electricity_units,
            RecordField::Mandays => &self.mandays,
        }
    }

    /// Validates every field and builds the record to persist.
    pub fn parse(&self) -> Result<ProductionRecord> {
        let date = self.date.trim();
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| CoreError::InvalidDate(self.date.clone()))?;
        let mut record = ProductionRecord {
            date: date.format(DATE_FORMAT).to_string(),
            ..ProductionRecord::default()
        };
        for field in RecordField::NUMERIC {
            let value = parse_measurement(self.value(field), field)?;
            match field {
                RecordField::InputKg => record.input_kg = Some(value),
                RecordField::TeaMadeGl => record.tea_made_gl = Some(value),
                RecordField::TeaMadeOrs => record.tea_made_ors = Some(value),
                RecordField::CtcHours => record.ctc_hours = Some(value),
                RecordField::DryerHours => record.dryer_hours = Some(value),
                RecordField::HeaterHours => record.heater_hours = Some(value),
                RecordField::CoalKg => record.coal_kg = Some(value),
                RecordField::ElectricityUnits => record.electricity_units = Some(value),
                RecordField::Mandays => record.mandays = Some(value),
                RecordField::Date => {}
            }
        }
        Ok(record)
    }
}

fn parse_measurement(raw: &str, field: RecordField) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::InvalidRecordField(field))?;
    if !value.is_finite() {
        return Err(CoreError::InvalidRecordField(field));
    }
    if value < 0.0 {
        return Err(CoreError::NegativeField(field));
    }
    Ok(value)
}

/// Accepts strings, numbers or null so JSON clients can post either.
fn form_value<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
        Missing(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
        Raw::Missing(()) => String::new(),
    })
}
