use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{ProductionRecord, RecordField};

/// Ratios derived from one production record.
///
/// Values keep full precision; [`DerivedMetrics::rounded`] is applied only
/// when building report output. A zero denominator produces an infinite or
/// NaN value rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    #[serde(rename = "recoveryGL", with = "crate::metric_value")]
    pub recovery_gl: f64,
    #[serde(rename = "recoveryORS", with = "crate::metric_value")]
    pub recovery_ors: f64,
    #[serde(rename = "coalRatio", with = "crate::metric_value")]
    pub coal_ratio: f64,
    #[serde(rename = "electricRatio", with = "crate::metric_value")]
    pub electric_ratio: f64,
    #[serde(rename = "totalHours", with = "crate::metric_value")]
    pub total_hours: f64,
}

impl DerivedMetrics {
    pub fn rounded(&self) -> Self {
        Self {
            recovery_gl: round2(self.recovery_gl),
            recovery_ors: round2(self.recovery_ors),
            coal_ratio: round2(self.coal_ratio),
            electric_ratio: round2(self.electric_ratio),
            total_hours: round2(self.total_hours),
        }
    }
}

pub fn recovery_gl(record: &ProductionRecord) -> Result<f64> {
    let made = record.require(RecordField::TeaMadeGl)?;
    let input = record.require(RecordField::InputKg)?;
    Ok(made / input * 100.0)
}

pub fn recovery_ors(record: &ProductionRecord) -> Result<f64> {
    let made = record.require(RecordField::TeaMadeOrs)?;
    let input = record.require(RecordField::InputKg)?;
    Ok(made / input * 100.0)
}

pub fn coal_ratio(record: &ProductionRecord) -> Result<f64> {
    let coal = record.require(RecordField::CoalKg)?;
    let made = record.require(RecordField::TeaMadeGl)?;
    Ok(coal / made)
}

pub fn electric_ratio(record: &ProductionRecord) -> Result<f64> {
    let units = record.require(RecordField::ElectricityUnits)?;
    let made = record.require(RecordField::TeaMadeGl)?;
    Ok(units / made)
}

pub fn total_hours(record: &ProductionRecord) -> Result<f64> {
    let ctc = record.require(RecordField::CtcHours)?;
    let dryer = record.require(RecordField::DryerHours)?;
    let heater = record.require(RecordField::HeaterHours)?;
    Ok(ctc + dryer + heater)
}

/// Computes every metric, failing on the first unusable field.
pub fn derive_metrics(record: &ProductionRecord) -> Result<DerivedMetrics> {
    Ok(DerivedMetrics {
        recovery_gl: recovery_gl(record)?,
        recovery_ors: recovery_ors(record)?,
        coal_ratio: coal_ratio(record)?,
        electric_ratio: electric_ratio(record)?,
        total_hours: total_hours(record)?,
    })
}

/// Rounds half away from zero to two decimals; sentinels pass through.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const EPSILON: f64 = 0.005;

    fn record() -> ProductionRecord {
        ProductionRecord {
            date: "2024-06-10".to_string(),
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

    #[test]
    fn derives_expected_ratios() {
        let metrics = derive_metrics(&record()).expect("metrics");
        assert!((metrics.recovery_gl - 25.0).abs() < EPSILON);
        assert!((metrics.recovery_ors - 5.0).abs() < EPSILON);
        assert!((metrics.coal_ratio - 0.4).abs() < EPSILON);
        assert!((metrics.electric_ratio - 2.0).abs() < EPSILON);
        assert_eq!(metrics.total_hours, 16.0);
    }

    #[test]
    fn recovery_matches_formula_for_positive_input() {
        for (made, input) in [(1.0, 3.0), (412.5, 1873.25), (0.0, 9.0), (77.7, 0.1)] {
            let mut record = record();
            record.tea_made_gl = Some(made);
            record.input_kg = Some(input);
            let value = round2(recovery_gl(&record).expect("recovery"));
            assert!((value - made / input * 100.0).abs() < EPSILON);
        }
    }

    #[test]
    fn zero_input_propagates_sentinels() {
        let mut record = record();
        record.input_kg = Some(0.0);
        let value = recovery_gl(&record).expect("recovery");
        assert!(value.is_infinite() && value.is_sign_positive());

        record.tea_made_gl = Some(0.0);
        assert!(recovery_gl(&record).expect("recovery").is_nan());
        assert!(coal_ratio(&record).expect("coal").is_infinite());
    }

    #[test]
    fn missing_hours_fail_instead_of_summing_two_values() {
        let mut record = record();
        record.dryer_hours = None;
        assert_eq!(
            total_hours(&record),
            Err(CoreError::InvalidRecordField(RecordField::DryerHours))
        );
        assert_eq!(
            derive_metrics(&record),
            Err(CoreError::InvalidRecordField(RecordField::DryerHours))
        );
        assert!(recovery_gl(&record).is_ok());
    }

    #[test]
    fn rounding_keeps_two_decimals_and_sentinels() {
        assert_eq!(round2(33.33333), 33.33);
        assert_eq!(round2(0.125), 0.13);
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }
}
