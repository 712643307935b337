//! Input validation that runs before the scoring core.
//!
//! The scoring engine assumes pre-validated records and never re-checks
//! range constraints; rejecting bad input is the responsibility of this
//! module, invoked by whatever layer accepts caregiver data. Absent vital
//! signs are not an error (the scorer substitutes normal defaults).

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Assessment, Patient};

pub const HEART_RATE_RANGE: std::ops::RangeInclusive<u16> = 30..=200;
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = 30.0..=45.0;
pub const OXYGEN_SATURATION_RANGE: std::ops::RangeInclusive<u8> = 70..=100;
pub const MAX_AGE: u8 = 120;
pub const MAX_PAIN_LEVEL: u8 = 10;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Patient name must have at least 2 characters")]
    NameTooShort,

    #[error("Age must be between 0 and 120, got {0}")]
    AgeOutOfRange(u8),

    #[error("Admission date {0} is in the future")]
    AdmissionDateInFuture(NaiveDate),

    #[error("Assessment date {0} is in the future")]
    AssessmentDateInFuture(NaiveDate),

    #[error("Heart rate must be between 30 and 200 bpm, got {0}")]
    HeartRateOutOfRange(u16),

    #[error("Temperature must be between 30 and 45 \u{b0}C, got {0}")]
    TemperatureOutOfRange(f64),

    #[error("Oxygen saturation must be between 70 and 100%, got {0}")]
    OxygenSaturationOutOfRange(u8),

    #[error("Pain level must be between 0 and 10, got {0}")]
    PainLevelOutOfRange(u8),
}

/// Check a patient record against the registration constraints.
/// `today` is injected so callers and tests control the clock.
pub fn validate_patient(patient: &Patient, today: NaiveDate) -> Result<(), ValidationError> {
    if patient.name.trim().chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    if patient.age > MAX_AGE {
        return Err(ValidationError::AgeOutOfRange(patient.age));
    }
    if patient.admission_date > today {
        return Err(ValidationError::AdmissionDateInFuture(
            patient.admission_date,
        ));
    }
    Ok(())
}

/// Check an assessment against the clinical range constraints.
pub fn validate_assessment(
    assessment: &Assessment,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if assessment.date > today {
        return Err(ValidationError::AssessmentDateInFuture(assessment.date));
    }

    let vitals = &assessment.vital_signs;
    if let Some(hr) = vitals.heart_rate {
        if !HEART_RATE_RANGE.contains(&hr) {
            return Err(ValidationError::HeartRateOutOfRange(hr));
        }
    }
    if let Some(temp) = vitals.temperature {
        if !TEMPERATURE_RANGE.contains(&temp) {
            return Err(ValidationError::TemperatureOutOfRange(temp));
        }
    }
    if let Some(spo2) = vitals.oxygen_saturation {
        if !OXYGEN_SATURATION_RANGE.contains(&spo2) {
            return Err(ValidationError::OxygenSaturationOutOfRange(spo2));
        }
    }
    if let Some(pain) = vitals.pain_level {
        if pain > MAX_PAIN_LEVEL {
            return Err(ValidationError::PainLevelOutOfRange(pain));
        }
    }
    Ok(())
}
