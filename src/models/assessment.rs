use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{
    Appetite, CognitiveStatus, Continence, Mobility, Mood, SleepQuality, Symptom,
};

/// Point-in-time vital-sign readings.
///
/// Every field is optional: a caregiver may skip a measurement. Scoring
/// substitutes the physiologically-normal defaults below for absent values,
/// so missing data can never raise an alert by itself. Trend analysis uses
/// the raw optional values instead and reports no-data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub systolic_bp: Option<u16>,
    pub diastolic_bp: Option<u16>,
    pub heart_rate: Option<u16>,
    pub temperature: Option<f64>,
    pub oxygen_saturation: Option<u8>,
    pub pain_level: Option<u8>,
}

impl VitalSigns {
    pub const DEFAULT_SYSTOLIC_BP: u16 = 120;
    pub const DEFAULT_DIASTOLIC_BP: u16 = 80;
    pub const DEFAULT_HEART_RATE: u16 = 70;
    pub const DEFAULT_TEMPERATURE: f64 = 36.5;
    pub const DEFAULT_OXYGEN_SATURATION: u8 = 98;
    pub const DEFAULT_PAIN_LEVEL: u8 = 0;

    pub fn systolic(&self) -> u16 {
        self.systolic_bp.unwrap_or(Self::DEFAULT_SYSTOLIC_BP)
    }

    pub fn diastolic(&self) -> u16 {
        self.diastolic_bp.unwrap_or(Self::DEFAULT_DIASTOLIC_BP)
    }

    pub fn pulse(&self) -> u16 {
        self.heart_rate.unwrap_or(Self::DEFAULT_HEART_RATE)
    }

    pub fn celsius(&self) -> f64 {
        self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE)
    }

    pub fn spo2(&self) -> u8 {
        self.oxygen_saturation
            .unwrap_or(Self::DEFAULT_OXYGEN_SATURATION)
    }

    pub fn pain(&self) -> u8 {
        self.pain_level.unwrap_or(Self::DEFAULT_PAIN_LEVEL)
    }

    /// Blood pressure formatted for display, e.g. "120/80".
    pub fn blood_pressure_display(&self) -> String {
        format!("{}/{}", self.systolic(), self.diastolic())
    }
}

/// General-status observations recorded alongside the vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralStatus {
    pub mobility: Mobility,
    pub appetite: Appetite,
    pub sleep_quality: SleepQuality,
    pub mood: Mood,
    pub cognitive_status: CognitiveStatus,
    pub continence: Continence,
}

impl Default for GeneralStatus {
    /// Lowest-risk observation in every dimension.
    fn default() -> Self {
        Self {
            mobility: Mobility::Independent,
            appetite: Appetite::Good,
            sleep_quality: SleepQuality::Good,
            mood: Mood::Normal,
            cognitive_status: CognitiveStatus::Alert,
            continence: Continence::Continent,
        }
    }
}

/// One clinical snapshot of a resident.
///
/// Created once at evaluation time and immutable thereafter: the history
/// per patient is append-only, assessments are never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    /// Weak reference: the assessment does not own the patient.
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub vital_signs: VitalSigns,
    #[serde(default)]
    pub general_status: GeneralStatus,
    /// Symptoms in the order the caregiver recorded them.
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub observations: String,
    pub evaluator_name: String,
}

impl Assessment {
    pub fn has_symptom(&self, symptom: Symptom) -> bool {
        self.symptoms.contains(&symptom)
    }
}
