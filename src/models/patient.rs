use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{AgeGroup, CognitiveLevel, FallRisk, Gender};

/// Named chronic-condition flags tracked per resident.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub hypertension: bool,
    #[serde(default)]
    pub heart_disease: bool,
    #[serde(default)]
    pub dementia: bool,
    #[serde(default)]
    pub depression: bool,
    #[serde(default)]
    pub mobility_issues: bool,
}

impl Conditions {
    /// Labels of all active conditions, in declaration order.
    pub fn active(&self) -> Vec<&'static str> {
        let flags = [
            (self.diabetes, "diabetes"),
            (self.hypertension, "hypertension"),
            (self.heart_disease, "heart disease"),
            (self.dementia, "dementia"),
            (self.depression, "depression"),
            (self.mobility_issues, "mobility issues"),
        ];
        flags
            .into_iter()
            .filter_map(|(set, label)| set.then_some(label))
            .collect()
    }

    /// Caregiver-facing one-line summary.
    pub fn summary(&self) -> String {
        let active = self.active();
        if active.is_empty() {
            "No medical conditions on record".to_string()
        } else {
            active.join(", ")
        }
    }
}

/// One entry in a patient's medication regimen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub indication: String,
    pub prescribed_by: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

/// A resident's identity and standing clinical profile.
///
/// The id is assigned at registration and never changes; assessments
/// reference it weakly (they do not own the patient). Patients are never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub room: String,
    pub admission_date: NaiveDate,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub conditions: Conditions,
    pub fall_risk_history: FallRisk,
    pub cognitive_level: CognitiveLevel,
    #[serde(default)]
    pub medications: Vec<Medication>,
    pub last_assessment_date: Option<NaiveDate>,
}

impl Patient {
    /// Age bracket used for cohort views and narrative context.
    pub fn age_group(&self) -> AgeGroup {
        match self.age {
            90.. => AgeGroup::Nonagenarian,
            80..=89 => AgeGroup::Octogenarian,
            75..=79 => AgeGroup::AdvancedSenior,
            65..=74 => AgeGroup::Senior,
            _ => AgeGroup::Under65,
        }
    }

    /// Medications currently administered.
    pub fn active_medications(&self) -> impl Iterator<Item = &Medication> {
        self.medications.iter().filter(|m| m.active)
    }

    /// Stop administering a medication by name (case-insensitive).
    pub fn discontinue_medication(&mut self, name: &str, end_date: NaiveDate) {
        if let Some(med) = self
            .medications
            .iter_mut()
            .find(|m| m.active && m.name.eq_ignore_ascii_case(name))
        {
            med.active = false;
            med.end_date = Some(end_date);
        }
    }

    /// Days elapsed since admission (negative dates are rejected upstream).
    pub fn days_since_admission(&self, today: NaiveDate) -> i64 {
        (today - self.admission_date).num_days()
    }
}
