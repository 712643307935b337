//! In-memory care store.
//!
//! The scoring core never touches storage; callers fetch records here,
//! run the engine, and hand results to the export layer. Patients are
//! registered once and never deleted; assessment history is append-only
//! per patient and assessments are never edited.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Assessment, Patient};

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Patient not found: {0}")]
    PatientNotFound(Uuid),

    #[error("Patient already registered: {0}")]
    DuplicatePatient(Uuid),
}

/// Storage contract between the caller and the record collections.
pub trait CareStore {
    /// Register a new patient. The id on the record becomes its stable
    /// identity; registering the same id twice is an error.
    fn register_patient(&mut self, patient: Patient) -> Result<(), StoreError>;

    /// Replace the profile of an already-registered patient (conditions,
    /// medications, fall-risk history and cognitive level change over time).
    fn update_patient(&mut self, patient: Patient) -> Result<(), StoreError>;

    fn patient(&self, id: Uuid) -> Option<&Patient>;

    /// All registered patients, ordered by name.
    fn patients(&self) -> Vec<&Patient>;

    /// Append one assessment. The referenced patient must exist; the
    /// patient's last-assessment date is advanced when this snapshot is
    /// the most recent one.
    fn record_assessment(&mut self, assessment: Assessment) -> Result<(), StoreError>;

    /// A patient's history in chronological order.
    fn assessments_for(&self, patient_id: Uuid) -> Vec<&Assessment>;

    /// Most recent assessment, if any.
    fn latest_assessment(&self, patient_id: Uuid) -> Option<&Assessment>;

    /// The assessment immediately before the latest one; the pair feeds
    /// the trend analyzer.
    fn previous_assessment(&self, patient_id: Uuid) -> Option<&Assessment>;
}

/// Process-local store backing a single dashboard session.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    patients: HashMap<Uuid, Patient>,
    assessments: Vec<Assessment>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_history(&self, patient_id: Uuid) -> Vec<&Assessment> {
        let mut history: Vec<&Assessment> = self
            .assessments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .collect();
        history.sort_by_key(|a| (a.date, a.time));
        history
    }
}

impl CareStore for InMemoryStore {
    fn register_patient(&mut self, patient: Patient) -> Result<(), StoreError> {
        if self.patients.contains_key(&patient.id) {
            return Err(StoreError::DuplicatePatient(patient.id));
        }
        tracing::info!(patient_id = %patient.id, name = %patient.name, "patient registered");
        self.patients.insert(patient.id, patient);
        Ok(())
    }

    fn update_patient(&mut self, patient: Patient) -> Result<(), StoreError> {
        if !self.patients.contains_key(&patient.id) {
            return Err(StoreError::PatientNotFound(patient.id));
        }
        self.patients.insert(patient.id, patient);
        Ok(())
    }

    fn patient(&self, id: Uuid) -> Option<&Patient> {
        self.patients.get(&id)
    }

    fn patients(&self) -> Vec<&Patient> {
        let mut all: Vec<&Patient> = self.patients.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    fn record_assessment(&mut self, assessment: Assessment) -> Result<(), StoreError> {
        let patient = self
            .patients
            .get_mut(&assessment.patient_id)
            .ok_or(StoreError::PatientNotFound(assessment.patient_id))?;

        if patient.last_assessment_date.map_or(true, |d| d <= assessment.date) {
            patient.last_assessment_date = Some(assessment.date);
        }
        tracing::debug!(
            patient_id = %assessment.patient_id,
            assessment_id = %assessment.id,
            date = %assessment.date,
            "assessment recorded"
        );
        self.assessments.push(assessment);
        Ok(())
    }

    fn assessments_for(&self, patient_id: Uuid) -> Vec<&Assessment> {
        self.sorted_history(patient_id)
    }

    fn latest_assessment(&self, patient_id: Uuid) -> Option<&Assessment> {
        self.sorted_history(patient_id).last().copied()
    }

    fn previous_assessment(&self, patient_id: Uuid) -> Option<&Assessment> {
        let history = self.sorted_history(patient_id);
        history.len().checked_sub(2).map(|i| history[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{CognitiveLevel, FallRisk, Gender};
    use crate::models::{Conditions, GeneralStatus, VitalSigns};
    use chrono::{NaiveDate, NaiveTime};

    fn make_patient(name: &str) -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: name.into(),
            age: 81,
            gender: Gender::Female,
            room: "210".into(),
            admission_date: NaiveDate::from_ymd_opt(2025, 5, 14).unwrap(),
            emergency_contact: String::new(),
            allergies: String::new(),
            medical_history: String::new(),
            conditions: Conditions::default(),
            fall_risk_history: FallRisk::Medium,
            cognitive_level: CognitiveLevel::Normal,
            medications: Vec::new(),
            last_assessment_date: None,
        }
    }

    fn make_assessment(patient_id: Uuid, day: u32, hour: u32) -> Assessment {
        Assessment {
            id: Uuid::new_v4(),
            patient_id,
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            vital_signs: VitalSigns::default(),
            general_status: GeneralStatus::default(),
            symptoms: Vec::new(),
            observations: String::new(),
            evaluator_name: "I. Bravo".into(),
        }
    }

    #[test]
    fn register_and_fetch_patient() {
        let mut store = InMemoryStore::new();
        let patient = make_patient("Aurora Gil");
        let id = patient.id;
        store.register_patient(patient).unwrap();
        assert_eq!(store.patient(id).unwrap().name, "Aurora Gil");
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut store = InMemoryStore::new();
        let patient = make_patient("Aurora Gil");
        let id = patient.id;
        store.register_patient(patient.clone()).unwrap();
        assert_eq!(
            store.register_patient(patient),
            Err(StoreError::DuplicatePatient(id))
        );
    }

    #[test]
    fn update_requires_existing_patient() {
        let mut store = InMemoryStore::new();
        let patient = make_patient("Aurora Gil");
        assert_eq!(
            store.update_patient(patient.clone()),
            Err(StoreError::PatientNotFound(patient.id))
        );
        store.register_patient(patient.clone()).unwrap();
        let mut updated = patient;
        updated.fall_risk_history = FallRisk::High;
        store.update_patient(updated.clone()).unwrap();
        assert_eq!(
            store.patient(updated.id).unwrap().fall_risk_history,
            FallRisk::High
        );
    }

    #[test]
    fn patients_listed_by_name() {
        let mut store = InMemoryStore::new();
        store.register_patient(make_patient("Rosa Marin")).unwrap();
        store.register_patient(make_patient("Andres Soto")).unwrap();
        let names: Vec<&str> = store.patients().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Andres Soto", "Rosa Marin"]);
    }

    #[test]
    fn assessment_for_unknown_patient_rejected() {
        let mut store = InMemoryStore::new();
        let orphan = make_assessment(Uuid::new_v4(), 1, 9);
        let patient_id = orphan.patient_id;
        assert_eq!(
            store.record_assessment(orphan),
            Err(StoreError::PatientNotFound(patient_id))
        );
    }

    #[test]
    fn history_is_chronological() {
        let mut store = InMemoryStore::new();
        let patient = make_patient("Aurora Gil");
        let id = patient.id;
        store.register_patient(patient).unwrap();

        // Recorded out of order; read back sorted.
        store.record_assessment(make_assessment(id, 3, 9)).unwrap();
        store.record_assessment(make_assessment(id, 1, 9)).unwrap();
        store.record_assessment(make_assessment(id, 2, 18)).unwrap();
        store.record_assessment(make_assessment(id, 2, 8)).unwrap();

        let dates: Vec<(u32, u32)> = store
            .assessments_for(id)
            .iter()
            .map(|a| {
                use chrono::{Datelike, Timelike};
                (a.date.day(), a.time.hour())
            })
            .collect();
        assert_eq!(dates, vec![(1, 9), (2, 8), (2, 18), (3, 9)]);
    }

    #[test]
    fn latest_and_previous_feed_trends() {
        let mut store = InMemoryStore::new();
        let patient = make_patient("Aurora Gil");
        let id = patient.id;
        store.register_patient(patient).unwrap();

        assert!(store.latest_assessment(id).is_none());
        assert!(store.previous_assessment(id).is_none());

        store.record_assessment(make_assessment(id, 1, 9)).unwrap();
        assert!(store.latest_assessment(id).is_some());
        assert!(store.previous_assessment(id).is_none());

        store.record_assessment(make_assessment(id, 2, 9)).unwrap();
        use chrono::Datelike;
        assert_eq!(store.latest_assessment(id).unwrap().date.day(), 2);
        assert_eq!(store.previous_assessment(id).unwrap().date.day(), 1);
    }

    #[test]
    fn last_assessment_date_advances() {
        let mut store = InMemoryStore::new();
        let patient = make_patient("Aurora Gil");
        let id = patient.id;
        store.register_patient(patient).unwrap();

        store.record_assessment(make_assessment(id, 5, 9)).unwrap();
        assert_eq!(
            store.patient(id).unwrap().last_assessment_date,
            Some(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
        );

        // A backfilled older snapshot does not move the date backwards.
        store.record_assessment(make_assessment(id, 2, 9)).unwrap();
        assert_eq!(
            store.patient(id).unwrap().last_assessment_date,
            Some(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap())
        );
    }
}
