use crate::models::enums::{CognitiveStatus, Mood, Symptom};

/// Token prefixed to recommendations that require immediate action.
pub const URGENT_PREFIX: &str = "URGENT: ";

/// Message template builder for consistent caregiver-facing wording.
/// Alert messages name the finding and the reading; recommendations name
/// the next action. Urgent recommendations carry the URGENT prefix so the
/// UI and reports can surface them without parsing free text.
pub struct MessageTemplates;

impl MessageTemplates {
    // ── Blood pressure ──────────────────────────────────────

    pub fn hypertensive_crisis(systolic: u16, diastolic: u16) -> String {
        format!("Hypertensive crisis: BP {systolic}/{diastolic} mmHg")
    }

    pub fn severe_hypertension(systolic: u16, diastolic: u16) -> String {
        format!("Severe hypertension: BP {systolic}/{diastolic} mmHg")
    }

    pub fn hypertension(systolic: u16, diastolic: u16) -> String {
        format!("Hypertension: BP {systolic}/{diastolic} mmHg")
    }

    pub fn hypotension(systolic: u16, diastolic: u16) -> String {
        format!("Hypotension: BP {systolic}/{diastolic} mmHg")
    }

    pub fn rec_crisis() -> String {
        format!("{URGENT_PREFIX}Contact physician immediately - hypertensive crisis")
    }

    pub fn rec_severe_hypertension() -> String {
        "Contact physician to adjust antihypertensive medication".to_string()
    }

    pub fn rec_hypertension() -> String {
        "Monitor blood pressure more frequently".to_string()
    }

    pub fn rec_hypotension() -> String {
        "Watch for dizziness and fall risk".to_string()
    }

    // ── Heart rate ──────────────────────────────────────────

    pub fn tachycardia(bpm: u16) -> String {
        format!("Tachycardia: {bpm} bpm")
    }

    pub fn bradycardia(bpm: u16) -> String {
        format!("Bradycardia: {bpm} bpm")
    }

    pub fn rec_tachycardia() -> String {
        "Evaluate causes of tachycardia (pain, anxiety, medication)".to_string()
    }

    pub fn rec_bradycardia() -> String {
        "Review medication that may cause bradycardia".to_string()
    }

    // ── Temperature ─────────────────────────────────────────

    pub fn high_fever(celsius: f64) -> String {
        format!("High fever: {celsius:.1} \u{b0}C")
    }

    pub fn low_grade_fever(celsius: f64) -> String {
        format!("Low-grade fever: {celsius:.1} \u{b0}C")
    }

    pub fn hypothermia(celsius: f64) -> String {
        format!("Hypothermia: {celsius:.1} \u{b0}C")
    }

    pub fn rec_high_fever() -> String {
        format!("{URGENT_PREFIX}Search for infectious source - contact physician")
    }

    pub fn rec_low_grade_fever() -> String {
        "Monitor temperature evolution and watch for signs of infection".to_string()
    }

    pub fn rec_hypothermia() -> String {
        "Apply warming measures and evaluate causes".to_string()
    }

    // ── Oxygen saturation ───────────────────────────────────

    pub fn severe_hypoxemia(percent: u8) -> String {
        format!("Severe hypoxemia: SpO2 {percent}%")
    }

    pub fn hypoxemia(percent: u8) -> String {
        format!("Hypoxemia: SpO2 {percent}%")
    }

    pub fn rec_severe_hypoxemia() -> String {
        format!("{URGENT_PREFIX}Administer oxygen immediately - contact physician")
    }

    pub fn rec_hypoxemia() -> String {
        "Evaluate need for oxygen therapy".to_string()
    }

    // ── Pain ────────────────────────────────────────────────

    pub fn severe_pain(level: u8) -> String {
        format!("Severe pain: {level}/10")
    }

    pub fn moderate_pain(level: u8) -> String {
        format!("Moderate to severe pain: {level}/10")
    }

    pub fn rec_severe_pain() -> String {
        format!("{URGENT_PREFIX}Urgent analgesia - evaluate source of pain")
    }

    pub fn rec_moderate_pain() -> String {
        "Optimize analgesia per protocol".to_string()
    }

    // ── General status ──────────────────────────────────────

    pub fn immobility() -> String {
        "Patient immobile - risk of complications".to_string()
    }

    pub fn rec_immobility() -> String {
        "Postural changes every 2 hours, physiotherapy, pressure ulcer prevention".to_string()
    }

    pub fn poor_appetite() -> String {
        "Poor appetite - nutritional risk".to_string()
    }

    pub fn rec_poor_appetite() -> String {
        "Nutritional assessment and appetite stimulation measures".to_string()
    }

    pub fn low_mood(mood: Mood) -> String {
        format!("Mood: {} - assess for depression", mood.as_str())
    }

    pub fn rec_low_mood() -> String {
        "Consider psychological evaluation and therapeutic activities".to_string()
    }

    pub fn agitation() -> String {
        "Agitation - evaluate causes".to_string()
    }

    pub fn rec_agitation() -> String {
        "Investigate causes of agitation (pain, infection, medication)".to_string()
    }

    pub fn altered_cognition(status: CognitiveStatus) -> String {
        format!("Altered cognitive status: {}", status.as_str())
    }

    pub fn rec_altered_cognition() -> String {
        "Evaluate for delirium - search for reversible causes".to_string()
    }

    // ── Symptoms ────────────────────────────────────────────

    pub fn critical_symptom(symptom: Symptom) -> String {
        format!("Critical symptom: {}", symptom.label())
    }

    pub fn warning_symptom(symptom: Symptom) -> String {
        format!("Symptom to monitor: {}", symptom.label())
    }

    pub fn rec_chest_pain() -> String {
        format!("{URGENT_PREFIX}Chest pain protocol - ECG and cardiac enzymes")
    }

    pub fn rec_respiratory_distress() -> String {
        format!("{URGENT_PREFIX}Urgent respiratory evaluation - blood gas analysis")
    }

    pub fn rec_recent_falls() -> String {
        format!("{URGENT_PREFIX}Neurological evaluation - post-fall protocol")
    }

    // ── Patient cross-checks ────────────────────────────────

    pub fn rec_diabetic_fever() -> String {
        "Diabetic patient with fever - strict glucose monitoring".to_string()
    }

    pub fn rec_cardiac_tachycardia() -> String {
        "Known heart disease with tachycardia - ECG monitoring".to_string()
    }

    pub fn rec_high_risk_patient() -> String {
        "High-risk patient - close monitoring".to_string()
    }
}
