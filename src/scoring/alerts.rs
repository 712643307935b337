//! Alert & recommendation generator: walks the same vital, status and
//! symptom data as the severity scorer and emits an ordered list of alerts
//! plus recommendation strings.
//!
//! Ordering is part of the contract: blood pressure, heart rate,
//! temperature, oxygen saturation, pain, then the general-status checks
//! (mobility, appetite, mood, cognitive status), then symptom alerts in
//! the order the caregiver recorded them. Patient-specific cross-checks
//! run last and add recommendations without further alerts. Nothing is
//! ever dropped; a condition triggered independently by a vital rule and
//! a symptom rule appears twice.

use crate::models::enums::{Appetite, CognitiveStatus, Mobility, Mood, Symptom};
use crate::models::{Assessment, Patient};

use super::bands::{self, VitalBand};
use super::messages::MessageTemplates;
use super::risk;
use super::severity::{CRITICAL_SYMPTOMS, WARNING_SYMPTOMS};
use super::types::Alert;

/// Generate the ordered alerts and recommendations for one assessment.
pub fn generate(patient: &Patient, assessment: &Assessment) -> (Vec<Alert>, Vec<String>) {
    let mut alerts = Vec::new();
    let mut recommendations = Vec::new();

    vital_sign_checks(assessment, &mut alerts, &mut recommendations);
    general_status_checks(assessment, &mut alerts, &mut recommendations);
    symptom_checks(assessment, &mut alerts, &mut recommendations);
    patient_cross_checks(patient, assessment, &mut recommendations);

    (alerts, recommendations)
}

fn vital_sign_checks(
    assessment: &Assessment,
    alerts: &mut Vec<Alert>,
    recommendations: &mut Vec<String>,
) {
    let vitals = &assessment.vital_signs;
    let systolic = vitals.systolic();
    let diastolic = vitals.diastolic();

    // Hypertensive direction: one alert at the most severe tier reached by
    // either measurement.
    match (bands::systolic(systolic), bands::diastolic(diastolic)) {
        (VitalBand::SevereHigh, _) | (_, VitalBand::SevereHigh) => {
            alerts.push(Alert::critical(MessageTemplates::hypertensive_crisis(
                systolic, diastolic,
            )));
            recommendations.push(MessageTemplates::rec_crisis());
        }
        (VitalBand::High, _) | (_, VitalBand::High) => {
            alerts.push(Alert::warning(MessageTemplates::severe_hypertension(
                systolic, diastolic,
            )));
            recommendations.push(MessageTemplates::rec_severe_hypertension());
        }
        (VitalBand::Borderline, _) | (_, VitalBand::Borderline) => {
            alerts.push(Alert::warning(MessageTemplates::hypertension(
                systolic, diastolic,
            )));
            recommendations.push(MessageTemplates::rec_hypertension());
        }
        _ => {}
    }

    // Hypotensive direction is checked independently of the hypertensive
    // cascade: a low reading on one measurement can coexist with a high
    // reading on the other.
    if bands::systolic(systolic) == VitalBand::Low
        || bands::diastolic(diastolic) == VitalBand::Low
    {
        alerts.push(Alert::warning(MessageTemplates::hypotension(
            systolic, diastolic,
        )));
        recommendations.push(MessageTemplates::rec_hypotension());
    }

    let pulse = vitals.pulse();
    match bands::heart_rate(pulse) {
        VitalBand::SevereHigh => {
            alerts.push(Alert::critical(MessageTemplates::tachycardia(pulse)));
            recommendations.push(MessageTemplates::rec_tachycardia());
        }
        VitalBand::High => {
            alerts.push(Alert::warning(MessageTemplates::tachycardia(pulse)));
            recommendations.push(MessageTemplates::rec_tachycardia());
        }
        VitalBand::SevereLow => {
            alerts.push(Alert::warning(MessageTemplates::bradycardia(pulse)));
            recommendations.push(MessageTemplates::rec_bradycardia());
        }
        _ => {}
    }

    let celsius = vitals.celsius();
    match bands::temperature(celsius) {
        VitalBand::SevereHigh => {
            alerts.push(Alert::critical(MessageTemplates::high_fever(celsius)));
            recommendations.push(MessageTemplates::rec_high_fever());
        }
        VitalBand::High => {
            alerts.push(Alert::warning(MessageTemplates::low_grade_fever(celsius)));
            recommendations.push(MessageTemplates::rec_low_grade_fever());
        }
        VitalBand::Low => {
            alerts.push(Alert::warning(MessageTemplates::hypothermia(celsius)));
            recommendations.push(MessageTemplates::rec_hypothermia());
        }
        _ => {}
    }

    let spo2 = vitals.spo2();
    match bands::oxygen_saturation(spo2) {
        VitalBand::SevereLow => {
            alerts.push(Alert::critical(MessageTemplates::severe_hypoxemia(spo2)));
            recommendations.push(MessageTemplates::rec_severe_hypoxemia());
        }
        VitalBand::Low => {
            alerts.push(Alert::warning(MessageTemplates::hypoxemia(spo2)));
            recommendations.push(MessageTemplates::rec_hypoxemia());
        }
        _ => {}
    }

    let pain = vitals.pain();
    match bands::pain(pain) {
        VitalBand::SevereHigh => {
            alerts.push(Alert::critical(MessageTemplates::severe_pain(pain)));
            recommendations.push(MessageTemplates::rec_severe_pain());
        }
        VitalBand::High => {
            alerts.push(Alert::warning(MessageTemplates::moderate_pain(pain)));
            recommendations.push(MessageTemplates::rec_moderate_pain());
        }
        _ => {}
    }
}

fn general_status_checks(
    assessment: &Assessment,
    alerts: &mut Vec<Alert>,
    recommendations: &mut Vec<String>,
) {
    let status = &assessment.general_status;

    if status.mobility == Mobility::Immobile {
        alerts.push(Alert::warning(MessageTemplates::immobility()));
        recommendations.push(MessageTemplates::rec_immobility());
    }

    if status.appetite == Appetite::Poor {
        alerts.push(Alert::warning(MessageTemplates::poor_appetite()));
        recommendations.push(MessageTemplates::rec_poor_appetite());
    }

    match status.mood {
        Mood::Sad | Mood::Apathetic => {
            alerts.push(Alert::warning(MessageTemplates::low_mood(status.mood)));
            recommendations.push(MessageTemplates::rec_low_mood());
        }
        Mood::Agitated => {
            alerts.push(Alert::warning(MessageTemplates::agitation()));
            recommendations.push(MessageTemplates::rec_agitation());
        }
        _ => {}
    }

    if matches!(
        status.cognitive_status,
        CognitiveStatus::Confused | CognitiveStatus::Agitated
    ) {
        alerts.push(Alert::warning(MessageTemplates::altered_cognition(
            status.cognitive_status,
        )));
        recommendations.push(MessageTemplates::rec_altered_cognition());
    }
}

fn symptom_checks(
    assessment: &Assessment,
    alerts: &mut Vec<Alert>,
    recommendations: &mut Vec<String>,
) {
    for &symptom in &assessment.symptoms {
        if CRITICAL_SYMPTOMS.contains(&symptom) {
            alerts.push(Alert::critical(MessageTemplates::critical_symptom(symptom)));
            match symptom {
                Symptom::ChestPain => recommendations.push(MessageTemplates::rec_chest_pain()),
                Symptom::RespiratoryDistress => {
                    recommendations.push(MessageTemplates::rec_respiratory_distress())
                }
                Symptom::RecentFalls => {
                    recommendations.push(MessageTemplates::rec_recent_falls())
                }
                _ => {}
            }
        } else if WARNING_SYMPTOMS.contains(&symptom) {
            alerts.push(Alert::warning(MessageTemplates::warning_symptom(symptom)));
        }
    }
}

/// Condition-specific cross-checks: extra recommendations, no extra alerts.
fn patient_cross_checks(
    patient: &Patient,
    assessment: &Assessment,
    recommendations: &mut Vec<String>,
) {
    let vitals = &assessment.vital_signs;

    if patient.conditions.diabetes && vitals.celsius() > 37.5 {
        recommendations.push(MessageTemplates::rec_diabetic_fever());
    }
    if patient.conditions.heart_disease && vitals.pulse() > 100 {
        recommendations.push(MessageTemplates::rec_cardiac_tachycardia());
    }
    if risk::risk_level(patient) == crate::models::enums::RiskLevel::High {
        recommendations.push(MessageTemplates::rec_high_risk_patient());
    }
}
