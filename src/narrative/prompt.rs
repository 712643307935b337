//! Prompt builders for the narrative provider: serialize a (patient,
//! assessment) pair to the clinical prompt text the model consumes.

use crate::models::{Assessment, Patient};
use crate::scoring;

/// System prompt framing the model as a geriatric specialist assisting
/// residential caregivers.
pub fn system_prompt() -> &'static str {
    "You are a geriatric medicine specialist assisting caregivers in a \
     residential care facility. Always prioritize resident safety, identify \
     situations that require immediate physician contact, use precise but \
     caregiver-accessible terminology, and account for frailty and \
     multimorbidity typical of advanced age. Structure the response as: \
     clinical analysis, risk factors, prioritized recommendations, whether \
     urgent medical attention is required, and a follow-up plan."
}

/// User prompt carrying the resident profile and the current assessment.
pub fn user_prompt(patient: &Patient, assessment: &Assessment) -> String {
    let vitals = &assessment.vital_signs;
    let status = &assessment.general_status;

    let mut text = format!(
        "RESIDENT PROFILE:\n\
         Name: {}\n\
         Age: {} ({})\n\
         Gender: {}\n\
         Room: {}\n\
         Admitted: {}\n\
         Standing risk level: {}\n\
         Cognitive level: {}\n\
         Fall-risk history: {}\n",
        patient.name,
        patient.age,
        patient.age_group().as_str(),
        patient.gender.as_str(),
        patient.room,
        patient.admission_date.format("%d/%m/%Y"),
        scoring::risk_level(patient).as_str(),
        patient.cognitive_level.as_str(),
        patient.fall_risk_history.as_str(),
    );

    text.push_str(&format!(
        "\nKNOWN CONDITIONS: {}\n",
        patient.conditions.summary()
    ));

    if !patient.allergies.is_empty() {
        text.push_str(&format!("KNOWN ALLERGIES: {}\n", patient.allergies));
    }
    if !patient.medical_history.is_empty() {
        text.push_str(&format!("RELEVANT HISTORY: {}\n", patient.medical_history));
    }

    let medications: Vec<String> = patient
        .active_medications()
        .map(|m| format!("{} {} {}", m.name, m.dosage, m.frequency))
        .collect();
    if !medications.is_empty() {
        text.push_str(&format!(
            "CURRENT MEDICATION: {}\n",
            medications.join("; ")
        ));
    }

    text.push_str(&format!(
        "\nCURRENT ASSESSMENT - {} at {}:\n\
         VITAL SIGNS:\n\
         - Blood pressure: {} mmHg\n\
         - Heart rate: {} bpm\n\
         - Temperature: {:.1} \u{b0}C\n\
         - Oxygen saturation: {}%\n\
         - Pain level (0-10): {}\n\
         GENERAL STATUS:\n\
         - Mobility: {}\n\
         - Appetite: {}\n\
         - Sleep quality: {}\n\
         - Mood: {}\n\
         - Apparent cognitive status: {}\n\
         - Continence: {}\n",
        assessment.date.format("%d/%m/%Y"),
        assessment.time.format("%H:%M"),
        vitals.blood_pressure_display(),
        vitals.pulse(),
        vitals.celsius(),
        vitals.spo2(),
        vitals.pain(),
        status.mobility.as_str(),
        status.appetite.as_str(),
        status.sleep_quality.as_str(),
        status.mood.as_str(),
        status.cognitive_status.as_str(),
        status.continence.as_str(),
    ));

    if assessment.symptoms.is_empty() {
        text.push_str("\nOBSERVED SYMPTOMS: none reported\n");
    } else {
        text.push_str("\nOBSERVED SYMPTOMS:\n");
        for symptom in &assessment.symptoms {
            text.push_str(&format!("- {}\n", symptom.label()));
        }
    }

    if !assessment.observations.is_empty() {
        text.push_str(&format!(
            "\nCAREGIVER OBSERVATIONS:\n{}\n",
            assessment.observations
        ));
    }

    text.push_str(&format!("\nAssessed by: {}\n", assessment.evaluator_name));
    text.push_str(
        "\nProvide a complete clinical analysis of this elderly resident. \
         Pay particular attention to vital signs outside the normal range \
         for this age, fall risk and precipitating factors, possible \
         delirium or acute cognitive change, signs of infection or \
         decompensation, and whether urgent physician contact is needed.",
    );

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{CognitiveLevel, FallRisk, Gender, Symptom};
    use crate::models::{Conditions, GeneralStatus, Medication, VitalSigns};
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn make_patient() -> Patient {
        Patient {
            id: Uuid::new_v4(),
            name: "Emilio Serra".into(),
            age: 91,
            gender: Gender::Male,
            room: "115".into(),
            admission_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            emergency_contact: String::new(),
            allergies: "penicillin".into(),
            medical_history: String::new(),
            conditions: Conditions {
                diabetes: true,
                ..Conditions::default()
            },
            fall_risk_history: FallRisk::High,
            cognitive_level: CognitiveLevel::ModerateImpairment,
            medications: vec![Medication {
                name: "Metformin".into(),
                dosage: "850 mg".into(),
                frequency: "twice daily".into(),
                indication: "diabetes".into(),
                prescribed_by: None,
                start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                end_date: None,
                active: true,
            }],
            last_assessment_date: None,
        }
    }

    fn make_assessment() -> Assessment {
        Assessment {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: NaiveTime::from_hms_opt(20, 15, 0).unwrap(),
            vital_signs: VitalSigns {
                temperature: Some(38.2),
                ..VitalSigns::default()
            },
            general_status: GeneralStatus::default(),
            symptoms: vec![Symptom::Confusion],
            observations: "More withdrawn than usual during dinner.".into(),
            evaluator_name: "C. Pardo".into(),
        }
    }

    #[test]
    fn user_prompt_includes_profile_and_assessment() {
        let text = user_prompt(&make_patient(), &make_assessment());
        assert!(text.contains("Emilio Serra"));
        assert!(text.contains("nonagenarian"));
        assert!(text.contains("KNOWN CONDITIONS: diabetes"));
        assert!(text.contains("KNOWN ALLERGIES: penicillin"));
        assert!(text.contains("Metformin 850 mg twice daily"));
        assert!(text.contains("Temperature: 38.2"));
        assert!(text.contains("- confusion"));
        assert!(text.contains("More withdrawn than usual"));
        assert!(text.contains("Assessed by: C. Pardo"));
    }

    #[test]
    fn missing_vitals_fall_back_to_defaults_in_prompt() {
        let mut assessment = make_assessment();
        assessment.vital_signs = VitalSigns::default();
        let text = user_prompt(&make_patient(), &assessment);
        assert!(text.contains("Blood pressure: 120/80 mmHg"));
        assert!(text.contains("Oxygen saturation: 98%"));
    }

    #[test]
    fn system_prompt_mentions_safety() {
        assert!(system_prompt().contains("safety"));
    }
}
