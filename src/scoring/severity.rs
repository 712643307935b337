//! Severity scorer: aggregates vital-sign bands, general-status observations
//! and symptom flags into one 0-20 score and its categorical level.
//!
//! Deterministic additive accumulation. Within a single vital only the
//! highest tier reached contributes, so points are never double-counted
//! across tiers of the same measurement; distinct vitals always combine.
//! For blood pressure the hypertensive direction contributes once at the
//! most severe tier reached by either measurement, and a hypotensive
//! reading on either measurement adds its own contribution.

use crate::models::enums::{Appetite, CognitiveStatus, Mobility, Mood, Symptom};
use crate::models::{Assessment, GeneralStatus, VitalSigns};

use super::bands::{self, VitalBand};
use super::types::SeverityLevel;

/// Scores are clamped to this ceiling.
pub const MAX_SCORE: u8 = 20;

/// Score at or above which an assessment requires immediate attention.
pub const IMMEDIATE_ATTENTION_SCORE: u8 = 6;

/// Symptoms that demand escalation on their own.
pub const CRITICAL_SYMPTOMS: &[Symptom] = &[
    Symptom::RespiratoryDistress,
    Symptom::ChestPain,
    Symptom::RecentFalls,
];

/// Symptoms that warrant monitoring.
pub const WARNING_SYMPTOMS: &[Symptom] = &[
    Symptom::Confusion,
    Symptom::Agitation,
    Symptom::Nausea,
    Symptom::Vomiting,
    Symptom::Dizziness,
];

/// Compute the 0-20 severity score for one assessment.
pub fn severity_score(assessment: &Assessment) -> u8 {
    let raw = vital_points(&assessment.vital_signs)
        + status_points(&assessment.general_status)
        + symptom_points(&assessment.symptoms);
    raw.min(u16::from(MAX_SCORE)) as u8
}

/// Map a (clamped) score to its categorical level.
pub fn severity_level(score: u8) -> SeverityLevel {
    if score >= 10 {
        SeverityLevel::Critical
    } else if score >= 6 {
        SeverityLevel::High
    } else if score >= 3 {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Low
    }
}

impl Assessment {
    /// Severity score of this snapshot (derived, not stored).
    pub fn severity_score(&self) -> u8 {
        severity_score(self)
    }

    /// Severity level of this snapshot (derived, not stored).
    pub fn severity_level(&self) -> SeverityLevel {
        severity_level(severity_score(self))
    }
}

fn vital_points(vitals: &VitalSigns) -> u16 {
    blood_pressure_points(vitals.systolic(), vitals.diastolic())
        + heart_rate_points(vitals.pulse())
        + temperature_points(vitals.celsius())
        + oxygen_points(vitals.spo2())
        + pain_points(vitals.pain())
}

/// Hypertensive contribution at the most severe tier reached by either
/// measurement, plus a hypotensive contribution when either measurement is
/// low. The two directions necessarily come from different measurements,
/// so they combine.
pub(crate) fn blood_pressure_points(systolic: u16, diastolic: u16) -> u16 {
    let sys = bands::systolic(systolic);
    let dia = bands::diastolic(diastolic);

    let hypertensive = high_side_points(sys).max(high_side_points(dia));
    let hypotensive = if sys == VitalBand::Low || dia == VitalBand::Low {
        3
    } else {
        0
    };
    hypertensive + hypotensive
}

fn high_side_points(band: VitalBand) -> u16 {
    match band {
        VitalBand::SevereHigh => 4,
        VitalBand::High => 3,
        VitalBand::Borderline => 2,
        _ => 0,
    }
}

fn heart_rate_points(bpm: u16) -> u16 {
    match bands::heart_rate(bpm) {
        VitalBand::SevereHigh => 3,
        VitalBand::High | VitalBand::SevereLow => 2,
        _ => 0,
    }
}

fn temperature_points(celsius: f64) -> u16 {
    match bands::temperature(celsius) {
        VitalBand::SevereHigh => 3,
        VitalBand::High | VitalBand::Low => 2,
        _ => 0,
    }
}

fn oxygen_points(percent: u8) -> u16 {
    match bands::oxygen_saturation(percent) {
        VitalBand::SevereLow => 4,
        VitalBand::Low => 3,
        _ => 0,
    }
}

fn pain_points(level: u8) -> u16 {
    match bands::pain(level) {
        VitalBand::SevereHigh => 3,
        VitalBand::High => 2,
        _ => 0,
    }
}

fn status_points(status: &GeneralStatus) -> u16 {
    let mut points = 0;
    if status.mobility == Mobility::Immobile {
        points += 2;
    }
    if status.appetite == Appetite::Poor {
        points += 1;
    }
    points += match status.mood {
        Mood::Sad | Mood::Apathetic => 1,
        Mood::Agitated => 2,
        _ => 0,
    };
    if matches!(
        status.cognitive_status,
        CognitiveStatus::Confused | CognitiveStatus::Agitated
    ) {
        points += 2;
    }
    points
}

fn symptom_points(symptoms: &[Symptom]) -> u16 {
    symptoms
        .iter()
        .map(|s| {
            if CRITICAL_SYMPTOMS.contains(s) {
                3
            } else if WARNING_SYMPTOMS.contains(s) {
                1
            } else {
                0
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{SleepQuality, Continence};
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn make_assessment(vitals: VitalSigns, status: GeneralStatus, symptoms: Vec<Symptom>) -> Assessment {
        Assessment {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            vital_signs: vitals,
            general_status: status,
            symptoms,
            observations: String::new(),
            evaluator_name: "R. Ortega".into(),
        }
    }

    fn normal_assessment() -> Assessment {
        make_assessment(
            VitalSigns {
                systolic_bp: Some(120),
                diastolic_bp: Some(80),
                heart_rate: Some(72),
                temperature: Some(36.5),
                oxygen_saturation: Some(98),
                pain_level: Some(0),
            },
            GeneralStatus::default(),
            Vec::new(),
        )
    }

    #[test]
    fn normal_vitals_score_zero() {
        let assessment = normal_assessment();
        assert_eq!(severity_score(&assessment), 0);
        assert_eq!(assessment.severity_level(), SeverityLevel::Low);
    }

    #[test]
    fn absent_vitals_score_zero() {
        let assessment = make_assessment(VitalSigns::default(), GeneralStatus::default(), vec![]);
        assert_eq!(severity_score(&assessment), 0);
    }

    #[test]
    fn hypertensive_crisis_contributes_four() {
        // Both measurements in crisis still count once for the pair.
        assert_eq!(blood_pressure_points(190, 115), 4);
        assert_eq!(blood_pressure_points(190, 80), 4);
        assert_eq!(blood_pressure_points(120, 115), 4);
    }

    #[test]
    fn blood_pressure_tiers() {
        assert_eq!(blood_pressure_points(165, 80), 3);
        assert_eq!(blood_pressure_points(120, 105), 3);
        assert_eq!(blood_pressure_points(145, 80), 2);
        assert_eq!(blood_pressure_points(120, 95), 2);
        assert_eq!(blood_pressure_points(120, 80), 0);
    }

    #[test]
    fn hypotension_contributes_three() {
        assert_eq!(blood_pressure_points(85, 80), 3);
        assert_eq!(blood_pressure_points(120, 55), 3);
        // Hypertensive systolic plus hypotensive diastolic combine.
        assert_eq!(blood_pressure_points(190, 55), 7);
    }

    #[test]
    fn heart_rate_tiers() {
        let mut assessment = normal_assessment();
        assessment.vital_signs.heart_rate = Some(155);
        assert_eq!(severity_score(&assessment), 3);
        assessment.vital_signs.heart_rate = Some(130);
        assert_eq!(severity_score(&assessment), 2);
        assessment.vital_signs.heart_rate = Some(150);
        assert_eq!(severity_score(&assessment), 2);
        assessment.vital_signs.heart_rate = Some(49);
        assert_eq!(severity_score(&assessment), 2);
        assessment.vital_signs.heart_rate = Some(55);
        assert_eq!(severity_score(&assessment), 0);
        assessment.vital_signs.heart_rate = Some(110);
        assert_eq!(severity_score(&assessment), 0);
    }

    #[test]
    fn temperature_tiers() {
        let mut assessment = normal_assessment();
        assessment.vital_signs.temperature = Some(39.0);
        assert_eq!(severity_score(&assessment), 3);
        assessment.vital_signs.temperature = Some(38.0);
        assert_eq!(severity_score(&assessment), 2);
        assessment.vital_signs.temperature = Some(35.5);
        assert_eq!(severity_score(&assessment), 2);
    }

    #[test]
    fn hypoxemia_tiers() {
        let mut assessment = normal_assessment();
        assessment.vital_signs.oxygen_saturation = Some(88);
        assert_eq!(severity_score(&assessment), 4);
        assert!(assessment.severity_level() >= SeverityLevel::Moderate);
        assessment.vital_signs.oxygen_saturation = Some(93);
        assert_eq!(severity_score(&assessment), 3);
    }

    #[test]
    fn pain_tiers() {
        let mut assessment = normal_assessment();
        assessment.vital_signs.pain_level = Some(9);
        assert_eq!(severity_score(&assessment), 3);
        assessment.vital_signs.pain_level = Some(6);
        assert_eq!(severity_score(&assessment), 2);
        assessment.vital_signs.pain_level = Some(4);
        assert_eq!(severity_score(&assessment), 0);
    }

    #[test]
    fn status_observations_accumulate() {
        let status = GeneralStatus {
            mobility: Mobility::Immobile,
            appetite: Appetite::Poor,
            sleep_quality: SleepQuality::Poor,
            mood: Mood::Agitated,
            cognitive_status: CognitiveStatus::Confused,
            continence: Continence::TotalIncontinence,
        };
        let assessment = make_assessment(
            VitalSigns {
                systolic_bp: Some(120),
                diastolic_bp: Some(80),
                heart_rate: Some(72),
                temperature: Some(36.5),
                oxygen_saturation: Some(98),
                pain_level: Some(0),
            },
            status,
            vec![],
        );
        // 2 (immobile) + 1 (appetite) + 2 (agitated) + 2 (confused)
        assert_eq!(severity_score(&assessment), 7);
        assert_eq!(assessment.severity_level(), SeverityLevel::High);
    }

    #[test]
    fn sad_and_apathetic_mood_add_one() {
        let mut assessment = normal_assessment();
        assessment.general_status.mood = Mood::Sad;
        assert_eq!(severity_score(&assessment), 1);
        assessment.general_status.mood = Mood::Apathetic;
        assert_eq!(severity_score(&assessment), 1);
        assessment.general_status.mood = Mood::Cheerful;
        assert_eq!(severity_score(&assessment), 0);
    }

    #[test]
    fn symptoms_accumulate_per_occurrence() {
        let mut assessment = normal_assessment();
        assessment.symptoms = vec![Symptom::ChestPain, Symptom::RecentFalls];
        assert_eq!(severity_score(&assessment), 6);
        assessment.symptoms = vec![Symptom::Nausea, Symptom::Vomiting, Symptom::Dizziness];
        assert_eq!(severity_score(&assessment), 3);
        // Symptoms outside both sets do not score.
        assessment.symptoms = vec![Symptom::Cough, Symptom::Constipation];
        assert_eq!(severity_score(&assessment), 0);
    }

    #[test]
    fn score_clamps_at_twenty() {
        let status = GeneralStatus {
            mobility: Mobility::Immobile,
            appetite: Appetite::Poor,
            sleep_quality: SleepQuality::Poor,
            mood: Mood::Agitated,
            cognitive_status: CognitiveStatus::Confused,
            continence: Continence::TotalIncontinence,
        };
        let assessment = make_assessment(
            VitalSigns {
                systolic_bp: Some(195),
                diastolic_bp: Some(50),
                heart_rate: Some(160),
                temperature: Some(39.5),
                oxygen_saturation: Some(85),
                pain_level: Some(9),
            },
            status,
            vec![
                Symptom::RespiratoryDistress,
                Symptom::ChestPain,
                Symptom::RecentFalls,
                Symptom::Confusion,
            ],
        );
        assert_eq!(severity_score(&assessment), MAX_SCORE);
        assert_eq!(assessment.severity_level(), SeverityLevel::Critical);
    }

    #[test]
    fn level_breakpoints() {
        assert_eq!(severity_level(0), SeverityLevel::Low);
        assert_eq!(severity_level(2), SeverityLevel::Low);
        assert_eq!(severity_level(3), SeverityLevel::Moderate);
        assert_eq!(severity_level(5), SeverityLevel::Moderate);
        assert_eq!(severity_level(6), SeverityLevel::High);
        assert_eq!(severity_level(9), SeverityLevel::High);
        assert_eq!(severity_level(10), SeverityLevel::Critical);
        assert_eq!(severity_level(20), SeverityLevel::Critical);
    }

    #[test]
    fn score_monotone_in_systolic_pressure() {
        let mut previous = 0;
        for systolic in [120u16, 141, 161, 181, 200] {
            let mut assessment = normal_assessment();
            assessment.vital_signs.systolic_bp = Some(systolic);
            let score = severity_score(&assessment);
            assert!(score >= previous, "score dropped at systolic {systolic}");
            previous = score;
        }
    }

    #[test]
    fn score_monotone_in_oxygen_desaturation() {
        let mut previous = 0;
        for spo2 in [98u8, 94, 89] {
            let mut assessment = normal_assessment();
            assessment.vital_signs.oxygen_saturation = Some(spo2);
            let score = severity_score(&assessment);
            assert!(score >= previous, "score dropped at SpO2 {spo2}");
            previous = score;
        }
    }
}
