//! Patient risk classifier: a resident's standing risk level from the
//! profile alone, independent of any single assessment. Recomputed whenever
//! patient data changes; never stored.

use crate::models::enums::{CognitiveLevel, FallRisk, RiskLevel};
use crate::models::Patient;

/// Active-medication count above which polypharmacy contributes.
pub const POLYPHARMACY_THRESHOLD: usize = 5;

/// Additive risk score over the standing profile factors.
pub fn risk_score(patient: &Patient) -> u8 {
    let mut score = 0;

    score += match patient.age {
        85.. => 3,
        80..=84 => 2,
        75..=79 => 1,
        _ => 0,
    };

    score += match patient.cognitive_level {
        CognitiveLevel::SevereImpairment => 4,
        CognitiveLevel::ModerateImpairment => 3,
        CognitiveLevel::MildImpairment => 2,
        CognitiveLevel::Normal => 0,
    };

    score += match patient.fall_risk_history {
        FallRisk::High => 4,
        FallRisk::Medium => 2,
        FallRisk::Low => 1,
    };

    let conditions = &patient.conditions;
    for flag in [
        conditions.dementia,
        conditions.heart_disease,
        conditions.diabetes,
        conditions.depression,
        conditions.mobility_issues,
    ] {
        if flag {
            score += 1;
        }
    }

    if patient.active_medications().count() > POLYPHARMACY_THRESHOLD {
        score += 2;
    }

    score
}

/// Map the risk score to the standing risk level.
pub fn risk_level(patient: &Patient) -> RiskLevel {
    let score = risk_score(patient);
    if score >= 10 {
        RiskLevel::High
    } else if score >= 6 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

impl Patient {
    /// Standing risk level (derived, not stored).
    pub fn risk_level(&self) -> RiskLevel {
        risk_level(self)
    }
}
