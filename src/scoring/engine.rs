//! Analysis orchestrator: runs the severity scorer and the alert generator
//! over one (patient, assessment) pair and assembles the bundle the UI and
//! export layers consume.

use std::time::Instant;

use crate::models::{Assessment, Patient};

use super::alerts;
use super::severity::{self, IMMEDIATE_ATTENTION_SCORE};
use super::types::Analysis;

/// Analyze one assessment in the context of its patient.
///
/// Pure apart from the tracing side channel: the same inputs always produce
/// the same bundle, and nothing here touches storage or the network.
pub fn analyze(patient: &Patient, assessment: &Assessment) -> Analysis {
    let start = Instant::now();

    let severity_score = severity::severity_score(assessment);
    let severity_level = severity::severity_level(severity_score);
    let (alerts, recommendations) = alerts::generate(patient, assessment);

    let requires_immediate_attention = severity_score >= IMMEDIATE_ATTENTION_SCORE
        || alerts
            .iter()
            .any(|a| a.level == super::types::AlertLevel::Critical);

    let analysis = Analysis {
        alerts,
        recommendations,
        severity_score,
        severity_level,
        requires_immediate_attention,
    };

    tracing::info!(
        patient_id = %patient.id,
        assessment_id = %assessment.id,
        score = analysis.severity_score,
        level = %analysis.severity_level,
        critical_alerts = analysis.critical_alert_count(),
        warning_alerts = analysis.warning_alert_count(),
        recommendations = analysis.recommendation_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "assessment analyzed"
    );

    analysis
}
