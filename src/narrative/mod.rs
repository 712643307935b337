//! Optional clinical-narrative collaborator.
//!
//! A narrative provider turns a (patient, assessment) pair into free-text
//! prose for the caregiver. The provider is a black box that may be absent
//! or fail; the deterministic scoring path never depends on it, and its
//! output never feeds back into scores or urgency. When no provider is
//! reachable, callers use [`fallback_narrative`], which only assembles the
//! results the engine already computed.

pub mod ollama;
pub mod prompt;

use thiserror::Error;

use crate::models::{Assessment, Patient};
use crate::scoring::types::{AlertLevel, Analysis};

pub use ollama::OllamaNarrative;

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Cannot reach narrative service at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Narrative service returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to parse narrative response: {0}")]
    ResponseParsing(String),

    #[error("No narrative model available")]
    NoModelAvailable,
}

/// A source of supplementary clinical prose.
pub trait NarrativeProvider {
    fn clinical_narrative(
        &self,
        patient: &Patient,
        assessment: &Assessment,
    ) -> Result<String, NarrativeError>;
}

/// Deterministic narrative assembled from the analysis bundle.
///
/// Used whenever the provider is absent or errors out. Contains nothing
/// that was not already computed by the scoring engine.
pub fn fallback_narrative(
    patient: &Patient,
    assessment: &Assessment,
    analysis: &Analysis,
) -> String {
    let vitals = &assessment.vital_signs;
    let status = &assessment.general_status;

    let mut text = format!(
        "CLINICAL ASSESSMENT SUMMARY - {} at {}\n\
         Resident: {} (room {}, age {})\n\
         Severity: {} (score {}/20)\n",
        assessment.date.format("%d/%m/%Y"),
        assessment.time.format("%H:%M"),
        patient.name,
        patient.room,
        patient.age,
        analysis.severity_level.as_str(),
        analysis.severity_score,
    );

    text.push_str(&format!(
        "\nVITAL SIGNS:\n\
         - Blood pressure: {} mmHg\n\
         - Heart rate: {} bpm\n\
         - Temperature: {:.1} \u{b0}C\n\
         - Oxygen saturation: {}%\n\
         - Pain: {}/10\n",
        vitals.blood_pressure_display(),
        vitals.pulse(),
        vitals.celsius(),
        vitals.spo2(),
        vitals.pain(),
    ));

    text.push_str(&format!(
        "\nGENERAL STATUS:\n\
         - Mobility: {}\n\
         - Appetite: {}\n\
         - Sleep: {}\n\
         - Mood: {}\n\
         - Cognition: {}\n",
        status.mobility.as_str(),
        status.appetite.as_str(),
        status.sleep_quality.as_str(),
        status.mood.as_str(),
        status.cognitive_status.as_str(),
    ));

    let critical: Vec<&str> = analysis
        .alerts
        .iter()
        .filter(|a| a.level == AlertLevel::Critical)
        .map(|a| a.message.as_str())
        .collect();
    let warnings: Vec<&str> = analysis
        .alerts
        .iter()
        .filter(|a| a.level == AlertLevel::Warning)
        .map(|a| a.message.as_str())
        .collect();

    if !critical.is_empty() {
        text.push_str("\nCRITICAL ALERTS - IMMEDIATE ACTION:\n");
        for message in &critical {
            text.push_str(&format!("- {message}\n"));
        }
    }
    if !warnings.is_empty() {
        text.push_str("\nALERTS TO MONITOR:\n");
        for message in &warnings {
            text.push_str(&format!("- {message}\n"));
        }
    }
    if critical.is_empty() && warnings.is_empty() {
        text.push_str("\nNo alerts detected in this assessment.\n");
    }

    if analysis.recommendations.is_empty() {
        text.push_str("\nRECOMMENDATIONS:\n- Continue routine care per protocol\n");
    } else {
        text.push_str("\nRECOMMENDATIONS:\n");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            text.push_str(&format!("{}. {rec}\n", i + 1));
        }
    }

    text.push_str("\nFOLLOW-UP PLAN:\n");
    if !critical.is_empty() {
        text.push_str(
            "- Reassess in 2-4 hours or per evolution\n\
             - Vital signs every 15-30 minutes until stabilized\n\
             - Contact physician now\n",
        );
    } else if !warnings.is_empty() {
        text.push_str(
            "- Reassess in 4-8 hours\n\
             - Vital signs every 2-4 hours\n\
             - Contact physician within 24 hours\n",
        );
    } else {
        text.push_str(
            "- Reassess in 24 hours\n\
             - Vital signs per routine protocol\n\
             - Contact physician on significant change\n",
        );
    }

    text
}
