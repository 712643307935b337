//! Report writer: serializes analyzed assessments for the outside world.
//!
//! One CSV row is appended per analysis to a daily report file (header
//! written when the file is created), and the full record is available as
//! a JSON value. Field names follow the canonical report contract so
//! existing downstream tooling keeps working: severity_score,
//! severity_level, requires_immediate_attention, critical_alert_count,
//! warning_alert_count, recommendation_count, plus the verbatim vital-sign
//! and general-status fields.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Assessment, Patient};
use crate::scoring::types::Analysis;

const CSV_HEADER: &str = "assessment_date,assessment_time,patient_id,patient_name,age,room,\
systolic_bp,diastolic_bp,heart_rate,temperature,oxygen_saturation,pain_level,\
mobility,appetite,sleep_quality,mood,cognitive_status,continence,\
symptoms,observations,fall_risk_history,cognitive_level,\
severity_score,severity_level,requires_immediate_attention,\
critical_alert_count,warning_alert_count,recommendation_count,evaluator";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Writes daily CSV reports and JSON exports under a reports directory.
pub struct ReportWriter {
    reports_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Writer rooted at the application's default reports directory.
    pub fn default_location() -> Self {
        Self::new(crate::config::reports_dir())
    }

    /// Append one analyzed assessment to the daily report named after the
    /// assessment date. Returns the report path.
    pub fn append_daily_report(
        &self,
        patient: &Patient,
        assessment: &Assessment,
        analysis: &Analysis,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.reports_dir)?;
        let path = self
            .reports_dir
            .join(format!("daily_report_{}.csv", assessment.date));

        let new_file = !path.exists();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        if new_file {
            writeln!(file, "{CSV_HEADER}")?;
        }
        writeln!(file, "{}", csv_row(patient, assessment, analysis))?;

        tracing::info!(report = %path.display(), patient_id = %patient.id, "daily report updated");
        Ok(path)
    }

    /// Write the full JSON record next to the daily reports.
    pub fn write_json_record(
        &self,
        patient: &Patient,
        assessment: &Assessment,
        analysis: &Analysis,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.reports_dir)?;
        let path = self.reports_dir.join(format!(
            "assessment_{}_{}.json",
            assessment.date, assessment.id
        ));
        let record = json_record(patient, assessment, analysis);
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        Ok(path)
    }
}

/// The full export record as a JSON value.
pub fn json_record(
    patient: &Patient,
    assessment: &Assessment,
    analysis: &Analysis,
) -> serde_json::Value {
    serde_json::json!({
        "patient": patient,
        "assessment": assessment,
        "analysis": analysis,
        "severity_score": analysis.severity_score,
        "severity_level": analysis.severity_level.as_str(),
        "requires_immediate_attention": analysis.requires_immediate_attention,
        "critical_alert_count": analysis.critical_alert_count(),
        "warning_alert_count": analysis.warning_alert_count(),
        "recommendation_count": analysis.recommendation_count(),
    })
}

fn csv_row(patient: &Patient, assessment: &Assessment, analysis: &Analysis) -> String {
    let vitals = &assessment.vital_signs;
    let status = &assessment.general_status;

    let symptoms = assessment
        .symptoms
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let fields = [
        assessment.date.to_string(),
        assessment.time.format("%H:%M:%S").to_string(),
        patient.id.to_string(),
        patient.name.clone(),
        patient.age.to_string(),
        patient.room.clone(),
        opt_cell(vitals.systolic_bp),
        opt_cell(vitals.diastolic_bp),
        opt_cell(vitals.heart_rate),
        opt_cell(vitals.temperature),
        opt_cell(vitals.oxygen_saturation),
        opt_cell(vitals.pain_level),
        status.mobility.as_str().to_string(),
        status.appetite.as_str().to_string(),
        status.sleep_quality.as_str().to_string(),
        status.mood.as_str().to_string(),
        status.cognitive_status.as_str().to_string(),
        status.continence.as_str().to_string(),
        symptoms,
        assessment.observations.clone(),
        patient.fall_risk_history.as_str().to_string(),
        patient.cognitive_level.as_str().to_string(),
        analysis.severity_score.to_string(),
        analysis.severity_level.as_str().to_string(),
        (if analysis.requires_immediate_attention { "yes" } else { "no" }).to_string(),
        analysis.critical_alert_count().to_string(),
        analysis.warning_alert_count().to_string(),
        analysis.recommendation_count().to_string(),
        assessment.evaluator_name.clone(),
    ];

    fields
        .iter()
        .map(|f| csv_escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Quote a field when it contains a delimiter, quote or newline.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Number of data rows in an existing report file (header excluded).
pub fn report_row_count(path: &Path) -> Result<usize, ExportError> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().skip(1).filter(|l| !l.is_empty()).count())
}
