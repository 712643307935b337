use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AlertLevel
// ---------------------------------------------------------------------------

/// Level determines escalation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// Warning: requires monitoring and follow-up within the shift.
    Warning,
    /// Critical: requires immediate escalation to a physician.
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

// ---------------------------------------------------------------------------
// SeverityLevel
// ---------------------------------------------------------------------------

/// Categorical bucket derived from the 0-20 severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Alert & Analysis bundle
// ---------------------------------------------------------------------------

/// One threshold crossing with a caregiver-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn critical(message: String) -> Self {
        Self {
            level: AlertLevel::Critical,
            message,
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            level: AlertLevel::Warning,
            message,
        }
    }
}

/// The scoring engine's output for one (patient, assessment) pair.
///
/// Produced fresh on every analysis and never mutated afterwards; ordering
/// of alerts and recommendations is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub alerts: Vec<Alert>,
    pub recommendations: Vec<String>,
    pub severity_score: u8,
    pub severity_level: SeverityLevel,
    pub requires_immediate_attention: bool,
}

impl Analysis {
    pub fn critical_alert_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.level == AlertLevel::Critical)
            .count()
    }

    pub fn warning_alert_count(&self) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.level == AlertLevel::Warning)
            .count()
    }

    pub fn recommendation_count(&self) -> usize {
        self.recommendations.len()
    }

    pub fn has_critical_alert(&self) -> bool {
        self.alerts.iter().any(|a| a.level == AlertLevel::Critical)
    }
}
