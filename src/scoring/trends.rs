//! Trend analyzer: compares two assessments of the same patient and labels
//! each tracked vital with a direction. Small movements inside the per-vital
//! noise threshold read as stable; a missing reading on either side reads
//! as no-data.
//!
//! Callers are responsible for handing in a matched pair (same patient,
//! current vs. previous); the analyzer does not check patient ids.

use serde::{Deserialize, Serialize};

use crate::models::Assessment;

/// Movement above which a systolic change is a real trend, in mmHg.
pub const SYSTOLIC_NOISE_MMHG: f64 = 10.0;
/// Movement above which a heart-rate change is a real trend, in bpm.
pub const HEART_RATE_NOISE_BPM: f64 = 5.0;
/// Movement above which a temperature change is a real trend, in degrees C.
pub const TEMPERATURE_NOISE_C: f64 = 0.5;
/// Movement above which a pain change is a real trend, in scale points.
pub const PAIN_NOISE_POINTS: f64 = 1.0;

/// Directional label for one vital between two assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    NoData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::NoData => "no_data",
        }
    }
}

/// Per-vital trend labels for a (current, previous) assessment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    pub systolic_bp: Trend,
    pub heart_rate: Trend,
    pub temperature: Trend,
    pub pain_level: Trend,
}

/// Label the tracked vitals of `current` against `previous`.
pub fn trends(current: &Assessment, previous: &Assessment) -> TrendReport {
    let cur = &current.vital_signs;
    let prev = &previous.vital_signs;

    TrendReport {
        systolic_bp: direction(
            cur.systolic_bp.map(f64::from),
            prev.systolic_bp.map(f64::from),
            SYSTOLIC_NOISE_MMHG,
        ),
        heart_rate: direction(
            cur.heart_rate.map(f64::from),
            prev.heart_rate.map(f64::from),
            HEART_RATE_NOISE_BPM,
        ),
        temperature: direction(cur.temperature, prev.temperature, TEMPERATURE_NOISE_C),
        pain_level: direction(
            cur.pain_level.map(f64::from),
            prev.pain_level.map(f64::from),
            PAIN_NOISE_POINTS,
        ),
    }
}

fn direction(current: Option<f64>, previous: Option<f64>, noise: f64) -> Trend {
    match (current, previous) {
        (Some(current), Some(previous)) => {
            let delta = current - previous;
            if delta > noise {
                Trend::Increasing
            } else if delta < -noise {
                Trend::Decreasing
            } else {
                Trend::Stable
            }
        }
        _ => Trend::NoData,
    }
}
