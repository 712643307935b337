//! Vital-sign classifier: maps a single reading (or the blood-pressure pair)
//! to a qualitative band using fixed clinical thresholds.
//!
//! Pure and total: out-of-range numeric input is classified with the same
//! bands; range validation happens upstream (see `crate::validation`).

/// Qualitative band for one vital-sign reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalBand {
    Normal,
    Borderline,
    Low,
    High,
    SevereLow,
    SevereHigh,
}

impl VitalBand {
    /// Severity rank of the band, used to resolve ties toward the more
    /// severe classification.
    pub fn severity_rank(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Borderline => 1,
            Self::Low | Self::High => 2,
            Self::SevereLow | Self::SevereHigh => 3,
        }
    }

    pub fn is_severe(self) -> bool {
        matches!(self, Self::SevereLow | Self::SevereHigh)
    }
}

/// Systolic blood pressure in mmHg. Normal 90-140.
pub fn systolic(mmhg: u16) -> VitalBand {
    if mmhg > 180 {
        VitalBand::SevereHigh
    } else if mmhg > 160 {
        VitalBand::High
    } else if mmhg > 140 {
        VitalBand::Borderline
    } else if mmhg < 90 {
        VitalBand::Low
    } else {
        VitalBand::Normal
    }
}

/// Diastolic blood pressure in mmHg. Normal 60-90.
pub fn diastolic(mmhg: u16) -> VitalBand {
    if mmhg > 110 {
        VitalBand::SevereHigh
    } else if mmhg > 100 {
        VitalBand::High
    } else if mmhg > 90 {
        VitalBand::Borderline
    } else if mmhg < 60 {
        VitalBand::Low
    } else {
        VitalBand::Normal
    }
}

/// The blood-pressure pair classified as a unit: the more severe of the two
/// measurements wins (systolic breaking rank ties).
pub fn blood_pressure(systolic_mmhg: u16, diastolic_mmhg: u16) -> VitalBand {
    let sys = systolic(systolic_mmhg);
    let dia = diastolic(diastolic_mmhg);
    if dia.severity_rank() > sys.severity_rank() {
        dia
    } else {
        sys
    }
}

/// Heart rate in bpm. Normal 60-100; the 101-120 stretch is elevated but
/// below the alert threshold.
pub fn heart_rate(bpm: u16) -> VitalBand {
    if bpm > 150 {
        VitalBand::SevereHigh
    } else if bpm > 120 {
        VitalBand::High
    } else if bpm > 100 {
        VitalBand::Borderline
    } else if bpm < 50 {
        VitalBand::SevereLow
    } else if bpm < 60 {
        VitalBand::Low
    } else {
        VitalBand::Normal
    }
}

/// Body temperature in degrees Celsius. Normal 36.0-37.8.
pub fn temperature(celsius: f64) -> VitalBand {
    if celsius > 38.5 {
        VitalBand::SevereHigh
    } else if celsius > 37.8 {
        VitalBand::High
    } else if celsius < 36.0 {
        VitalBand::Low
    } else {
        VitalBand::Normal
    }
}

/// Oxygen saturation in percent. Normal at or above 95; hypoxemia is a
/// deficit, so the abnormal bands sit on the low side.
pub fn oxygen_saturation(percent: u8) -> VitalBand {
    if percent < 90 {
        VitalBand::SevereLow
    } else if percent < 95 {
        VitalBand::Low
    } else {
        VitalBand::Normal
    }
}

/// Self-reported pain on the 0-10 scale.
pub fn pain(level: u8) -> VitalBand {
    if level >= 8 {
        VitalBand::SevereHigh
    } else if level >= 6 {
        VitalBand::High
    } else if level >= 4 {
        VitalBand::Borderline
    } else {
        VitalBand::Normal
    }
}
