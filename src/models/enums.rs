use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ValidationError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Female => "female",
    Male => "male",
    Other => "other",
});

str_enum!(FallRisk {
    Low => "low",
    Medium => "medium",
    High => "high",
});

str_enum!(CognitiveLevel {
    Normal => "normal",
    MildImpairment => "mild_impairment",
    ModerateImpairment => "moderate_impairment",
    SevereImpairment => "severe_impairment",
});

str_enum!(Mobility {
    Independent => "independent",
    MinimalAssistance => "minimal_assistance",
    TotalAssistance => "total_assistance",
    Immobile => "immobile",
});

str_enum!(Appetite {
    Good => "good",
    Fair => "fair",
    Poor => "poor",
});

str_enum!(SleepQuality {
    Good => "good",
    Fair => "fair",
    Poor => "poor",
});

str_enum!(Mood {
    Cheerful => "cheerful",
    Normal => "normal",
    Sad => "sad",
    Agitated => "agitated",
    Apathetic => "apathetic",
});

str_enum!(CognitiveStatus {
    Alert => "alert",
    Confused => "confused",
    Drowsy => "drowsy",
    Agitated => "agitated",
});

str_enum!(Continence {
    Continent => "continent",
    OccasionalIncontinence => "occasional_incontinence",
    TotalIncontinence => "total_incontinence",
});

str_enum!(Symptom {
    Confusion => "confusion",
    Agitation => "agitation",
    RecentFalls => "recent_falls",
    AppetiteLoss => "appetite_loss",
    RespiratoryDistress => "respiratory_distress",
    ChestPain => "chest_pain",
    Nausea => "nausea",
    Vomiting => "vomiting",
    Dizziness => "dizziness",
    Constipation => "constipation",
    Diarrhea => "diarrhea",
    Edema => "edema",
    Cough => "cough",
    Fever => "fever",
});

impl Symptom {
    /// Human-readable label for caregiver-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confusion => "confusion",
            Self::Agitation => "agitation",
            Self::RecentFalls => "recent falls",
            Self::AppetiteLoss => "loss of appetite",
            Self::RespiratoryDistress => "respiratory distress",
            Self::ChestPain => "chest pain",
            Self::Nausea => "nausea",
            Self::Vomiting => "vomiting",
            Self::Dizziness => "dizziness",
            Self::Constipation => "constipation",
            Self::Diarrhea => "diarrhea",
            Self::Edema => "edema",
            Self::Cough => "cough",
            Self::Fever => "fever",
        }
    }
}

str_enum!(AgeGroup {
    Under65 => "under65",
    Senior => "senior",
    AdvancedSenior => "advanced_senior",
    Octogenarian => "octogenarian",
    Nonagenarian => "nonagenarian",
});

/// A patient's standing (non-assessment-specific) risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::InvalidEnum {
                field: "RiskLevel".into(),
                value: s.into(),
            }),
        }
    }
}
