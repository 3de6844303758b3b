//! Risk evaluation from the number of reported symptoms.
//!
//! Thresholds: five or more symptoms is high, two to four is moderate,
//! a single symptom is low. An empty selection yields no evaluation at
//! all, and callers skip the report and history steps in that case.

use serde::{Deserialize, Serialize};

use crate::models::{Notice, NoticeLevel};

/// Symptom count at or above which risk is high.
pub const HIGH_THRESHOLD: usize = 5;

/// Symptom count at or above which risk is at least moderate.
pub const MODERATE_THRESHOLD: usize = 2;

/// Coarse three-level classification. The serde form is the label stored
/// in `users.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk ✅")]
    Low,
    #[serde(rename = "Moderate Risk ⚠️")]
    Moderate,
    #[serde(rename = "High Risk ⚠️")]
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk ✅",
            Self::Moderate => "Moderate Risk ⚠️",
            Self::High => "High Risk ⚠️",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            Self::Low => "✅ Low risk. Keep following healthy pregnancy practices.",
            Self::Moderate => "⚠️ You have moderate risk. Monitor your symptoms carefully.",
            Self::High => {
                "⚠️ You are at HIGH risk. Please contact your doctor immediately if symptoms persist."
            }
        }
    }

    pub fn notice_level(&self) -> NoticeLevel {
        match self {
            Self::Low => NoticeLevel::Success,
            Self::Moderate => NoticeLevel::Warning,
            Self::High => NoticeLevel::Error,
        }
    }

    pub fn notice(&self) -> Notice {
        Notice {
            level: self.notice_level(),
            text: self.advice().to_string(),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a symptom count to a risk level. Zero symptoms means no evaluation.
pub fn evaluate(symptom_count: usize) -> Option<RiskLevel> {
    match symptom_count {
        0 => None,
        n if n >= HIGH_THRESHOLD => Some(RiskLevel::High),
        n if n >= MODERATE_THRESHOLD => Some(RiskLevel::Moderate),
        _ => Some(RiskLevel::Low),
    }
}
