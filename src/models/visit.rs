use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{join_symptoms, Symptom, YesNo};
use crate::risk::RiskLevel;

/// One completed intake submission, immutable once appended to a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub name: String,
    pub age: u32,
    pub weight: u32,
    pub weeks: u32,
    pub symptoms: Vec<Symptom>,
    pub risk: RiskLevel,
    pub consulted_doc: YesNo,
    pub vaccination: YesNo,
    pub appointments: Vec<NaiveDate>,
}

impl Visit {
    pub fn symptoms_text(&self) -> String {
        join_symptoms(&self.symptoms)
    }

    /// `d1, d2` or `None` when no appointment was added.
    pub fn appointments_text(&self) -> String {
        if self.appointments.is_empty() {
            "None".to_string()
        } else {
            self.appointments
                .iter()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_visit() -> Visit {
    Visit {
        name: "Ann".into(),
        age: 28,
        weight: 62,
        weeks: 20,
        symptoms: vec![Symptom::Headache, Symptom::Nausea],
        risk: RiskLevel::Moderate,
        consulted_doc: YesNo::Yes,
        vaccination: YesNo::No,
        appointments: vec![NaiveDate::from_ymd_opt(2026, 11, 2).unwrap()],
    }
}
