use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Presentation profile selected for a content record.
///
/// The profile decides which builder synthesizes info text, examples,
/// references and prompts when authored content is missing or thin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Profile {
    /// Questionnaire whose score can be computed from item responses.
    ScoreAutocompute,
    /// Suicide, self-harm and safety planning material.
    RiskSafety,
    /// Case formulation (biopsychosocial, 5P and similar).
    DiagnosticFormulation,
    /// Diagnostic criteria checklists.
    DiagnosticCriteria,
    MedicationReview,
    TherapyWorksheet,
    Psychoeducation,
    Generic,
}

impl Profile {
    pub const ALL: [Profile; 8] = [
        Profile::ScoreAutocompute,
        Profile::RiskSafety,
        Profile::DiagnosticFormulation,
        Profile::DiagnosticCriteria,
        Profile::MedicationReview,
        Profile::TherapyWorksheet,
        Profile::Psychoeducation,
        Profile::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::ScoreAutocompute => "score-autocompute",
            Profile::RiskSafety => "risk-safety",
            Profile::DiagnosticFormulation => "diagnostic-formulation",
            Profile::DiagnosticCriteria => "diagnostic-criteria",
            Profile::MedicationReview => "medication-review",
            Profile::TherapyWorksheet => "therapy-worksheet",
            Profile::Psychoeducation => "psychoeducation",
            Profile::Generic => "generic",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
