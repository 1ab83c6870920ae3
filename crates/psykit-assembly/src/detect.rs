//! Profile detection.
//!
//! Detection is an ordered list of `(rule, profile)` pairs; the first rule
//! that matches decides the profile. Order is precedence: moving a rule
//! changes which builder some records receive.

use std::sync::LazyLock;

use psykit_core::models::profile::Profile;
use psykit_core::models::record::ContentRecord;
use psykit_instruments::{all_instruments, lookup_key};

/// Lower-cased view of the metadata rules look at.
#[derive(Debug, Clone)]
pub struct RecordText {
    pub category: String,
    pub tags: Vec<String>,
    pub title: String,
}

impl RecordText {
    pub fn new(record: &ContentRecord) -> Self {
        Self {
            category: record.category.trim().to_lowercase(),
            tags: record.normalized_tags(),
            title: record.title.trim().to_lowercase(),
        }
    }

    fn in_category(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.category.contains(k))
    }

    fn in_tags(&self, keywords: &[&str]) -> bool {
        self.tags
            .iter()
            .any(|tag| keywords.iter().any(|k| tag.contains(k)))
    }

    fn in_title(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.title.contains(k))
    }

    fn anywhere(&self, keywords: &[&str]) -> bool {
        self.in_category(keywords) || self.in_tags(keywords) || self.in_title(keywords)
    }
}

pub type Rule = fn(&RecordText) -> bool;

/// Detection precedence, highest first.
pub const RULES: &[(Rule, Profile)] = &[
    (mentions_formulation, Profile::DiagnosticFormulation),
    (tagged_with_scale, Profile::ScoreAutocompute),
    (mentions_risk, Profile::RiskSafety),
    (mentions_screening, Profile::ScoreAutocompute),
    (mentions_diagnosis, Profile::DiagnosticCriteria),
    (mentions_medication, Profile::MedicationReview),
    (mentions_therapy, Profile::TherapyWorksheet),
    (mentions_psychoeducation, Profile::Psychoeducation),
];

/// Select the presentation profile for a record.
pub fn detect_profile(record: &ContentRecord) -> Profile {
    let text = RecordText::new(record);
    RULES
        .iter()
        .find(|(rule, _)| rule(&text))
        .map_or(Profile::Generic, |(_, profile)| *profile)
}

fn mentions_formulation(text: &RecordText) -> bool {
    text.in_title(&["formulation", "conceptuali"]) || text.in_tags(&["formulation"])
}

/// Lookup keys of every catalogued instrument's id, name and aliases.
static SCALE_KEYS: LazyLock<Vec<String>> = LazyLock::new(|| {
    all_instruments()
        .iter()
        .flat_map(|i| {
            let mut names = vec![i.id().to_string(), i.name().to_string()];
            names.extend(i.aliases().iter().map(|a| a.to_string()));
            names
        })
        .map(|name| lookup_key(&name))
        .filter(|key| !key.is_empty())
        .collect()
});

/// A tag that names a catalogued scale exactly (ignoring case/punctuation).
fn tagged_with_scale(text: &RecordText) -> bool {
    text.tags
        .iter()
        .map(|tag| lookup_key(tag))
        .any(|tag| SCALE_KEYS.contains(&tag))
}

fn mentions_risk(text: &RecordText) -> bool {
    text.anywhere(&[
        "suicid",
        "self-harm",
        "self harm",
        "safety plan",
        "safety-plan",
        "risk assessment",
        "risk-assessment",
        "crisis",
    ])
}

fn mentions_screening(text: &RecordText) -> bool {
    text.anywhere(&["screening", "questionnaire", "rating scale", "self-report"])
        || text.in_category(&["scale", "instrument", "measure"])
}

fn mentions_diagnosis(text: &RecordText) -> bool {
    const KEYWORDS: &[&str] = &["diagnos", "criteria", "dsm-5", "icd-11"];
    text.in_category(KEYWORDS) || text.in_tags(KEYWORDS)
}

fn mentions_medication(text: &RecordText) -> bool {
    text.anywhere(&[
        "medication",
        "pharmacolog",
        "prescrib",
        "antidepressant",
        "antipsychotic",
        "lithium",
        "clozapine",
    ])
}

fn mentions_therapy(text: &RecordText) -> bool {
    text.anywhere(&[
        "cbt",
        "dbt",
        "worksheet",
        "thought record",
        "exposure",
        "behavioural activation",
        "behavioral activation",
        "therapy",
    ])
}

fn mentions_psychoeducation(text: &RecordText) -> bool {
    text.anywhere(&[
        "psychoeducation",
        "psycho-education",
        "handout",
        "leaflet",
        "patient information",
    ])
}
