//! psykit-instruments
//!
//! Standardized questionnaire definitions and the score engine. Pure data
//! and pure functions: an instrument declares its items, response range,
//! severity bands and flag predicates, and [`score`] turns a raw response
//! vector into a [`ScoreResult`].

pub mod engine;
pub mod error;
pub mod instruments;
pub mod scoring;

pub use engine::{score, score_strict, score_with};

use error::InstrumentError;
use scoring::{Flag, InstrumentSpec, ScoreResult, ScoringContext, ValidationError};

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// The immutable definition of this instrument.
    fn spec(&self) -> &InstrumentSpec;

    /// Unique identifier (e.g., "phq9", "audit_c").
    fn id(&self) -> &str {
        &self.spec().id
    }

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str {
        &self.spec().name
    }

    /// Other names this instrument is tagged with in content records.
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Instrument-specific flags, computed over the coerced responses.
    fn flags(&self, _responses: &[f64], _total: f64, _context: &ScoringContext) -> Vec<Flag> {
        Vec::new()
    }

    /// Report every response that coercion would change.
    fn validate_responses(&self, responses: &[f64]) -> Vec<ValidationError> {
        let spec = self.spec();
        let range = spec.item_range;

        let mut errors: Vec<ValidationError> = responses
            .iter()
            .enumerate()
            .filter(|(_, value)| !range.contains(**value))
            .map(|(i, &value)| ValidationError {
                item: i + 1,
                value,
                expected_range: range,
                message: format!(
                    "{}: item {} response {} is outside range [{}, {}]",
                    self.name(),
                    i + 1,
                    value,
                    range.min,
                    range.max,
                ),
            })
            .collect();

        if responses.len() != spec.items() {
            errors.push(ValidationError {
                item: responses.len(),
                value: responses.len() as f64,
                expected_range: range,
                message: format!(
                    "{}: expected {} responses, got {}",
                    self.name(),
                    spec.items(),
                    responses.len(),
                ),
            });
        }
        errors
    }

    /// Format a scored result as structured text.
    fn to_structured_input(&self, result: &ScoreResult) -> String {
        let spec = self.spec();
        let mut output = format!("## {}\n\n", self.name());
        for (label, value) in spec.item_labels.iter().zip(&result.responses) {
            output.push_str(&format!("- {label}: {value}\n"));
        }
        output.push_str(&format!(
            "\nTotal: {} / {} ({})\n",
            result.total,
            spec.max_total(),
            result.severity
        ));
        for flag in &result.flags {
            output.push_str(&format!("! {}\n", flag.message()));
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::audit_c::AuditC),
        Box::new(instruments::pcl5::Pcl5),
        Box::new(instruments::epds::Epds),
    ]
}

/// Look up an instrument by ID or alias, ignoring case and punctuation.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    let wanted = lookup_key(id);
    if wanted.is_empty() {
        return None;
    }
    all_instruments().into_iter().find(|i| {
        lookup_key(i.id()) == wanted
            || lookup_key(i.name()) == wanted
            || i.aliases().iter().any(|a| lookup_key(a) == wanted)
    })
}

/// Like [`get_instrument`], for callers that must fail on an unknown id.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    get_instrument(id).ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

/// Lower-cased alphanumerics only, so "PHQ-9", "phq 9" and "phq9" agree.
pub fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

pub(crate) fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
