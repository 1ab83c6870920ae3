use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::record::ExampleVariant;

/// Display-ready aggregate for one content record.
///
/// This is the only shape the presentation layer consumes. All markup in it
/// has already been sanitized; `references` and `commands` never hold two
/// entries whose case- and whitespace-normalized text is equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedBlock {
    pub info: String,
    pub examples: Vec<ExampleVariant>,
    pub default_example_id: Option<String>,
    pub references: Vec<Reference>,
    pub commands: Vec<Command>,
}

impl NormalizedBlock {
    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
            && self.examples.is_empty()
            && self.references.is_empty()
            && self.commands.is_empty()
    }
}

/// A bibliographic reference line with its classified kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reference {
    pub text: String,
    pub kind: ReferenceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReferenceKind {
    /// Suicide prevention, risk assessment, safety planning.
    Safety,
    /// Clinical practice guidelines and consensus statements.
    Guideline,
    /// Psychometric validation studies.
    Validation,
    /// Systematic reviews and meta-analyses.
    Review,
    General,
}

/// A prompt the user can copy into an assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Command {
    pub text: String,
}

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
