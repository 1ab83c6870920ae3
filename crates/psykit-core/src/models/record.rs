use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One authored worksheet or topic from the content catalogue.
///
/// Records are constructed once from static data and never mutated by the
/// pipeline. Every field other than `id`, `category` and `title` is optional
/// in the catalogue JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContentRecord {
    pub id: String,
    /// Category identifier, e.g. "screening" or "diagnosis".
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw worksheet markup, used as an example when no variants are authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default)]
    pub examples: Vec<ExampleVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_example_id: Option<String>,
    #[serde(default)]
    pub prompts: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<Citation>,
}

impl ContentRecord {
    /// Lower-cased tags, in authored order.
    pub fn normalized_tags(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.trim().to_lowercase()).collect()
    }
}

/// A single renderable example page. `id` may be empty in authored data;
/// the assembler fills in a stable one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExampleVariant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    pub html: String,
}

/// An evidence citation attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Citation {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Citation {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Single-line rendering used as the reference text in a block,
    /// e.g. `Kroenke K, Spitzer RL (2001). The PHQ-9. J Gen Intern Med.`
    pub fn display_line(&self) -> String {
        let mut line = String::new();
        if let Some(authors) = self.authors.as_deref().filter(|a| !a.trim().is_empty()) {
            line.push_str(authors.trim());
            match self.year {
                Some(year) => line.push_str(&format!(" ({year}). ")),
                None => line.push_str(". "),
            }
        } else if let Some(year) = self.year {
            line.push_str(&format!("({year}). "));
        }
        line.push_str(self.title.trim());
        if let Some(source) = self.source.as_deref().filter(|s| !s.trim().is_empty()) {
            if !line.ends_with('.') {
                line.push('.');
            }
            line.push(' ');
            line.push_str(source.trim());
        }
        line
    }
}
