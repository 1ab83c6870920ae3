//! Profile-specific synthesis.
//!
//! Each profile has a [`ProfileBuilder`] that supplies fallback info
//! sections, an example, references and prompts. Builders are collected in
//! a [`ProfileTable`] handed to the assembler at construction.

pub mod diagnosis;
pub mod formulation;
pub mod generic;
pub mod medication;
pub mod psychoeducation;
pub mod risk;
pub mod score;
pub mod therapy;

use std::collections::BTreeMap;

use psykit_bundle::InfoSection;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};
use psykit_sanitize::escape_text;

/// Synthesis logic for one profile.
pub trait ProfileBuilder: Send + Sync {
    fn profile(&self) -> Profile;

    /// Info sections used when the record has no usable summary.
    fn info(&self, record: &ContentRecord) -> Vec<InfoSection>;

    /// Example used when the record has no authored markup.
    fn example(&self, record: &ContentRecord) -> Option<ExampleVariant>;

    /// References merged after the record's own citations.
    fn references(&self, record: &ContentRecord) -> Vec<Citation>;

    /// Prompts added when authored prompts are too few.
    fn prompts(&self, record: &ContentRecord) -> Vec<String>;

    /// Add synthesized prompts regardless of how many are authored.
    fn always_top_up(&self) -> bool {
        false
    }
}

/// Immutable profile → builder table.
pub struct ProfileTable {
    builders: BTreeMap<Profile, Box<dyn ProfileBuilder>>,
}

impl ProfileTable {
    pub fn empty() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// The table of built-in builders, one per profile.
    pub fn builtin() -> Self {
        Self::empty()
            .with(Box::new(score::ScoreBuilder::default()))
            .with(Box::new(risk::RiskBuilder))
            .with(Box::new(formulation::FormulationBuilder))
            .with(Box::new(diagnosis::DiagnosisBuilder))
            .with(Box::new(medication::MedicationBuilder))
            .with(Box::new(therapy::TherapyBuilder))
            .with(Box::new(psychoeducation::PsychoeducationBuilder))
            .with(Box::new(generic::GenericBuilder))
    }

    /// Register `builder` under its own profile, replacing any previous one.
    pub fn with(mut self, builder: Box<dyn ProfileBuilder>) -> Self {
        self.builders.insert(builder.profile(), builder);
        self
    }

    pub fn get(&self, profile: Profile) -> Option<&dyn ProfileBuilder> {
        self.builders.get(&profile).map(|b| b.as_ref())
    }

    pub fn profiles(&self) -> impl Iterator<Item = Profile> + '_ {
        self.builders.keys().copied()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn citation(authors: &str, year: u16, title: &str, source: &str) -> Citation {
    Citation {
        title: title.to_string(),
        authors: Some(authors.to_string()),
        year: Some(year),
        source: Some(source.to_string()),
        url: None,
    }
}

pub(crate) fn example(id: &str, label: &str, html: String) -> Option<ExampleVariant> {
    Some(ExampleVariant {
        id: id.to_string(),
        label: label.to_string(),
        html,
    })
}

/// A trimmed, escaped record title for use inside synthesized markup.
pub(crate) fn title_html(record: &ContentRecord) -> String {
    let title = record.title.trim();
    if title.is_empty() {
        "Worksheet".to_string()
    } else {
        escape_text(title)
    }
}

/// A trimmed record title for use in prompts.
pub(crate) fn title_text(record: &ContentRecord) -> &str {
    let title = record.title.trim();
    if title.is_empty() {
        "this worksheet"
    } else {
        title
    }
}

/// A worksheet table: one labelled row per prompt, a blank answer box per
/// remaining column.
pub(crate) fn answer_table(caption: &str, headers: &[&str], rows: &[&str]) -> String {
    let mut html = format!("<table class=\"worksheet\"><caption>{caption}</caption><thead><tr>");
    for header in headers {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr></thead><tbody>");
    for (i, row) in rows.iter().enumerate() {
        html.push_str(&format!("<tr><th>{row}</th>"));
        for col in 1..headers.len() {
            html.push_str(&format!(
                "<td><textarea name=\"r{}c{}\"></textarea></td>",
                i + 1,
                col
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}
