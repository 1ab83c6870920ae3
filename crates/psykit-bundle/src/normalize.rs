use serde::{Deserialize, Serialize};

use psykit_core::models::block::{Command, NormalizedBlock, Reference};
use psykit_core::models::record::ExampleVariant;
use psykit_sanitize::{escape_text, sanitize};

use crate::references::classify_reference;
use crate::text::{dedupe_text, strip_placeholders};

/// Prompts appended to every block after the source-supplied ones.
pub const GENERAL_PROMPTS: [&str; 2] = [
    "Check this page for accessibility: logical heading order, descriptive link text, \
     and a visible label on every form control.",
    "Before closing, export or print the completed worksheet; responses are not kept \
     after you leave the page.",
];

/// Id and label given to the single example produced by [`normalize`].
pub const EXAMPLE_ID: &str = "example";
pub const EXAMPLE_LABEL: &str = "Example";

/// A titled list of informational bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoSection {
    pub title: String,
    pub body: Vec<String>,
}

impl InfoSection {
    pub fn new(title: &str, body: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            body: body.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Raw fragments from one or more content sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub info: Vec<InfoSection>,
    #[serde(default)]
    pub example_html: String,
    #[serde(default)]
    pub prompts: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

/// Render info sections as `<section>` blocks.
///
/// Body lines are placeholder-stripped and sanitized; lines left empty are
/// dropped, as are sections with neither a title nor a line.
pub fn render_info(sections: &[InfoSection]) -> String {
    let mut rendered = Vec::new();
    for section in sections {
        let lines: Vec<String> = section
            .body
            .iter()
            .map(|line| sanitize(&strip_placeholders(line)))
            .filter(|line| !line.trim().is_empty())
            .collect();
        let title = section.title.trim();
        if title.is_empty() && lines.is_empty() {
            continue;
        }

        let mut html = String::from("<section>");
        if !title.is_empty() {
            html.push_str(&format!("<h3>{}</h3>", escape_text(title)));
        }
        if !lines.is_empty() {
            html.push_str("<ul>");
            for line in &lines {
                html.push_str(&format!("<li>{line}</li>"));
            }
            html.push_str("</ul>");
        }
        html.push_str("</section>");
        rendered.push(html);
    }
    rendered.join("\n")
}

/// Build a block from a bundle. Deterministic: the same bundle always
/// yields a byte-identical block.
pub fn normalize(bundle: &Bundle) -> NormalizedBlock {
    let example = sanitize(&bundle.example_html);
    let examples = if example.trim().is_empty() {
        Vec::new()
    } else {
        vec![ExampleVariant {
            id: EXAMPLE_ID.to_string(),
            label: EXAMPLE_LABEL.to_string(),
            html: example,
        }]
    };
    let default_example_id = examples.first().map(|e| e.id.clone());

    let mut prompts: Vec<&str> = bundle.prompts.iter().map(String::as_str).collect();
    prompts.extend(GENERAL_PROMPTS);

    NormalizedBlock {
        info: render_info(&bundle.info),
        examples,
        default_example_id,
        references: to_references(&dedupe_text(&bundle.references)),
        commands: dedupe_text(&prompts).into_iter().map(Command::new).collect(),
    }
}

/// Classify already deduplicated reference lines.
pub fn to_references(lines: &[String]) -> Vec<Reference> {
    lines
        .iter()
        .map(|text| Reference {
            kind: classify_reference(text),
            text: text.clone(),
        })
        .collect()
}
