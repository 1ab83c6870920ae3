use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use psykit_bundle::{
    classify_reference, dedupe_text, normalize_key, render_info, strip_placeholders,
    GENERAL_PROMPTS,
};
use psykit_core::models::block::{Command, NormalizedBlock, Reference};
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{ContentRecord, ExampleVariant};
use psykit_sanitize::{extract_text, sanitize};

use crate::config::AssemblyConfig;
use crate::detect::detect_profile;
use crate::error::AssemblyError;
use crate::profiles::{ProfileBuilder, ProfileTable};

/// Info shown when a record cannot be assembled.
pub const PLACEHOLDER_INFO: &str =
    "Select an item to view its worksheet, examples, and references.";

pub const WORKSHEET_ID: &str = "worksheet";
pub const WORKSHEET_LABEL: &str = "Worksheet";

/// The block shown in place of one that failed to assemble.
pub fn placeholder_block() -> NormalizedBlock {
    NormalizedBlock {
        info: PLACEHOLDER_INFO.to_string(),
        ..NormalizedBlock::default()
    }
}

/// Builds display blocks from content records.
///
/// Holds no mutable state; one assembler can serve any number of records
/// and threads.
pub struct Assembler {
    table: ProfileTable,
    config: AssemblyConfig,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(ProfileTable::builtin(), AssemblyConfig::default())
    }
}

impl Assembler {
    pub fn new(table: ProfileTable, config: AssemblyConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    pub fn profile_for(&self, record: &ContentRecord) -> Profile {
        detect_profile(record)
    }

    /// Assemble a record's block. Never fails: any error or panic while
    /// building yields [`placeholder_block`].
    pub fn assemble(&self, record: &ContentRecord) -> NormalizedBlock {
        match panic::catch_unwind(AssertUnwindSafe(|| self.try_assemble(record))) {
            Ok(Ok(block)) => block,
            Ok(Err(e)) => {
                warn!(record = %record.id, error = %e, "assembly failed, using placeholder");
                placeholder_block()
            }
            Err(payload) => {
                warn!(
                    record = %record.id,
                    panic = panic_message(payload.as_ref()),
                    "assembly panicked, using placeholder"
                );
                placeholder_block()
            }
        }
    }

    /// Assemble a record's block, reporting failures instead of hiding them.
    pub fn try_assemble(&self, record: &ContentRecord) -> Result<NormalizedBlock, AssemblyError> {
        let profile = detect_profile(record);
        let builder = self
            .table
            .get(profile)
            .ok_or(AssemblyError::MissingBuilder(profile))?;

        let (info, synthesized_info) = self.info(record, builder);
        let (examples, synthesized_example) = build_examples(record, builder);
        let default_example_id = record
            .default_example_id
            .as_deref()
            .filter(|wanted| examples.iter().any(|e| e.id == *wanted))
            .map(str::to_string)
            .or_else(|| examples.first().map(|e| e.id.clone()));
        let references = self.references(record, builder);
        let commands = self.commands(record, builder);

        debug!(
            record = %record.id,
            %profile,
            synthesized_info,
            synthesized_example,
            examples = examples.len(),
            references = references.len(),
            commands = commands.len(),
            "assembled block"
        );

        Ok(NormalizedBlock {
            info,
            examples,
            default_example_id,
            references,
            commands,
        })
    }

    /// Assemble every record independently, keyed by record id.
    pub fn assemble_catalogue(&self, records: &[ContentRecord]) -> Vec<(String, NormalizedBlock)> {
        records
            .iter()
            .map(|record| (record.id.clone(), self.assemble(record)))
            .collect()
    }

    /// Authored summary (else description) when long enough, otherwise the
    /// builder's sections. The flag is true when synthesized.
    fn info(&self, record: &ContentRecord, builder: &dyn ProfileBuilder) -> (String, bool) {
        let authored = record
            .summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(record.description.as_deref());

        if let Some(html) = authored
            && extract_text(html).chars().count() > self.config.min_summary_chars
        {
            let info = sanitize(html);
            if !info.trim().is_empty() {
                return (info, false);
            }
        }
        (render_info(&builder.info(record)), true)
    }

    fn references(&self, record: &ContentRecord, builder: &dyn ProfileBuilder) -> Vec<Reference> {
        let fallback = builder.references(record);
        let mut titles = HashSet::new();
        let mut lines = HashSet::new();

        record
            .evidence
            .iter()
            .chain(&fallback)
            .filter(|c| !c.title.trim().is_empty())
            .filter(|c| titles.insert(normalize_key(&c.title)))
            .map(|c| Reference {
                text: c.display_line(),
                kind: classify_reference(&c.title),
            })
            .filter(|r| lines.insert(normalize_key(&r.text)))
            .take(self.config.max_references)
            .collect()
    }

    fn commands(&self, record: &ContentRecord, builder: &dyn ProfileBuilder) -> Vec<Command> {
        let mut prompts = dedupe_text(&record.prompts);
        if prompts.len() < self.config.min_authored_prompts || builder.always_top_up() {
            prompts.extend(builder.prompts(record));
        }
        prompts.extend(GENERAL_PROMPTS.iter().map(|p| p.to_string()));

        dedupe_text(&prompts)
            .into_iter()
            .take(self.config.max_commands)
            .map(Command::new)
            .collect()
    }
}

/// Assemble a catalogue with the built-in profiles and default config.
pub fn assemble_catalogue(records: &[ContentRecord]) -> Vec<(String, NormalizedBlock)> {
    Assembler::default().assemble_catalogue(records)
}

/// Authored variants, else the record's raw markup, else the builder's
/// example. The flag is true when synthesized.
fn build_examples(
    record: &ContentRecord,
    builder: &dyn ProfileBuilder,
) -> (Vec<ExampleVariant>, bool) {
    let mut ids = HashSet::new();
    let mut examples = Vec::new();

    for (n, variant) in record.examples.iter().enumerate() {
        let html = sanitize(&strip_placeholders(&variant.html));
        if html.trim().is_empty() {
            continue;
        }
        let id = match variant.id.trim() {
            "" => format!("example-{}", n + 1),
            id => id.to_string(),
        };
        let label = match variant.label.trim() {
            "" => format!("Example {}", n + 1),
            label => label.to_string(),
        };
        examples.push(ExampleVariant {
            id: unique_id(id, &mut ids),
            label,
            html,
        });
    }
    if !examples.is_empty() {
        return (examples, false);
    }

    if let Some(raw) = record.html.as_deref() {
        let html = sanitize(&strip_placeholders(raw));
        if !html.trim().is_empty() {
            let worksheet = ExampleVariant {
                id: WORKSHEET_ID.to_string(),
                label: WORKSHEET_LABEL.to_string(),
                html,
            };
            return (vec![worksheet], false);
        }
    }

    let synthesized = builder.example(record).and_then(|variant| {
        let html = sanitize(&variant.html);
        (!html.trim().is_empty()).then(|| ExampleVariant { html, ..variant })
    });
    (synthesized.into_iter().collect(), true)
}

/// `id`, or `id-2`, `id-3`, ... when already taken.
fn unique_id(id: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(id.clone()) {
        return id;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{id}-{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
