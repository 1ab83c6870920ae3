use psykit_assembly::error::AssemblyError;
use psykit_assembly::{
    assemble_catalogue, placeholder_block, Assembler, AssemblyConfig, ProfileBuilder,
    ProfileTable, PLACEHOLDER_INFO,
};
use psykit_bundle::{InfoSection, GENERAL_PROMPTS};
use psykit_core::models::block::{NormalizedBlock, ReferenceKind};
use psykit_core::models::profile::Profile;
use psykit_core::models::record::{Citation, ContentRecord, ExampleVariant};
use psykit_sanitize::sanitize;

fn record(category: &str, title: &str, tags: &[&str]) -> ContentRecord {
    ContentRecord {
        id: title.to_lowercase().replace(' ', "-"),
        category: category.to_string(),
        title: title.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..ContentRecord::default()
    }
}

fn variant(id: &str, html: &str) -> ExampleVariant {
    ExampleVariant {
        id: id.to_string(),
        label: String::new(),
        html: html.to_string(),
    }
}

fn commands(block: &NormalizedBlock) -> Vec<&str> {
    block.commands.iter().map(|c| c.text.as_str()).collect()
}

const LONG_SUMMARY: &str = "<p onclick=\"steal()\">This worksheet helps clinicians and clients \
    work through the early warning signs of relapse together, agree who to contact, and record \
    the plan in one place.</p><script>evil()</script>";

// --- Info ---

#[test]
fn thin_summary_is_replaced_by_synthesized_sections() {
    let mut r = record("crisis", "Safety plan", &[]);
    r.summary = Some("Short.".to_string());

    let block = Assembler::default().assemble(&r);
    assert!(block.info.starts_with("<section><h3>Immediate safety</h3><ul>"));
    assert!(!block.info.contains("Short."));
}

#[test]
fn long_summary_is_used_sanitized() {
    let mut r = record("general", "Relapse prevention", &[]);
    r.summary = Some(LONG_SUMMARY.to_string());

    let block = Assembler::default().assemble(&r);
    assert!(block.info.starts_with("<p>This worksheet helps clinicians"));
    assert!(!block.info.contains("onclick"));
    assert!(!block.info.contains("script"));
}

#[test]
fn description_stands_in_for_missing_summary() {
    let mut r = record("general", "Relapse prevention", &[]);
    r.summary = Some("   ".to_string());
    r.description = Some(LONG_SUMMARY.to_string());

    let block = Assembler::default().assemble(&r);
    assert!(block.info.starts_with("<p>This worksheet helps clinicians"));
}

#[test]
fn summary_threshold_is_configurable() {
    let mut r = record("general", "Relapse prevention", &[]);
    r.summary = Some("<p>Brief but enough.</p>".to_string());

    let config = AssemblyConfig {
        min_summary_chars: 5,
        ..AssemblyConfig::default()
    };
    let block = Assembler::new(ProfileTable::builtin(), config).assemble(&r);
    assert_eq!(block.info, "<p>Brief but enough.</p>");
}

// --- Examples ---

#[test]
fn score_example_is_worked_through() {
    let r = record("screening", "PHQ-9 depression questionnaire", &["PHQ-9"]);

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.examples.len(), 1);
    let example = &block.examples[0];
    assert_eq!(example.id, "worked-example");
    assert_eq!(block.default_example_id.as_deref(), Some("worked-example"));
    assert!(example.html.contains("15 / 27"));
    assert!(example.html.contains("Moderately severe"));
    assert!(example.html.contains("score-flags"));
}

#[test]
fn score_example_defaults_to_phq9_when_no_instrument_matches() {
    let r = record("Rating scales", "Mood questionnaire", &[]);

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.examples.len(), 1);
    assert!(block.examples[0].html.contains("data-instrument=\"phq9\""));
}

#[test]
fn score_example_resolves_instrument_from_title() {
    let r = record("screening", "Edinburgh Postnatal Depression Scale", &[]);

    let block = Assembler::default().assemble(&r);
    assert!(block.examples[0].html.contains("data-instrument=\"epds\""));
}

#[test]
fn authored_variants_are_cleaned_and_given_ids() {
    let mut r = record("general", "Mood diary", &[]);
    r.examples = vec![
        variant("a", "<p>One</p>"),
        variant("", "<p onmouseover=\"x()\">Two</p>"),
        variant("a", "<p>Three</p>"),
        variant("empty", "<b></b> placeholder"),
    ];
    r.default_example_id = Some("example-2".to_string());

    let block = Assembler::default().assemble(&r);
    let ids: Vec<&str> = block.examples.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "example-2", "a-2"]);
    assert_eq!(block.examples[1].html, "<p>Two</p>");
    assert_eq!(block.examples[1].label, "Example 2");
    assert_eq!(block.default_example_id.as_deref(), Some("example-2"));
}

#[test]
fn unknown_default_falls_back_to_first_variant() {
    let mut r = record("general", "Mood diary", &[]);
    r.examples = vec![variant("first", "<p>One</p>"), variant("second", "<p>Two</p>")];
    r.default_example_id = Some("missing".to_string());

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.default_example_id.as_deref(), Some("first"));
}

#[test]
fn raw_html_becomes_worksheet_variant() {
    let mut r = record("general", "Mood diary", &[]);
    r.html = Some("<p onclick=\"x()\">Fill in</p><textarea name=\"mood\"></textarea>".to_string());

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.examples.len(), 1);
    assert_eq!(block.examples[0].id, "worksheet");
    assert_eq!(block.examples[0].label, "Worksheet");
    assert_eq!(
        block.examples[0].html,
        "<p>Fill in</p><textarea name=\"mood\"></textarea>"
    );
}

#[test]
fn deeply_nested_worksheet_is_assembled() {
    let mut r = record("general", "Nested worksheet", &[]);
    r.html = Some(format!("{}Fill in{}", "<div>".repeat(10_000), "</div>".repeat(10_000)));

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.examples.len(), 1);
    let html = &block.examples[0].html;
    assert_eq!(html.matches("<div>").count(), psykit_sanitize::dom::MAX_DEPTH);
    assert!(html.contains("Fill in"));
}

#[test]
fn every_profile_synthesizes_a_complete_block() {
    let records = [
        record("screening", "GAD-7", &["gad-7"]),
        record("crisis", "Safety plan", &[]),
        record("assessment", "Case formulation", &[]),
        record("diagnosis", "Major depressive disorder", &[]),
        record("treatment", "Antidepressant review", &[]),
        record("cbt", "Thought record", &[]),
        record("handouts", "Understanding panic", &[]),
        record("general", "Sleep hygiene", &[]),
    ];
    let assembler = Assembler::default();
    let mut seen = Vec::new();

    for r in &records {
        seen.push(assembler.profile_for(r));
        let block = assembler.assemble(r);
        assert!(block.info.starts_with("<section>"), "{}", r.title);
        assert_eq!(block.examples.len(), 1, "{}", r.title);
        assert_eq!(block.default_example_id.as_ref(), Some(&block.examples[0].id));
        assert_eq!(sanitize(&block.examples[0].html), block.examples[0].html);
        assert!(!block.references.is_empty(), "{}", r.title);
        assert!(block.commands.len() > GENERAL_PROMPTS.len(), "{}", r.title);
    }
    assert_eq!(seen, Profile::ALL);
}

// --- References ---

#[test]
fn references_dedupe_by_title_keeping_authored_first() {
    let mut r = record("screening", "PHQ-9", &["PHQ-9"]);
    r.evidence = vec![Citation::titled(
        "the phq-9: validity of a brief depression SEVERITY measure",
    )];

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.references.len(), 2);
    assert_eq!(
        block.references[0].text,
        "the phq-9: validity of a brief depression SEVERITY measure"
    );
    assert_eq!(block.references[0].kind, ReferenceKind::Validation);
    assert_eq!(block.references[1].kind, ReferenceKind::Review);
}

#[test]
fn references_are_capped() {
    let mut r = record("general", "Reading list", &[]);
    r.evidence = (1..=10)
        .map(|n| Citation::titled(format!("Study {n}")))
        .collect();

    let config = AssemblyConfig {
        max_references: 3,
        ..AssemblyConfig::default()
    };
    let block = Assembler::new(ProfileTable::builtin(), config).assemble(&r);
    let texts: Vec<&str> = block.references.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["Study 1", "Study 2", "Study 3"]);
}

#[test]
fn untitled_citations_are_skipped() {
    let mut r = record("general", "Reading list", &[]);
    r.evidence = vec![Citation::titled("  "), Citation::titled("Crisis care guideline")];

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.references[0].text, "Crisis care guideline");
    assert_eq!(block.references[0].kind, ReferenceKind::Safety);
}

// --- Commands ---

#[test]
fn enough_authored_prompts_skip_synthesis() {
    let mut r = record("cbt", "Thought record", &[]);
    r.prompts = vec!["One".into(), "Two".into(), "Three".into()];

    let block = Assembler::default().assemble(&r);
    let mut expected = vec!["One", "Two", "Three"];
    expected.extend(GENERAL_PROMPTS);
    assert_eq!(commands(&block), expected);
}

#[test]
fn few_authored_prompts_are_topped_up() {
    let mut r = record("cbt", "Thought record", &[]);
    r.prompts = vec!["One".into(), "one ".into()];

    let block = Assembler::default().assemble(&r);
    let texts = commands(&block);
    assert_eq!(texts.len(), 1 + 3 + GENERAL_PROMPTS.len());
    assert_eq!(texts[0], "One");
    assert!(texts[1].contains("Thought record"));
    assert_eq!(&texts[4..], GENERAL_PROMPTS);
}

#[test]
fn risk_profile_always_tops_up_within_cap() {
    let mut r = record("crisis", "Safety plan", &[]);
    r.prompts = (1..=5).map(|n| format!("Authored {n}")).collect();

    let block = Assembler::default().assemble(&r);
    let texts = commands(&block);
    assert_eq!(texts.len(), 10);
    assert_eq!(texts[4], "Authored 5");
    assert!(texts[5].contains("Safety plan"));
    assert_eq!(texts[9], GENERAL_PROMPTS[0]);
}

#[test]
fn authored_copy_of_a_general_prompt_is_not_repeated() {
    let mut r = record("cbt", "Thought record", &[]);
    r.prompts = vec![
        "One".into(),
        "Two".into(),
        GENERAL_PROMPTS[1].to_uppercase(),
    ];

    let block = Assembler::default().assemble(&r);
    assert_eq!(block.commands.len(), 4);
}

// --- Failure handling ---

struct PanickingBuilder;

impl ProfileBuilder for PanickingBuilder {
    fn profile(&self) -> Profile {
        Profile::Generic
    }

    fn info(&self, _record: &ContentRecord) -> Vec<InfoSection> {
        panic!("builder exploded");
    }

    fn example(&self, _record: &ContentRecord) -> Option<ExampleVariant> {
        None
    }

    fn references(&self, _record: &ContentRecord) -> Vec<Citation> {
        Vec::new()
    }

    fn prompts(&self, _record: &ContentRecord) -> Vec<String> {
        Vec::new()
    }
}

#[test]
fn panicking_builder_yields_placeholder() {
    let table = ProfileTable::builtin().with(Box::new(PanickingBuilder));
    let assembler = Assembler::new(table, AssemblyConfig::default());

    let block = assembler.assemble(&record("general", "Sleep hygiene", &[]));
    assert_eq!(block, placeholder_block());
    assert_eq!(block.info, PLACEHOLDER_INFO);
    assert!(block.examples.is_empty());
    assert!(block.commands.is_empty());

    // Other profiles are unaffected.
    let block = assembler.assemble(&record("cbt", "Thought record", &[]));
    assert_ne!(block, placeholder_block());
}

#[test]
fn missing_builder_yields_placeholder() {
    let assembler = Assembler::new(ProfileTable::empty(), AssemblyConfig::default());
    let r = record("general", "Sleep hygiene", &[]);

    assert!(matches!(
        assembler.try_assemble(&r),
        Err(AssemblyError::MissingBuilder(Profile::Generic))
    ));
    assert_eq!(assembler.assemble(&r), placeholder_block());
}

// --- Catalogue ---

#[test]
fn catalogue_is_assembled_in_order() {
    let records = [
        record("general", "Sleep hygiene", &[]),
        record("crisis", "Safety plan", &[]),
    ];
    let blocks = assemble_catalogue(&records);
    let ids: Vec<&str> = blocks.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["sleep-hygiene", "safety-plan"]);
    assert!(blocks.iter().all(|(_, block)| !block.is_empty()));
}

#[test]
fn assembly_is_deterministic() {
    let r = record("screening", "PCL-5", &["pcl-5"]);
    let assembler = Assembler::default();
    assert_eq!(assembler.assemble(&r), assembler.assemble(&r));
}

#[test]
fn assembler_can_be_shared_across_threads() {
    let assembler = &Assembler::default();
    let records = [
        record("crisis", "Safety plan", &[]),
        record("screening", "AUDIT-C", &["audit-c"]),
    ];

    std::thread::scope(|s| {
        let handles: Vec<_> = records
            .iter()
            .map(|r| s.spawn(move || assembler.assemble(r)))
            .collect();
        for (handle, r) in handles.into_iter().zip(&records) {
            let block = handle.join().unwrap();
            assert_eq!(block, assembler.assemble(r));
        }
    });
}
