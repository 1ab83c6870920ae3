use psykit_core::catalogue::parse_catalogue;
use psykit_core::error::CoreError;
use psykit_core::models::profile::Profile;
use psykit_core::models::record::Citation;

#[test]
fn minimal_records_fill_defaults() {
    let json = r#"[
        { "id": "phq9", "category": "screening", "title": "PHQ-9" },
        { "id": "safety-plan", "category": "risk", "title": "Safety plan", "tags": ["Suicide"] }
    ]"#;

    let records = parse_catalogue(json).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].tags.is_empty());
    assert!(records[0].summary.is_none());
    assert!(records[0].examples.is_empty());
    assert_eq!(records[1].normalized_tags(), vec!["suicide".to_string()]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        { "id": "a", "category": "x", "title": "One" },
        { "id": "a", "category": "y", "title": "Two" }
    ]"#;

    match parse_catalogue(json) {
        Err(CoreError::DuplicateRecord(id)) => assert_eq!(id, "a"),
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn blank_id_is_a_missing_field() {
    let json = r#"[{ "id": "  ", "category": "x", "title": "Untitled" }]"#;
    assert!(matches!(
        parse_catalogue(json),
        Err(CoreError::MissingField(_))
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    assert!(matches!(
        parse_catalogue("{not json"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn citation_display_line_includes_authors_year_and_source() {
    let citation = Citation {
        title: "The PHQ-9: validity of a brief depression severity measure".to_string(),
        authors: Some("Kroenke K, Spitzer RL, Williams JB".to_string()),
        year: Some(2001),
        source: Some("J Gen Intern Med".to_string()),
        url: None,
    };

    assert_eq!(
        citation.display_line(),
        "Kroenke K, Spitzer RL, Williams JB (2001). The PHQ-9: validity of a brief \
         depression severity measure. J Gen Intern Med"
    );
    assert_eq!(Citation::titled("Bare title").display_line(), "Bare title");
}

#[test]
fn profiles_serialize_as_kebab_case() {
    let json = serde_json::to_string(&Profile::DiagnosticFormulation).unwrap();
    assert_eq!(json, "\"diagnostic-formulation\"");
    for profile in Profile::ALL {
        let encoded = serde_json::to_string(&profile).unwrap();
        assert_eq!(encoded, format!("\"{}\"", profile.as_str()));
    }
}
