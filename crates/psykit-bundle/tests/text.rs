use psykit_bundle::{dedupe_text, normalize_key, strip_placeholders};

#[test]
fn dedupe_keeps_first_original_in_first_seen_order() {
    let input = [
        "Ask about sleep",
        "  ask   about SLEEP ",
        "Check appetite",
        "",
        "   ",
        "Ask about sleep",
        "check\tappetite",
        "Review medication",
    ];
    assert_eq!(
        dedupe_text(&input),
        vec!["Ask about sleep", "Check appetite", "Review medication"]
    );
}

#[test]
fn dedupe_accepts_owned_strings() {
    let input = vec!["A".to_string(), "a".to_string()];
    assert_eq!(dedupe_text(&input), vec!["A".to_string()]);
}

#[test]
fn normalize_key_collapses_whitespace_and_case() {
    assert_eq!(normalize_key("  The  PHQ-9\n Manual "), "the phq-9 manual");
}

#[test]
fn strip_placeholders_removes_empty_tag_and_word() {
    assert_eq!(strip_placeholders("<b></b> item score"), "score");
}

#[test]
fn strip_placeholders_is_whole_word_and_case_insensitive() {
    assert_eq!(
        strip_placeholders("Placeholder: itemized ITEM list of items"),
        ": itemized list of items"
    );
}

#[test]
fn strip_placeholders_collapses_nested_empties() {
    assert_eq!(strip_placeholders("<p><b>item</b></p>Keep"), "Keep");
    assert_eq!(
        strip_placeholders(r#"<span class="x"> </span>text<i></b>"#),
        "text<i></b>"
    );
}

#[test]
fn strip_placeholders_leaves_tags_and_attributes_alone() {
    assert_eq!(
        strip_placeholders(r#"<li class="item">Rate each placeholder</li>"#),
        r#"<li class="item">Rate each </li>"#
    );
}

#[test]
fn strip_placeholders_keeps_meaningful_empty_elements() {
    let html = r#"<td></td><textarea name="notes"></textarea>"#;
    assert_eq!(strip_placeholders(html), html);
}

#[test]
fn strip_placeholders_respects_quoted_angle_brackets() {
    assert_eq!(
        strip_placeholders(r#"<input value="a > b item"> item score"#),
        r#"<input value="a > b item"> score"#
    );
    assert_eq!(
        strip_placeholders(r#"<span title='x > y'></span>Keep"#),
        "Keep"
    );
}
