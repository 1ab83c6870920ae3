use psykit_sanitize::dom::{decode_entities, parse_fragment, serialize, text_content, Node};

#[test]
fn closing_tag_pops_to_nearest_match() {
    let nodes = parse_fragment("<b><i>x</b>y</i>");
    assert_eq!(serialize(&nodes), "<b><i>x</i></b>y");
}

#[test]
fn stray_closing_tags_are_ignored() {
    assert_eq!(serialize(&parse_fragment("a</div>b")), "ab");
}

#[test]
fn lone_angle_brackets_are_text() {
    let nodes = parse_fragment("1 < 2 > 0");
    assert_eq!(nodes, vec![Node::Text("1 < 2 > 0".to_string())]);
    assert_eq!(serialize(&nodes), "1 &lt; 2 &gt; 0");
}

#[test]
fn names_are_lowercased_and_first_duplicate_attribute_wins() {
    let nodes = parse_fragment(r#"<DIV Class="a" class="b" ID=main>x</DIV>"#);
    match &nodes[0] {
        Node::Element(element) => {
            assert_eq!(element.tag, "div");
            assert_eq!(element.attr("class"), Some("a"));
            assert_eq!(element.attr("id"), Some("main"));
            assert_eq!(element.attrs.len(), 2);
        }
        other => panic!("expected element, got {other:?}"),
    }
}

#[test]
fn raw_text_elements_keep_markup_as_text() {
    let nodes = parse_fragment("<script>if (a < b) { x('</p>') }</script>after");
    assert_eq!(text_content(&nodes), "if (a < b) { x('</p>') }after");
}

#[test]
fn void_elements_take_no_children() {
    let nodes = parse_fragment("<br>text<input type=checkbox>more");
    assert_eq!(nodes.len(), 4);
    assert_eq!(serialize(&nodes), r#"<br>text<input type="checkbox">more"#);
}

#[test]
fn unknown_entities_are_left_alone() {
    assert_eq!(decode_entities("a &bogus; b &#65; &#x42;"), "a &bogus; b A B");
}

#[test]
fn full_named_entity_table_is_decoded() {
    assert_eq!(
        decode_entities("caf&eacute; &rarr; &times; &plusmn; &Omega; &hearts;"),
        "café → × ± Ω ♥"
    );
}

#[test]
fn elements_beyond_the_depth_cap_are_flattened() {
    use psykit_sanitize::dom::MAX_DEPTH;

    let html = format!("{}<i>x</i>", "<b>".repeat(MAX_DEPTH + 50));
    let nodes = parse_fragment(&html);

    let mut depth = 0;
    let mut level = &nodes;
    while let Some(Node::Element(element)) = level.first() {
        depth += 1;
        level = &element.children;
    }
    assert_eq!(depth, MAX_DEPTH);
    assert_eq!(text_content(&nodes), "x");
}
