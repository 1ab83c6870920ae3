//! Property tests for the sanitizer.

use proptest::prelude::*;

use psykit_sanitize::dom::{parse_fragment, Node};
use psykit_sanitize::policy::is_script_uri;
use psykit_sanitize::sanitize;

fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<p>".to_string()),
        Just("</p>".to_string()),
        Just("<div class=\"c\">".to_string()),
        Just("</div>".to_string()),
        Just("<a href=\"javascript:void(0)\" onclick=\"x()\">".to_string()),
        Just("<a href=\"https://example.org\">".to_string()),
        Just("</a>".to_string()),
        Just("<script>".to_string()),
        Just("</script>".to_string()),
        Just("<style>".to_string()),
        Just("<textarea>".to_string()),
        Just("</textarea>".to_string()),
        Just("<custom-el data-x=1 onload=y>".to_string()),
        Just("</custom-el>".to_string()),
        Just("<input type=radio checked>".to_string()),
        Just("<br/>".to_string()),
        Just("<!-- c -->".to_string()),
        arb_entity(),
        "[a-zA-Z0-9 <>&\"'=/;:!-]{0,8}",
    ]
}

/// Named, numeric and made-up character references, some unterminated.
fn arb_entity() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "amp", "lt", "gt", "quot", "apos", "nbsp", "eacute", "rarr", "times", "plusmn",
            "frac12", "hellip", "Omega", "ge", "le", "deg", "copy", "laquo", "raquo",
        ])
        .prop_map(|name| format!("&{name};")),
        (0u32..0x11_0000).prop_map(|code| format!("&#{code};")),
        (0u32..0x11_0000).prop_map(|code| format!("&#x{code:X};")),
        "&[a-zA-Z]{1,8};?",
        "&#[0-9]{0,9};?",
    ]
}

fn arb_tag_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["div", "span", "b", "p", "custom-el", "li"])
}

fn arb_html() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_token(), 0..24).prop_map(|tokens| tokens.concat())
}

fn assert_clean(nodes: &[Node]) -> Result<(), TestCaseError> {
    for node in nodes {
        if let Node::Element(element) = node {
            for (name, value) in &element.attrs {
                prop_assert!(!name.starts_with("on"), "handler attribute {name}");
                prop_assert!(
                    !(name == "href" && is_script_uri(value)),
                    "script href {value}"
                );
            }
            assert_clean(&element.children)?;
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn sanitize_is_idempotent_on_markup(html in arb_html()) {
        let once = sanitize(&html);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_is_idempotent_on_arbitrary_text(html in any::<String>()) {
        let once = sanitize(&html);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_is_idempotent_on_entity_text(
        entities in prop::collection::vec(arb_entity(), 1..16),
    ) {
        let html = format!("<p title=\"{}\">{}</p>", entities.join(""), entities.join(" "));
        let once = sanitize(&html);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_is_idempotent_on_deep_nesting(
        tags in prop::collection::vec(arb_tag_name(), 200..1_500),
        close in any::<bool>(),
    ) {
        let mut html: String = tags.iter().map(|t| format!("<{t}>")).collect();
        html.push_str("text");
        if close {
            html.extend(tags.iter().rev().map(|t| format!("</{t}>")));
        }
        let once = sanitize(&html);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn output_has_no_handlers_or_script_links(html in arb_html()) {
        let nodes = parse_fragment(&sanitize(&html));
        assert_clean(&nodes)?;
    }
}
