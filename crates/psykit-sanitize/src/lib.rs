//! psykit-sanitize
//!
//! Allow-list HTML sanitizer for clinician-authored worksheet markup.
//!
//! This is a best-effort filter for trusted or semi-trusted static content.
//! It is not hardened against adversarial input; anything accepting
//! untrusted HTML should put an audited sanitizer in front of it.

pub mod dom;
pub mod policy;

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use dom::{Element, Node};

static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("blank-line pattern is valid")
});

#[derive(Debug, Default)]
struct Stats {
    removed: usize,
    unwrapped: usize,
    attributes_dropped: usize,
}

/// Reduce `html` to the allowed element and attribute subset.
///
/// Denied elements are removed with their content, unknown elements are
/// replaced by their (sanitized) children, and comments are dropped.
/// `sanitize(&sanitize(x)) == sanitize(x)` for every input.
pub fn sanitize(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let mut stats = Stats::default();
    let nodes = sanitize_nodes(dom::parse_fragment(html), &mut stats);

    trace!(
        removed = stats.removed,
        unwrapped = stats.unwrapped,
        attributes_dropped = stats.attributes_dropped,
        "sanitized fragment"
    );

    dom::serialize(&nodes)
}

/// Plain text content of `html`, without scripts, styles or metadata.
///
/// Runs of three or more newlines collapse to a single blank line and the
/// result is trimmed.
pub fn extract_text(html: &str) -> String {
    let nodes = strip_for_text(dom::parse_fragment(html));
    let text = dom::text_content(&nodes).replace("\r\n", "\n");
    BLANK_LINES.replace_all(&text, "\n\n").trim().to_string()
}

/// Escape plain text for inclusion in markup.
pub fn escape_text(text: &str) -> String {
    dom::serialize(&[Node::Text(text.to_string())])
}

/// Sanitize an owned snapshot of sibling nodes.
fn sanitize_nodes(nodes: Vec<Node>, stats: &mut Stats) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Text(text) => out.push(Node::Text(text)),
            Node::Comment(_) => stats.removed += 1,
            Node::Element(element) if policy::is_denied(&element.tag) => stats.removed += 1,
            Node::Element(element) if !policy::is_allowed(&element.tag) => {
                stats.unwrapped += 1;
                out.extend(sanitize_nodes(element.children, stats));
            }
            Node::Element(element) => out.push(Node::Element(sanitize_element(element, stats))),
        }
    }
    out
}

fn sanitize_element(element: Element, stats: &mut Stats) -> Element {
    let Element {
        tag,
        attrs,
        children,
    } = element;

    let before = attrs.len();
    let attrs: Vec<_> = attrs
        .into_iter()
        .filter(|(name, value)| policy::keep_attribute(name, value))
        .collect();
    stats.attributes_dropped += before - attrs.len();

    Element {
        tag,
        attrs,
        children: sanitize_nodes(children, stats),
    }
}

fn strip_for_text(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .filter_map(|node| match node {
            Node::Element(element)
                if policy::is_denied(&element.tag) || element.tag == "style" =>
            {
                None
            }
            Node::Element(mut element) => {
                element.children = strip_for_text(element.children);
                Some(Node::Element(element))
            }
            Node::Comment(_) => None,
            text @ Node::Text(_) => Some(text),
        })
        .collect()
}
