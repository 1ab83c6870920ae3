//! Element and attribute policy.

/// Removed together with their subtree wherever they occur: elements that
/// execute code, embed foreign documents, or carry document-level metadata.
pub const DENIED_ELEMENTS: &[&str] = &[
    "script", "iframe", "object", "embed", "link", "meta", "title", "base",
];

/// Elements kept as-is. Anything else is unwrapped.
pub const ALLOWED_ELEMENTS: &[&str] = &[
    // Text and inline
    "p", "br", "hr", "span", "strong", "b", "em", "i", "u", "s", "small", "sub", "sup",
    "mark", "code", "pre", "blockquote", "abbr", "cite", "q", "time", "a",
    // Headings
    "h1", "h2", "h3", "h4", "h5", "h6",
    // Lists
    "ul", "ol", "li", "dl", "dt", "dd",
    // Tables
    "table", "caption", "colgroup", "col", "thead", "tbody", "tfoot", "tr", "th", "td",
    // Sectioning
    "div", "section", "article", "aside", "header", "footer", "nav", "main", "figure",
    "figcaption", "details", "summary",
    // Forms
    "form", "fieldset", "legend", "label", "input", "select", "option", "textarea",
    "button",
];

pub const ALLOWED_ATTRIBUTES: &[&str] = &[
    "href",
    "colspan",
    "rowspan",
    "style",
    "title",
    "target",
    "rel",
    "type",
    "name",
    "value",
    "required",
    "placeholder",
    "class",
    "id",
    "for",
    "selected",
    "checked",
    "role",
    "tabindex",
];

pub fn is_denied(tag: &str) -> bool {
    DENIED_ELEMENTS.contains(&tag)
}

pub fn is_allowed(tag: &str) -> bool {
    ALLOWED_ELEMENTS.contains(&tag)
}

/// Decide whether an attribute survives on an allowed element.
///
/// Event handlers are always dropped; `aria-*` and `data-*` always pass;
/// everything else must be allow-listed, and `href` must not use the
/// `javascript:` scheme.
pub fn keep_attribute(name: &str, value: &str) -> bool {
    if name.starts_with("on") {
        return false;
    }
    if name.starts_with("aria-") || name.starts_with("data-") {
        return true;
    }
    if !ALLOWED_ATTRIBUTES.contains(&name) {
        return false;
    }
    !(name == "href" && is_script_uri(value))
}

/// `javascript:` after trimming, ignoring case and the tabs, newlines and
/// control characters browsers skip inside a scheme.
pub fn is_script_uri(value: &str) -> bool {
    let scheme: String = value
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take("javascript:".len())
        .collect();
    scheme.eq_ignore_ascii_case("javascript:")
}
