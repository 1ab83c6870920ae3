use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A tag, where quoted attribute values may contain `<` or `>`.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:[^<>"']|"[^"]*"|'[^']*')*>"#).expect("tag pattern is valid")
});

static PLACEHOLDER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:item|placeholder)\b").expect("placeholder pattern is valid")
});

static EMPTY_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<([a-zA-Z][a-zA-Z0-9]*)(?:\s(?:[^<>"']|"[^"]*"|'[^']*')*)?>\s*</([a-zA-Z][a-zA-Z0-9]*)\s*>"#,
    )
    .expect("empty pair pattern is valid")
});

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("space run pattern is valid"));

/// Empty elements that still mean something on a worksheet: an answer box
/// or a blank table cell is content, not leftover scaffolding.
const KEEP_WHEN_EMPTY: &[&str] = &["textarea", "td", "th", "option"];

/// Comparison key: trimmed, lower-cased, internal whitespace collapsed.
pub fn normalize_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Drop blank strings and later duplicates, keeping the first-seen original
/// text of each normalized key in first-seen order.
pub fn dedupe_text<S: AsRef<str>>(strings: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    strings
        .iter()
        .map(|s| AsRef::<str>::as_ref(s))
        .filter(|s| !s.trim().is_empty())
        .filter(|s| seen.insert(normalize_key(s)))
        .map(str::to_string)
        .collect()
}

/// Remove leftover template scaffolding from generated text.
///
/// Standalone "item" and "placeholder" words are removed from text (never
/// from inside tags), then empty paired tags such as `<b></b>` are removed
/// until none remain, then space runs collapse and the result is trimmed.
pub fn strip_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for tag in TAG.find_iter(text) {
        out.push_str(&PLACEHOLDER_WORD.replace_all(&text[last..tag.start()], ""));
        out.push_str(tag.as_str());
        last = tag.end();
    }
    out.push_str(&PLACEHOLDER_WORD.replace_all(&text[last..], ""));

    loop {
        let next = EMPTY_PAIR.replace_all(&out, |caps: &Captures| {
            let open = &caps[1];
            let keep = !open.eq_ignore_ascii_case(&caps[2])
                || KEEP_WHEN_EMPTY.iter().any(|t| open.eq_ignore_ascii_case(t));
            if keep {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned();
        if next == out {
            break;
        }
        out = next;
    }

    SPACE_RUN.replace_all(&out, " ").trim().to_string()
}
