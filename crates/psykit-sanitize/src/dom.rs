//! Lenient structural HTML parser and serializer.
//!
//! Accepts partial or malformed fragments without failing: unclosed elements
//! close at end of input, a closing tag pops back to its nearest open match
//! (implicitly closing anything opened inside it), and stray closing tags are
//! ignored. There are no implied-end-tag or foster-parenting rules; the tree
//! is exactly what the tags say. Tag and attribute names are lower-cased and
//! the first occurrence of a duplicated attribute wins.
//!
//! Nesting is capped at [`MAX_DEPTH`]: an element opened deeper than that is
//! dropped and its content flows into the deepest open element, so every
//! tree this module produces can be walked recursively.

/// A node in a parsed fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Decoded text content.
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Attributes in source order, values decoded.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose content is taken verbatim up to the matching close tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Deepest element nesting kept by [`parse_fragment`].
pub const MAX_DEPTH: usize = 256;

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Parse a fragment into a list of top-level nodes.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let mut parser = Parser {
        src: html,
        pos: 0,
        stack: vec![Element::new("#root")],
    };
    parser.run();
    parser.finish()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    /// Open elements; index 0 is a synthetic root.
    stack: Vec<Element>,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn run(&mut self) {
        while self.pos < self.src.len() {
            let rest = self.rest();
            if let Some(body) = rest.strip_prefix("<!--") {
                let (comment, consumed) = match body.find("-->") {
                    Some(end) => (&body[..end], 4 + end + 3),
                    None => (body, rest.len()),
                };
                self.append(Node::Comment(comment.to_string()));
                self.pos += consumed;
            } else if rest.starts_with("<!") || rest.starts_with("<?") {
                // Doctype or processing instruction: dropped.
                self.pos += rest.find('>').map_or(rest.len(), |i| i + 1);
            } else if rest.starts_with("</") && starts_with_letter(&rest[2..]) {
                self.close_tag();
            } else if rest.starts_with('<') && starts_with_letter(&rest[1..]) {
                self.open_tag();
            } else {
                self.text();
            }
        }
    }

    fn text(&mut self) {
        let rest = self.rest();
        // Always consume at least one byte so a lone '<' becomes text.
        let first = rest.chars().next().map_or(1, char::len_utf8);
        let end = rest[first..]
            .find('<')
            .map_or(rest.len(), |i| i + first);
        self.append_text(&decode_entities(&rest[..end]));
        self.pos += end;
    }

    fn open_tag(&mut self) {
        let rest = self.rest();
        let name_len = name_length(&rest[1..]);
        let tag = rest[1..1 + name_len].to_ascii_lowercase();
        self.pos += 1 + name_len;

        let (attrs, self_closing) = self.attributes();
        let mut element = Element::new(&tag);
        for (name, value) in attrs {
            if element.attr(&name).is_none() {
                element.attrs.push((name, value));
            }
        }

        if is_void(&tag) || self_closing && !RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
            self.append(Node::Element(element));
        } else if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
            let rest = self.rest();
            let close = find_close_tag(rest, &tag);
            let raw = &rest[..close.unwrap_or(rest.len())];
            if !raw.is_empty() {
                let text = if tag == "textarea" || tag == "title" {
                    decode_entities(raw)
                } else {
                    raw.to_string()
                };
                element.children.push(Node::Text(text));
            }
            self.pos += raw.len();
            if close.is_some() {
                self.skip_past_gt();
            }
            self.append(Node::Element(element));
        } else if self.stack.len() <= MAX_DEPTH {
            self.stack.push(element);
        }
    }

    /// Parse attributes up to and including the closing `>`.
    /// Returns the attributes and whether the tag ended with `/>`.
    fn attributes(&mut self) -> (Vec<(String, String)>, bool) {
        let mut attrs = Vec::new();
        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return (attrs, false);
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                return (attrs, true);
            }
            if rest.starts_with('>') {
                self.pos += 1;
                return (attrs, false);
            }
            if rest.starts_with('/') {
                self.pos += 1;
                continue;
            }

            let name_end = rest
                .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
                .unwrap_or(rest.len())
                .max(rest.chars().next().map_or(1, char::len_utf8));
            let name = rest[..name_end].to_ascii_lowercase();
            self.pos += name_end;
            self.skip_whitespace();

            let mut value = String::new();
            if self.rest().starts_with('=') {
                self.pos += 1;
                self.skip_whitespace();
                value = self.attribute_value();
            }
            attrs.push((name, value));
        }
    }

    fn attribute_value(&mut self) -> String {
        let rest = self.rest();
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &rest[1..];
                match body.find(quote) {
                    Some(end) => {
                        self.pos += end + 2;
                        decode_entities(&body[..end])
                    }
                    None => {
                        self.pos += rest.len();
                        decode_entities(body)
                    }
                }
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                self.pos += end;
                decode_entities(&rest[..end])
            }
            None => String::new(),
        }
    }

    fn close_tag(&mut self) {
        let rest = self.rest();
        let name_len = name_length(&rest[2..]);
        let tag = rest[2..2 + name_len].to_ascii_lowercase();
        self.pos += 2 + name_len;
        self.skip_past_gt();

        // Pop back to the nearest open element with this tag, if any.
        if let Some(depth) = self.stack.iter().rposition(|e| e.tag == tag) {
            if depth == 0 {
                return;
            }
            while self.stack.len() > depth {
                self.pop();
            }
        }
    }

    fn skip_past_gt(&mut self) {
        let rest = self.rest();
        self.pos += rest.find('>').map_or(rest.len(), |i| i + 1);
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    fn append(&mut self, node: Node) {
        if let Some(parent) = self.stack.last_mut() {
            parent.children.push(node);
        }
    }

    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(parent) = self.stack.last_mut() {
            if let Some(Node::Text(existing)) = parent.children.last_mut() {
                existing.push_str(text);
            } else {
                parent.children.push(Node::Text(text.to_string()));
            }
        }
    }

    fn pop(&mut self) {
        if self.stack.len() > 1
            && let Some(element) = self.stack.pop()
        {
            self.append(Node::Element(element));
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while self.stack.len() > 1 {
            self.pop();
        }
        self.stack
            .pop()
            .map(|root| root.children)
            .unwrap_or_default()
    }
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn name_length(s: &str) -> usize {
    s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == ':' || c == '_'))
        .unwrap_or(s.len())
}

/// Byte offset of `</tag` (case-insensitive) in `s`.
fn find_close_tag(s: &str, tag: &str) -> Option<usize> {
    let needle = format!("</{tag}");
    let lower = s.to_ascii_lowercase();
    let mut from = 0;
    while let Some(i) = lower[from..].find(&needle) {
        let at = from + i;
        let after = lower[at + needle.len()..].chars().next();
        if after.is_none_or(|c| c == '>' || c == '/' || c.is_whitespace()) {
            return Some(at);
        }
        from = at + needle.len();
    }
    None
}

/// Decode character references: every HTML5 named entity plus decimal and
/// hex numeric references. Unknown entities are left as written.
pub fn decode_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

/// Serialize nodes back to markup.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => escape_into(out, text, false),
        Node::Comment(text) => {
            out.push_str("<!--");
            out.push_str(&text.replace("-->", "--&gt;"));
            out.push_str("-->");
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(out, value, true);
                out.push('"');
            }
            out.push('>');
            if is_void(&element.tag) {
                return;
            }
            for child in &element.children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

fn escape_into(out: &mut String, text: &str, attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

/// Concatenated text content of a node list, in document order.
pub fn text_content(nodes: &[Node]) -> String {
    let mut out = String::new();
    collect_text(&mut out, nodes);
    out
}

fn collect_text(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(out, &element.children),
            Node::Comment(_) => {}
        }
    }
}
