//! Document model for code blocks
//!
//! Elements opt into highlighting with a `language-<id>` class. The
//! [`CodeElement`] and [`Document`] traits are what the highlighter drives;
//! [`HtmlDocument`] implements them over an HTML string so rendered pages
//! can be processed without a browser.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Opening `<code>` or `<pre>` tag with its attribute text
///
/// Quoted attribute values may contain `>`.
static OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<(code|pre)\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#).expect("open tag regex should be valid")
});

/// Any opening or closing `<code>`/`<pre>` tag, for balancing
static CODE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<(/?)(code|pre)\b(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("code tag regex should be valid")
});

/// `class` attribute, double-, single- or un-quoted
static CLASS_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("class attribute regex should be valid")
});

static LANGUAGE_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"language-(\w+)").expect("language class regex should be valid")
});

static MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<!--[\s\S]*?-->|<(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("markup regex should be valid")
});

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(?:#([0-9]+|[xX][0-9a-fA-F]+)|[a-zA-Z][a-zA-Z0-9]*);").expect("entity regex should be valid")
});

/// An element whose content can be highlighted
pub trait CodeElement {
    /// Raw `class` attribute value
    fn class_name(&self) -> &str;

    /// Visible text, ignoring any markup already inside the element
    fn text_content(&self) -> String;

    /// Replace the element's content with rendered markup
    fn set_inner_html(&mut self, html: String);
}

/// A collection of highlightable elements
pub trait Document {
    /// Every element matching the `language-` class selector, in order
    fn code_elements(&mut self) -> Vec<&mut dyn CodeElement>;
}

/// Language id from a class attribute (`language-<id>`)
pub fn language_of(class_name: &str) -> Option<&str> {
    LANGUAGE_CLASS
        .captures(class_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether a class attribute opts into highlighting
pub fn is_code_class(class_name: &str) -> bool {
    class_name.contains("language-")
}

/// Visible text of an HTML fragment: tags removed, entities decoded
pub fn text_content(html: &str) -> String {
    let stripped = MARKUP.replace_all(html, "");
    decode_entities(&stripped)
}

/// Decode character references; unknown names are kept as written
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| match caps.get(1) {
            Some(number) => numeric_reference(number.as_str()).to_string(),
            None => html_escape::decode_html_entities(&caps[0]).into_owned(),
        })
        .into_owned()
}

/// `#` reference body to a char; NUL, surrogates and out-of-range become U+FFFD
fn numeric_reference(digits: &str) -> char {
    let code = match digits.strip_prefix(|c: char| c == 'x' || c == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => digits.parse().ok(),
    };
    code.filter(|&c| c != 0)
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// A `<code>` or `<pre>` element carrying a `language-` class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Lowercased tag name
    tag: String,
    /// Opening tag exactly as written
    open_tag: String,
    /// Closing tag exactly as written
    close_tag: String,
    class_name: String,
    inner_html: String,
}

impl CodeBlock {
    /// Current content markup
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Lowercased tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn write_html(&self, out: &mut String) {
        out.push_str(&self.open_tag);
        out.push_str(&self.inner_html);
        out.push_str(&self.close_tag);
    }
}

impl CodeElement for CodeBlock {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn text_content(&self) -> String {
        text_content(&self.inner_html)
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Verbatim(String),
    Code(CodeBlock),
}

/// HTML text split into untouched segments and code elements
///
/// Only the content of matching elements ever changes; everything else is
/// written back byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDocument {
    segments: Vec<Segment>,
}

impl HtmlDocument {
    /// Split an HTML string into segments
    ///
    /// An element without a matching close tag is left as verbatim text.
    /// When a matching element contains another, only the outer one is a
    /// code element.
    pub fn parse(html: &str) -> Self {
        let mut segments = Vec::new();
        let mut verbatim_start = 0;
        let mut search = 0;

        while let Some(caps) = OPEN_TAG.captures_at(html, search) {
            let (Some(open), Some(tag)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            search = open.end();

            let attrs = caps.get(2).map_or("", |m| m.as_str());
            if attrs.trim_end().ends_with('/') {
                continue;
            }
            let Some(class_name) = class_attr(attrs).filter(|c| is_code_class(c)) else {
                continue;
            };
            let tag = tag.as_str().to_ascii_lowercase();
            let Some((inner_end, close_end)) = find_close(html, &tag, open.end()) else {
                continue;
            };

            if verbatim_start < open.start() {
                segments.push(Segment::Verbatim(html[verbatim_start..open.start()].to_string()));
            }
            segments.push(Segment::Code(CodeBlock {
                tag,
                open_tag: open.as_str().to_string(),
                close_tag: html[inner_end..close_end].to_string(),
                class_name: class_name.to_string(),
                inner_html: html[open.end()..inner_end].to_string(),
            }));

            verbatim_start = close_end;
            search = close_end;
        }

        if verbatim_start < html.len() {
            segments.push(Segment::Verbatim(html[verbatim_start..].to_string()));
        }

        Self { segments }
    }

    /// Code elements in document order
    pub fn blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Code(block) => Some(block),
            Segment::Verbatim(_) => None,
        })
    }

    /// Reassemble the document
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Verbatim(text) => out.push_str(text),
                Segment::Code(block) => block.write_html(&mut out),
            }
        }
        out
    }
}

impl Document for HtmlDocument {
    fn code_elements(&mut self) -> Vec<&mut dyn CodeElement> {
        self.segments
            .iter_mut()
            .filter_map(|segment| match segment {
                Segment::Code(block) => Some(block as &mut dyn CodeElement),
                Segment::Verbatim(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

fn class_attr(attrs: &str) -> Option<&str> {
    let caps = CLASS_ATTR.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// Find the close tag balancing an open `tag` whose content starts at `from`
///
/// Returns (content end, close tag end).
fn find_close(html: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    for caps in CODE_TAG.captures_iter(&html[from..]) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };
        if !name.as_str().eq_ignore_ascii_case(tag) {
            continue;
        }
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some((from + whole.start(), from + whole.end()));
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    None
}
