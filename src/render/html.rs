//! HTML markup renderer

use crate::syntax::Candidate;

/// Marker class shared by every token span
pub const DEFAULT_MARKER_CLASS: &str = "token";

/// Render text with each resolved span wrapped in a labeled `<span>`
///
/// Spans must be disjoint and sorted by start, as produced by the
/// resolver. Gaps and token text are escaped exactly once each, so the
/// visible text of the result always equals the input.
pub fn render(text: &str, spans: &[Candidate<'_>], marker_class: &str) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 32);
    let mut cursor = 0;

    for span in spans {
        // Out-of-order input would duplicate text; skip rather than corrupt
        if span.start < cursor || span.end > text.len() {
            continue;
        }
        escape_html_into(&text[cursor..span.start], &mut out);
        out.push_str("<span class=\"");
        escape_html_into(marker_class, &mut out);
        out.push(' ');
        out.push_str(span.category.class_name());
        out.push_str("\">");
        escape_html_into(span.text, &mut out);
        out.push_str("</span>");
        cursor = span.end;
    }

    escape_html_into(&text[cursor..], &mut out);
    out
}

/// Escape `& < > " '` for safe insertion as markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

fn escape_html_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
