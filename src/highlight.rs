//! Highlighting entry points
//!
//! Text in, markup out: registry rules, candidate scan, overlap
//! resolution, then HTML rendering. Element and document entry points
//! re-derive everything from visible text, so running them twice over the
//! same content gives identical markup.

use tracing::debug;

use crate::config::Config;
use crate::document::{language_of, CodeElement, Document};
use crate::render::{ansi, html, Theme, DEFAULT_MARKER_CLASS};
use crate::syntax::{resolve, scan, Candidate, PatternRegistry};

/// Language assumed for elements without a `language-<id>` class
pub const FALLBACK_ELEMENT_LANGUAGE: &str = "text";

/// Highlight text with the shared registry and default markup
///
/// Empty input comes back unchanged; never fails.
pub fn highlight_text(text: &str, language: &str) -> String {
    Highlighter::new(PatternRegistry::global()).highlight(text, language)
}

/// Highlighting driver bound to a registry
#[derive(Clone)]
pub struct Highlighter<'r> {
    registry: &'r PatternRegistry,
    marker_class: String,
    default_language: String,
}

impl<'r> Highlighter<'r> {
    /// Create a highlighter with default settings
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self {
            registry,
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            default_language: FALLBACK_ELEMENT_LANGUAGE.to_string(),
        }
    }

    /// Create a highlighter using configured marker class and language
    pub fn with_config(registry: &'r PatternRegistry, config: &Config) -> Self {
        Self {
            registry,
            marker_class: config.marker_class.clone(),
            default_language: config.default_language.clone(),
        }
    }

    /// Resolved, disjoint tokens sorted by start
    pub fn tokens<'t>(&self, text: &'t str, language: &str) -> Vec<Candidate<'t>> {
        let rules = self.registry.rules_for(language);
        resolve(scan(text, rules))
    }

    /// Render text as annotated, escaped markup
    pub fn highlight(&self, text: &str, language: &str) -> String {
        if text.is_empty() {
            return text.to_string();
        }
        let tokens = self.tokens(text, language);
        html::render(text, &tokens, &self.marker_class)
    }

    /// Render text with terminal colors
    pub fn highlight_ansi(&self, text: &str, language: &str, theme: &Theme) -> String {
        if text.is_empty() {
            return text.to_string();
        }
        let tokens = self.tokens(text, language);
        ansi::render(text, &tokens, theme)
    }

    /// Replace an element's content with highlighted markup
    ///
    /// The language comes from the element's `language-<id>` class; the
    /// input is the element's visible text, never its current markup.
    pub fn highlight_element(&self, element: &mut dyn CodeElement) {
        let language = language_of(element.class_name())
            .unwrap_or(self.default_language.as_str())
            .to_string();
        let text = element.text_content();
        let markup = self.highlight(&text, &language);
        element.set_inner_html(markup);
    }

    /// Highlight every matching element in a document
    ///
    /// Returns how many elements were rewritten.
    pub fn highlight_all(&self, document: &mut dyn Document) -> usize {
        let mut count = 0;
        for element in document.code_elements() {
            self.highlight_element(element);
            count += 1;
        }
        debug!(elements = count, "highlighted document");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{text_content, HtmlDocument};
    use crate::render::escape_html;
    use crate::syntax::TokenCategory;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tokens(text: &str, language: &str) -> Vec<(TokenCategory, String)> {
        Highlighter::new(PatternRegistry::global())
            .tokens(text, language)
            .into_iter()
            .map(|c| (c.category, c.text.to_string()))
            .collect()
    }

    fn tok(category: TokenCategory, text: &str) -> (TokenCategory, String) {
        (category, text.to_string())
    }

    #[test]
    fn test_comment_then_code() {
        assert_eq!(
            tokens("// a comment\nlet x = 1;", "javascript"),
            vec![
                tok(TokenCategory::Comment, "// a comment"),
                tok(TokenCategory::Keyword, "let"),
                tok(TokenCategory::Operator, "="),
                tok(TokenCategory::Number, "1"),
                tok(TokenCategory::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_string_shadows_comment_inside_it() {
        assert_eq!(
            tokens("let s = '// not a comment';", "javascript"),
            vec![
                tok(TokenCategory::Keyword, "let"),
                tok(TokenCategory::Operator, "="),
                tok(TokenCategory::String, "'// not a comment'"),
                tok(TokenCategory::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(highlight_text("", "rust"), "");
    }

    #[test]
    fn test_unknown_language_call() {
        assert_eq!(
            highlight_text("foo(1)", "text"),
            "<span class=\"token function\">foo</span>\
             <span class=\"token punctuation\">(</span>\
             <span class=\"token number\">1</span>\
             <span class=\"token punctuation\">)</span>"
        );
    }

    #[test]
    fn test_fallback_uses_default_keywords() {
        let text = "const x = await f(0x1F);";
        assert_eq!(highlight_text(text, "unknown-lang-xyz"), highlight_text(text, "javascript"));
        assert!(highlight_text(text, "unknown-lang-xyz").contains("<span class=\"token keyword\">await</span>"));
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert_eq!(tokens("let x = 1", "javascript")[0], tok(TokenCategory::Keyword, "let"));
        assert!(tokens("letter", "javascript").is_empty());
        assert!(!tokens("letter = lets", "javascript")
            .iter()
            .any(|(category, _)| *category == TokenCategory::Keyword));
    }

    #[test]
    fn test_numbers() {
        let found = tokens("0xFF 0b101 3.14e-2f 42", "go");
        let numbers: Vec<_> = found
            .iter()
            .filter(|(c, _)| *c == TokenCategory::Number)
            .map(|(_, t)| t.as_str())
            .collect();
        assert_eq!(numbers, ["0xFF", "0b101", "3.14e-2f", "42"]);
    }

    #[test]
    fn test_spread_is_one_operator() {
        assert_eq!(
            tokens("f(...args)", "javascript"),
            vec![
                tok(TokenCategory::FunctionName, "f"),
                tok(TokenCategory::Punctuation, "("),
                tok(TokenCategory::Operator, "..."),
                tok(TokenCategory::Punctuation, ")"),
            ]
        );
    }

    #[test]
    fn test_markup_is_escaped() {
        let out = highlight_text("if (a < b && c > \"d\") {}", "javascript");
        assert!(out.contains("<span class=\"token operator\">&lt;</span>"));
        assert!(out.contains("<span class=\"token operator\">&amp;&amp;</span>"));
        assert!(out.contains("<span class=\"token string\">&quot;d&quot;</span>"));
    }

    #[test]
    fn test_hash_comments_in_every_language() {
        let out = highlight_text("# note\n#[derive(Debug)]", "rust");
        assert_eq!(
            out,
            "<span class=\"token comment\"># note</span>\n\
             <span class=\"token comment\">#[derive(Debug)]</span>"
        );
        assert_eq!(out, highlight_text("# note\n#[derive(Debug)]", "javascript"));
    }

    #[test]
    fn test_unvalidated_marker_class_stays_in_attribute() {
        let config = Config {
            marker_class: "x\" onclick=\"y".to_string(),
            ..Config::default()
        };
        let highlighter = Highlighter::with_config(PatternRegistry::global(), &config);
        assert_eq!(
            highlighter.highlight("1", "text"),
            "<span class=\"x&quot; onclick=&quot;y number\">1</span>"
        );
    }

    #[test]
    fn test_configured_marker_class() {
        let config = Config {
            marker_class: "hl".to_string(),
            ..Config::default()
        };
        let highlighter = Highlighter::with_config(PatternRegistry::global(), &config);
        assert_eq!(highlighter.highlight("1", "text"), "<span class=\"hl number\">1</span>");
    }

    #[test]
    fn test_highlight_all_is_idempotent() {
        let html = "<p>a &amp; b</p>\
                    <pre><code class=\"language-rust\">fn main() { println!(\"&lt;hi&gt;\"); }</code></pre>\
                    <code class=\"language-\">x(1)</code>";
        let highlighter = Highlighter::new(PatternRegistry::global());

        let mut doc = HtmlDocument::parse(html);
        assert_eq!(highlighter.highlight_all(&mut doc), 2);
        let first = doc.to_html();

        assert!(first.starts_with("<p>a &amp; b</p>"));
        assert!(first.contains("<span class=\"token macro\">println!</span>"));
        assert!(first.contains("<span class=\"token string\">&quot;&lt;hi&gt;&quot;</span>"));
        assert!(first.contains("<span class=\"token function\">x</span>"));

        let mut again = HtmlDocument::parse(&first);
        highlighter.highlight_all(&mut again);
        assert_eq!(again.to_html(), first);
    }

    #[test]
    fn test_named_entities_survive_highlight_all() {
        let html = "<code class=\"language-js\">a &copy; b &mdash; c</code>";
        let highlighter = Highlighter::new(PatternRegistry::global());

        let mut doc = HtmlDocument::parse(html);
        highlighter.highlight_all(&mut doc);
        let first = doc.to_html();
        assert_eq!(first, "<code class=\"language-js\">a \u{a9} b \u{2014} c</code>");
        assert_eq!(doc.blocks().map(|b| b.text_content()).collect::<Vec<_>>(), ["a \u{a9} b \u{2014} c"]);

        let mut again = HtmlDocument::parse(&first);
        highlighter.highlight_all(&mut again);
        assert_eq!(again.to_html(), first);
    }

    #[test]
    fn test_ansi_preview() {
        let highlighter = Highlighter::new(PatternRegistry::global());
        let out = highlighter.highlight_ansi("let x;", "javascript", &Theme::default());
        assert!(out.contains("\x1b["));
        assert!(out.ends_with(" x;"));
        assert_eq!(highlighter.highlight_ansi("", "javascript", &Theme::default()), "");
    }

    fn languages() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["rust", "python", "javascript", "typescript", "go", "bash", "text"])
    }

    fn code() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z0-9 =+\\-*/%'\"`#@!?(){}\\[\\];:.,<>&|_\n\\\\]{0,80}",
            ".{0,40}",
        ]
    }

    proptest! {
        #[test]
        fn prop_tokens_are_disjoint_and_ordered(text in code(), language in languages()) {
            let found = Highlighter::new(PatternRegistry::global()).tokens(&text, language);
            for token in &found {
                prop_assert!(token.end > token.start);
                prop_assert_eq!(token.text, &text[token.start..token.end]);
            }
            for pair in found.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
        }

        #[test]
        fn prop_markup_is_lossless(text in code(), language in languages()) {
            let out = highlight_text(&text, language);
            if text.is_empty() {
                prop_assert_eq!(out, text);
            } else {
                // Tags removed, the escaped source must remain exactly
                let stripped = out.replace("</span>", "");
                let stripped = regex::Regex::new(r#"<span class="token [a-z]+">"#)
                    .unwrap()
                    .replace_all(&stripped, "")
                    .into_owned();
                prop_assert_eq!(&stripped, &escape_html(&text));
                prop_assert_eq!(text_content(&out), text);
            }
        }

        #[test]
        fn prop_element_highlighting_is_idempotent(text in code(), language in languages()) {
            let html = format!("<code class=\"language-{}\">{}</code>", language, escape_html(&text));
            let highlighter = Highlighter::new(PatternRegistry::global());

            let mut doc = HtmlDocument::parse(&html);
            highlighter.highlight_all(&mut doc);
            let first = doc.to_html();

            let mut again = HtmlDocument::parse(&first);
            highlighter.highlight_all(&mut again);
            prop_assert_eq!(again.to_html(), first);
        }
    }
}
