//! Token categories for syntax highlighting
//!
//! This module defines the lexical categories a token can be
//! classified into, the CSS class each one renders with, and
//! their default terminal styles.

use super::style::{Color, Style};

/// Lexical categories recognised by the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Source code comments (`//`, `/* */`, `#`, `<!-- -->`)
    Comment,
    /// String literals, including raw strings
    String,
    /// Language keywords (if, else, fn, let, etc.)
    Keyword,
    /// Numeric literals (hex, binary, decimal with exponent)
    Number,
    /// Identifiers immediately followed by a call parenthesis
    FunctionName,
    /// Operator clusters (`+=`, `->`, `..`)
    Operator,
    /// Single bracket or separator characters
    Punctuation,
    /// Macro invocations (println!, vec!)
    Macro,
    /// Attribute annotations (#[derive])
    Attribute,
    /// Decorator annotations (@property)
    Decorator,
}

impl TokenCategory {
    /// Every category, in declaration order
    pub const ALL: [TokenCategory; 10] = [
        TokenCategory::Comment,
        TokenCategory::String,
        TokenCategory::Keyword,
        TokenCategory::Number,
        TokenCategory::FunctionName,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
        TokenCategory::Macro,
        TokenCategory::Attribute,
        TokenCategory::Decorator,
    ];

    /// Class name emitted in the output markup
    pub fn class_name(&self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::String => "string",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Number => "number",
            TokenCategory::FunctionName => "function",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Macro => "macro",
            TokenCategory::Attribute => "attribute",
            TokenCategory::Decorator => "decorator",
        }
    }

    /// Parse a category from its class name (for config loading)
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.class_name() == name)
    }

    /// Get the default terminal style for this category
    pub fn default_style(&self) -> Style {
        match self {
            TokenCategory::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenCategory::String => Style::fg(Color::Green),
            TokenCategory::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenCategory::Number => Style::fg(Color::Cyan),
            TokenCategory::FunctionName => Style::fg(Color::Blue),
            TokenCategory::Operator => Style::fg(Color::BrightWhite),
            TokenCategory::Punctuation => Style::default(),
            TokenCategory::Macro => Style::fg(Color::BrightCyan),
            TokenCategory::Attribute => Style::fg(Color::BrightBlue),
            TokenCategory::Decorator => Style::fg(Color::BrightBlue).with_underline(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        assert!(!TokenCategory::Comment.default_style().is_default());
        assert!(!TokenCategory::Keyword.default_style().is_default());
        // Punctuation renders plain
        assert!(TokenCategory::Punctuation.default_style().is_default());
    }

    #[test]
    fn test_class_names_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for category in TokenCategory::ALL {
            let name = category.class_name();
            assert_eq!(name, name.to_lowercase());
            assert!(seen.insert(name), "duplicate class {}", name);
        }
        assert_eq!(TokenCategory::FunctionName.class_name(), "function");
    }

    #[test]
    fn test_from_class_name() {
        assert_eq!(TokenCategory::from_class_name("macro"), Some(TokenCategory::Macro));
        assert_eq!(TokenCategory::from_class_name("function"), Some(TokenCategory::FunctionName));
        assert_eq!(TokenCategory::from_class_name("Macro"), None);
        assert_eq!(TokenCategory::from_class_name(""), None);
    }
}
