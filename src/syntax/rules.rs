//! Pattern rules for syntax highlighting
//!
//! A rule pairs a token category with a [`TextPattern`] and an explicit
//! priority. Lower priority values win ties when two rules claim a token
//! starting at the same offset.

use regex::Regex;
use tracing::warn;

use super::tokens::TokenCategory;

/// A single match reported by a [`TextPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where the token starts (inclusive)
    pub start: usize,
    /// Byte offset where the token ends (exclusive)
    pub end: usize,
    /// Offset the next search for the same rule resumes from
    pub resume: usize,
}

/// Match-all-occurrences capability used by the matcher
///
/// Implementations search `text` from byte offset `start` and report the
/// leftmost match at or after it. `resume` may exceed `end` when the pattern
/// consumes trailing context that is not part of the token.
pub trait TextPattern: Send + Sync {
    fn find_at(&self, text: &str, start: usize) -> Option<PatternMatch>;
}

impl TextPattern for Regex {
    fn find_at(&self, text: &str, start: usize) -> Option<PatternMatch> {
        if start > text.len() {
            return None;
        }
        // find_at keeps the surrounding text visible to \b
        Regex::find_at(self, text, start).map(|m| PatternMatch {
            start: m.start(),
            end: m.end(),
            resume: m.end(),
        })
    }
}

/// Pattern whose token is its first capture group
///
/// Stands in for a trailing look-ahead: `\b(\w+)\s*\(` reports only the
/// identifier while the rule's scan continues after the parenthesis.
pub struct LeadingGroup {
    regex: Regex,
}

impl LeadingGroup {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(|regex| Self { regex })
    }
}

impl TextPattern for LeadingGroup {
    fn find_at(&self, text: &str, start: usize) -> Option<PatternMatch> {
        if start > text.len() {
            return None;
        }
        let caps = self.regex.captures_at(text, start)?;
        let whole = caps.get(0)?;
        let token = caps.get(1).unwrap_or(whole);
        Some(PatternMatch {
            start: token.start(),
            end: token.end(),
            resume: whole.end(),
        })
    }
}

/// A single pattern rule
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Pattern used to find tokens
    pub pattern: Box<dyn TextPattern>,
    /// Category assigned to matches
    pub category: TokenCategory,
    /// Position in the language's rule list (lower = wins ties)
    pub priority: usize,
}

impl PatternRule {
    /// Create a rule from a regex; the whole match is the token
    ///
    /// An invalid pattern is logged and yields `None` so one bad rule never
    /// takes a whole language down with it.
    pub fn new(name: &str, pattern: &str, category: TokenCategory) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self::from_pattern(name, regex, category)),
            Err(err) => {
                warn!(rule = name, %err, "dropping rule with invalid pattern");
                None
            }
        }
    }

    /// Create a rule whose token is the regex's first capture group
    pub fn leading_group(name: &str, pattern: &str, category: TokenCategory) -> Option<Self> {
        match LeadingGroup::new(pattern) {
            Ok(group) => Some(Self::from_pattern(name, group, category)),
            Err(err) => {
                warn!(rule = name, %err, "dropping rule with invalid pattern");
                None
            }
        }
    }

    /// Create a rule from any [`TextPattern`]
    pub fn from_pattern(name: &str, pattern: impl TextPattern + 'static, category: TokenCategory) -> Self {
        Self {
            name: name.to_string(),
            pattern: Box::new(pattern),
            category,
            priority: 0,
        }
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("priority", &self.priority)
            .finish()
    }
}
