//! Candidate token discovery
//!
//! Every rule is run over the whole text independently; the same range
//! may be claimed by several rules. Overlaps are settled by the resolver.

use super::rules::PatternRule;
use super::tokens::TokenCategory;

/// A labeled span found by one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    /// Category of the rule that produced this match
    pub category: TokenCategory,
    /// Byte offset where the token starts (inclusive)
    pub start: usize,
    /// Byte offset where the token ends (exclusive)
    pub end: usize,
    /// Priority of the producing rule (lower wins ties)
    pub priority: usize,
    /// Matched text
    pub text: &'t str,
}

impl Candidate<'_> {
    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Collect every self-match of every rule
///
/// A rule never reports overlapping matches against itself. After an
/// empty match the rule's scan moves one character forward, so patterns
/// that can match nothing still terminate.
pub fn scan<'t>(text: &'t str, rules: &[PatternRule]) -> Vec<Candidate<'t>> {
    let mut candidates = Vec::new();

    for rule in rules {
        let mut pos = 0;
        while pos <= text.len() {
            let Some(m) = rule.pattern.find_at(text, pos) else {
                break;
            };

            // A well-behaved pattern never reports before `pos` or past the end
            if m.start < pos || m.end < m.start || m.end > text.len() {
                break;
            }

            candidates.push(Candidate {
                category: rule.category,
                start: m.start,
                end: m.end,
                priority: rule.priority,
                text: text.get(m.start..m.end).unwrap_or_default(),
            });

            pos = if m.resume > m.start {
                m.resume
            } else {
                next_char_boundary(text, m.start)
            };
        }
    }

    candidates
}

/// Offset just past the character starting at `pos`
fn next_char_boundary(text: &str, pos: usize) -> usize {
    match text.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(ch) => pos + ch.len_utf8(),
        None => text.len() + 1,
    }
}
