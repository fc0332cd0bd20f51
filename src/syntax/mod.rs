//! Tokenizing and overlap resolution
//!
//! This module turns raw source text into an ordered set of labeled,
//! non-overlapping spans:
//! - Registry: language id to ordered pattern rules
//! - Matcher: every rule against the whole text
//! - Resolver: earliest-start, then priority, disjoint subset

mod builtin;
mod language;
mod matcher;
mod registry;
mod resolver;
mod rules;
mod style;
mod tokens;

pub use language::{keyword_pattern, LanguageProfile};
pub use matcher::{scan, Candidate};
pub use registry::PatternRegistry;
pub use resolver::resolve;
pub use rules::{LeadingGroup, PatternMatch, PatternRule, TextPattern};
pub use style::{Color, Style};
pub use tokens::TokenCategory;
