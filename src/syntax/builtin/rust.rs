//! Rust language profile

use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenCategory;

const KEYWORDS: &str = "as|async|await|box|break|const|continue|crate|dyn|else|enum|extern|false|fn|for|if|impl|in|let|loop|match|mod|move|mut|pub|ref|return|self|Self|static|struct|super|trait|true|type|unsafe|use|where|while";

/// Create Rust profile
///
/// The shared comment rule still claims `#`, so attributes found here lose
/// to it when the two start together.
pub fn rust_profile() -> LanguageProfile {
    let mut lang = LanguageProfile::new("rust", KEYWORDS);

    // Macros (ending with !)
    if let Some(rule) = PatternRule::new("macro", r"\b\w+!", TokenCategory::Macro) {
        lang.add_rule(rule);
    }

    // Outer and inner attributes, may span lines
    if let Some(rule) = PatternRule::new("attribute", r"#!?\[[\s\S]*?\]", TokenCategory::Attribute) {
        lang.add_rule(rule);
    }

    lang
}
