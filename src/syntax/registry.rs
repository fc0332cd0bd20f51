//! Pattern registry
//!
//! Maps language identifiers to their ordered rule lists. The registry is
//! built once and only read afterwards; [`PatternRegistry::global`] holds
//! the process-wide instance.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use super::builtin;
use super::language::LanguageProfile;
use super::rules::PatternRule;

static GLOBAL: Lazy<PatternRegistry> = Lazy::new(PatternRegistry::new);

/// Read-only table of rule lists keyed by language identifier
pub struct PatternRegistry {
    /// Rule lists for recognised identifiers
    languages: HashMap<String, Vec<PatternRule>>,
    /// Rule list for everything else
    fallback: Vec<PatternRule>,
}

impl PatternRegistry {
    /// Create a registry with the built-in profiles
    pub fn new() -> Self {
        Self::from_profiles(builtin::all_profiles(), builtin::default_profile())
    }

    /// Create a registry from explicit profiles and a fallback profile
    pub fn from_profiles(profiles: Vec<LanguageProfile>, fallback: LanguageProfile) -> Self {
        let mut languages = HashMap::new();
        for profile in profiles {
            let id = profile.id.clone();
            let rules = profile.into_rules();
            debug!(language = %id, rules = rules.len(), "registered language");
            languages.insert(id, rules);
        }

        Self {
            languages,
            fallback: fallback.into_rules(),
        }
    }

    /// The shared registry, built on first use
    pub fn global() -> &'static PatternRegistry {
        &GLOBAL
    }

    /// Ordered rules for a language identifier
    ///
    /// Unknown identifiers get the fallback rules; never fails.
    pub fn rules_for(&self, language: &str) -> &[PatternRule] {
        match self.languages.get(language) {
            Some(rules) => rules,
            None => {
                trace!(language, "unknown language, using fallback rules");
                &self.fallback
            }
        }
    }

    /// Check whether an identifier has its own profile
    pub fn is_known(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// List recognised identifiers
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::TokenCategory;

    fn names(rules: &[PatternRule]) -> Vec<&str> {
        rules.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_builtin_languages() {
        let registry = PatternRegistry::new();
        assert_eq!(
            registry.list_languages(),
            ["bash", "go", "javascript", "python", "rust", "shell", "typescript"]
        );
    }

    #[test]
    fn test_language_specific_rules() {
        let registry = PatternRegistry::new();
        let rust = names(registry.rules_for("rust"));
        assert_eq!(&rust[rust.len() - 2..], ["macro", "attribute"]);

        let python = registry.rules_for("python");
        assert_eq!(python.last().map(|r| r.category), Some(TokenCategory::Decorator));

        assert_eq!(registry.rules_for("go").len(), 7);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let registry = PatternRegistry::new();
        assert!(!registry.is_known("unknown-lang-xyz"));
        let fallback = registry.rules_for("unknown-lang-xyz");
        assert_eq!(names(fallback), names(registry.rules_for("javascript")));
        // Identifiers are case-sensitive
        assert_eq!(registry.rules_for("Rust").len(), 7);
        assert!(!registry.rules_for("").is_empty());
    }

    #[test]
    fn test_global_is_shared() {
        let a = PatternRegistry::global() as *const PatternRegistry;
        let b = PatternRegistry::global() as *const PatternRegistry;
        assert_eq!(a, b);
    }
}
