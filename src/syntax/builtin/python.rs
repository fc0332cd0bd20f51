//! Python language profile

use crate::syntax::language::LanguageProfile;
use crate::syntax::rules::PatternRule;
use crate::syntax::tokens::TokenCategory;

const KEYWORDS: &str = "and|as|assert|break|class|continue|def|del|elif|else|except|exec|finally|for|from|global|if|import|in|is|lambda|not|or|pass|print|raise|return|try|while|with|yield|True|False|None";

/// Create Python profile
pub fn python_profile() -> LanguageProfile {
    let mut lang = LanguageProfile::new("python", KEYWORDS);

    // Decorators
    if let Some(rule) = PatternRule::new("decorator", r"@\w+", TokenCategory::Decorator) {
        lang.add_rule(rule);
    }

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::matcher::scan;
    use crate::syntax::resolver::resolve;

    fn tokens(text: &str) -> Vec<(TokenCategory, String)> {
        let rules = python_profile().into_rules();
        resolve(scan(text, &rules))
            .into_iter()
            .map(|c| (c.category, c.text.to_string()))
            .collect()
    }

    #[test]
    fn test_python_decorator() {
        let found = tokens("@property\ndef name(self):");
        assert_eq!(found[0], (TokenCategory::Decorator, "@property".to_string()));
        assert_eq!(found[1], (TokenCategory::Keyword, "def".to_string()));
        assert_eq!(found[2], (TokenCategory::FunctionName, "name".to_string()));
    }

    #[test]
    fn test_python_hash_comment() {
        let found = tokens("x = 1  # set x");
        assert_eq!(found.last(), Some(&(TokenCategory::Comment, "# set x".to_string())));
    }

    #[test]
    fn test_python_keywords_are_case_sensitive() {
        let found = tokens("None none");
        assert_eq!(found, vec![(TokenCategory::Keyword, "None".to_string())]);
    }
}
