//! Language profiles for syntax highlighting
//!
//! A profile names a language, lists its keywords, and carries any
//! language-specific rules that are appended after the common rule list.

use super::rules::PatternRule;
use super::tokens::TokenCategory;

/// Keyword set and extra rules for one language identifier
pub struct LanguageProfile {
    /// Identifier matched against `language-<id>` classes (case-sensitive)
    pub id: String,
    /// Whole-identifier keywords
    pub keywords: Vec<&'static str>,
    /// Rules appended after the common list, in priority order
    pub extra_rules: Vec<PatternRule>,
}

impl LanguageProfile {
    /// Create a profile from a `|`-separated keyword list
    pub fn new(id: &str, keywords: &'static str) -> Self {
        Self {
            id: id.to_string(),
            keywords: keywords.split('|').filter(|k| !k.is_empty()).collect(),
            extra_rules: Vec::new(),
        }
    }

    /// Append a language-specific rule
    pub fn add_rule(&mut self, rule: PatternRule) {
        self.extra_rules.push(rule);
    }

    /// Build the full ordered rule list for this profile
    ///
    /// Common rules come first (comment, string, keyword, number, function,
    /// operator, punctuation), then the profile's extras. Each rule's
    /// priority is its final position.
    pub fn into_rules(self) -> Vec<PatternRule> {
        let mut rules = common_rules(&self.keywords);
        rules.extend(self.extra_rules);
        for (priority, rule) in rules.iter_mut().enumerate() {
            rule.priority = priority;
        }
        rules
    }
}

/// Assemble a whole-identifier keyword pattern
pub fn keyword_pattern(keywords: &[&str]) -> Option<String> {
    if keywords.is_empty() {
        return None;
    }
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Some(format!(r"\b(?:{})\b", alternation))
}

fn common_rules(keywords: &[&str]) -> Vec<PatternRule> {
    let mut rules = Vec::new();

    // Same for every language, `#` included
    let comment = r"/\*[\s\S]*?\*/|//[^\r\n]*|#[^\r\n]*|<!--[\s\S]*?-->";
    rules.extend(PatternRule::new("comment", comment, TokenCategory::Comment));

    // Quoted strings with escapes, then Rust raw strings
    let string = r##""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'|`(?:\\.|[^`\\])*`|r#"[^"]*"#|r"[^"]*""##;
    rules.extend(PatternRule::new("string", string, TokenCategory::String));

    if let Some(pattern) = keyword_pattern(keywords) {
        rules.extend(PatternRule::new("keyword", &pattern, TokenCategory::Keyword));
    }

    let number = r"\b(?:0x[a-fA-F0-9]+|0b[01]+|\d+\.?\d*(?:[eE][+-]?\d+)?[fFlL]?)\b";
    rules.extend(PatternRule::new("number", number, TokenCategory::Number));

    rules.extend(PatternRule::leading_group(
        "function",
        r"\b(\w+)\s*\(",
        TokenCategory::FunctionName,
    ));

    // Spread before range so `...` stays one token
    let operator = r"[+\-*/%=!<>&|^~?:]+|->|=>|\.\.\.|\.\.";
    rules.extend(PatternRule::new("operator", operator, TokenCategory::Operator));

    rules.extend(PatternRule::new("punctuation", r"[{}\[\];(),.:]", TokenCategory::Punctuation));

    rules
}
