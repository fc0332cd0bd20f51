//! Go language profile

use crate::syntax::language::LanguageProfile;

const KEYWORDS: &str = "break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go|goto|if|import|interface|map|package|range|return|select|struct|switch|type|var";

/// Create Go profile
pub fn go_profile() -> LanguageProfile {
    LanguageProfile::new("go", KEYWORDS)
}
