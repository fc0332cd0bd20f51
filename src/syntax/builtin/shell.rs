//! Shell language profiles (bash, sh)

use crate::syntax::language::LanguageProfile;

const KEYWORDS: &str = "if|then|else|elif|fi|for|do|done|while|until|case|esac|function|select|time|coproc";

/// Create a shell profile under the given identifier
pub fn shell_profile(id: &str) -> LanguageProfile {
    LanguageProfile::new(id, KEYWORDS)
}
