//! JavaScript and TypeScript language profiles
//!
//! The JavaScript profile doubles as the fallback for unknown languages.

use crate::syntax::language::LanguageProfile;

const JAVASCRIPT_KEYWORDS: &str = "async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|enum|export|extends|false|finally|for|function|if|import|in|instanceof|let|new|null|of|return|super|switch|this|throw|true|try|typeof|undefined|var|void|while|with|yield";

const TYPESCRIPT_KEYWORDS: &str = "abstract|any|as|async|await|boolean|break|case|catch|class|const|constructor|continue|declare|default|delete|do|else|enum|export|extends|false|finally|for|function|get|if|implements|import|in|instanceof|interface|let|module|namespace|new|null|number|of|package|private|protected|public|readonly|return|set|static|string|super|switch|this|throw|true|try|type|typeof|undefined|var|void|while|with|yield";

/// Create JavaScript profile
pub fn javascript_profile() -> LanguageProfile {
    LanguageProfile::new("javascript", JAVASCRIPT_KEYWORDS)
}

/// Create TypeScript profile
pub fn typescript_profile() -> LanguageProfile {
    LanguageProfile::new("typescript", TYPESCRIPT_KEYWORDS)
}
