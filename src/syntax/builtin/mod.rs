//! Built-in language profiles
//!
//! Keyword sets and extra rules for the languages the highlighter
//! recognises out of the box. Unknown identifiers fall back to
//! [`default_profile`].

mod go;
mod javascript;
mod python;
mod rust;
mod shell;

use super::language::LanguageProfile;

/// Get all built-in language profiles
pub fn all_profiles() -> Vec<LanguageProfile> {
    vec![
        rust::rust_profile(),
        javascript::javascript_profile(),
        javascript::typescript_profile(),
        python::python_profile(),
        go::go_profile(),
        shell::shell_profile("bash"),
        shell::shell_profile("shell"),
    ]
}

/// Profile used for unrecognised identifiers
pub fn default_profile() -> LanguageProfile {
    javascript::javascript_profile()
}
