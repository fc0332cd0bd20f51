//! codetint - source code highlighting for HTML documents
//!
//! Raw code plus a language id goes in; escaped markup with one labeled
//! `<span>` per token comes out. Several pattern families compete for the
//! same characters and are reconciled deterministically, and the output
//! always carries the full original text.
//!
//! ```
//! let html = codetint::highlight_text("let x = 1;", "javascript");
//! assert!(html.starts_with("<span class=\"token keyword\">let</span>"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use document::{CodeElement, Document, HtmlDocument};
pub use error::{Error, Result};
pub use highlight::{highlight_text, Highlighter};
pub use syntax::{PatternRegistry, TokenCategory};
