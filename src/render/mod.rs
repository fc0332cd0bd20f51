//! Output rendering for resolved spans
//!
//! - `html`: escaped markup with one labeled `<span>` per token
//! - `ansi`: colored terminal preview

pub mod ansi;
pub mod html;

pub use ansi::Theme;
pub use html::{escape_html, DEFAULT_MARKER_CLASS};
