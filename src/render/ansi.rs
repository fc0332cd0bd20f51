//! Colored terminal preview using crossterm styles

use std::collections::HashMap;

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

use crate::syntax::{Candidate, Color, Style, TokenCategory};

/// Per-category styles for the terminal preview
#[derive(Debug, Clone)]
pub struct Theme {
    styles: HashMap<TokenCategory, Style>,
}

impl Theme {
    /// Style for a category
    pub fn style(&self, category: TokenCategory) -> Style {
        self.styles
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_style())
    }

    /// Replace a category's foreground color, keeping its attributes
    pub fn set_color(&mut self, category: TokenCategory, color: Color) {
        let style = self.style(category).with_fg(color);
        self.styles.insert(category, style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: TokenCategory::ALL
                .into_iter()
                .map(|c| (c, c.default_style()))
                .collect(),
        }
    }
}

/// Render text with ANSI escape sequences around each token
///
/// Gap text is written as-is; unstyled categories produce no escapes.
pub fn render(text: &str, spans: &[Candidate<'_>], theme: &Theme) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut cursor = 0;

    for span in spans {
        if span.start < cursor || span.end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..span.start]);
        let style = theme.style(span.category);
        if style.is_default() {
            out.push_str(span.text);
        } else {
            out.push_str(&content_style(&style).apply(span.text).to_string());
        }
        cursor = span.end;
    }

    out.push_str(&text[cursor..]);
    out
}

fn content_style(style: &Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = term_color(style.fg);
    if style.bold {
        content.attributes.set(Attribute::Bold);
    }
    if style.italic {
        content.attributes.set(Attribute::Italic);
    }
    if style.underline {
        content.attributes.set(Attribute::Underlined);
    }
    content
}

fn term_color(color: Color) -> Option<TermColor> {
    let color = match color {
        Color::Default => return None,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
        Color::BrightBlack => TermColor::DarkGrey,
        Color::BrightRed => TermColor::Red,
        Color::BrightGreen => TermColor::Green,
        Color::BrightYellow => TermColor::Yellow,
        Color::BrightBlue => TermColor::Blue,
        Color::BrightMagenta => TermColor::Magenta,
        Color::BrightCyan => TermColor::Cyan,
        Color::BrightWhite => TermColor::White,
    };
    Some(color)
}
