//! Static chrome drawn around every screen: boxed title, footer, colours.

use crate::config::Theme;
use crossterm::style::{style, Color, Stylize};
use unicode_width::UnicodeWidthStr;

/// Inner width of boxed titles, in terminal columns.
pub const BOX_WIDTH: usize = 54;

/// Colours chrome according to the current theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    theme: Theme,
    enabled: bool,
}

impl Palette {
    /// Create a palette. With `enabled == false` text passes through as is.
    pub const fn new(theme: Theme, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    /// Plain palette, no escape codes.
    pub const fn plain() -> Self {
        Self::new(Theme::Amber, false)
    }

    const fn color(self) -> Color {
        match self.theme {
            Theme::Amber => Color::DarkYellow,
            Theme::Green => Color::DarkGreen,
            Theme::Cyan => Color::DarkCyan,
        }
    }

    /// Apply the theme colour to `text`.
    pub fn paint(self, text: &str) -> String {
        if self.enabled {
            style(text).with(self.color()).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Theme::default(), true)
    }
}

/// Draw `title` centered in a double-line box.
///
/// Width is measured in columns, so wide (CJK) characters stay aligned.
pub fn boxed(title: &str) -> [String; 3] {
    let used = title.width();
    let pad = BOX_WIDTH.saturating_sub(used);
    let left = pad / 2;
    let right = pad - left;
    let rule = "═".repeat(BOX_WIDTH.max(used));

    [
        format!("╔{rule}╗"),
        format!("║{}{title}{}║", " ".repeat(left), " ".repeat(right)),
        format!("╚{rule}╝"),
    ]
}

/// Header and footer around a live view or menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chrome {
    /// Boxed title at the top, if any.
    pub title: Option<String>,
    /// Line under the content, e.g. "Press Enter to stop".
    pub footer: Option<String>,
}

impl Chrome {
    /// Chrome with a boxed title only.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            footer: None,
        }
    }

    /// Add a footer line.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}
