//! Document-level direction and locale attributes.
//!
//! The manager pushes `dir`/`lang` into a [`DocumentContext`] on every
//! language change. Renderers and assistive tech read them passively.

use serde::Serialize;
use std::fmt;

/// Writing direction of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value: `"ltr"` or `"rtl"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global document the active language is reflected into.
pub trait DocumentContext {
    fn set_direction(&mut self, direction: Direction);
    fn set_locale(&mut self, locale: &str);
}

/// In-process document root holding the `dir` and `lang` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: Direction,
    pub lang: String,
}

impl Default for DocumentAttributes {
    fn default() -> Self {
        Self {
            dir: Direction::Ltr,
            lang: "en".to_string(),
        }
    }
}

impl DocumentAttributes {
    /// Render the opening `<html>` tag carrying both attributes.
    pub fn html_open_tag(&self) -> String {
        format!("<html lang=\"{}\" dir=\"{}\">", self.lang, self.dir)
    }
}

impl DocumentContext for DocumentAttributes {
    fn set_direction(&mut self, direction: Direction) {
        self.dir = direction;
    }

    fn set_locale(&mut self, locale: &str) {
        self.lang = locale.to_string();
    }
}
