//! Input tokens: one opaque symbol per key press.
//!
//! The tree never interprets tokens beyond comparing them with bindings and
//! forwarding them verbatim. The named constants cover the fixed alphabet of
//! a small keypad; anything else (usually a single character) is passed
//! through to whichever widget wants it.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(CompactString);

impl Token {
    pub const UP: &'static str = "U";
    pub const DOWN: &'static str = "D";
    pub const LEFT: &'static str = "L";
    pub const RIGHT: &'static str = "R";
    pub const ENTER: &'static str = "ENTER";
    pub const BACK: &'static str = "BACK";

    pub fn new(s: impl Into<CompactString>) -> Self {
        Self(s.into())
    }

    pub fn up() -> Self {
        Self::new(Self::UP)
    }

    pub fn down() -> Self {
        Self::new(Self::DOWN)
    }

    pub fn left() -> Self {
        Self::new(Self::LEFT)
    }

    pub fn right() -> Self {
        Self::new(Self::RIGHT)
    }

    pub fn enter() -> Self {
        Self::new(Self::ENTER)
    }

    pub fn back() -> Self {
        Self::new(Self::BACK)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }

    /// The character carried by a free-form text token.
    ///
    /// Named navigation tokens return `None` even when they are one
    /// character long (`"U"`, `"D"`, `"L"`, `"R"`), so a text box never eats
    /// the keypad alphabet.
    pub fn as_char(&self) -> Option<char> {
        if self.is_named() {
            return None;
        }
        let mut chars = self.0.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }

    pub fn is_named(&self) -> bool {
        matches!(
            self.as_str(),
            Self::UP | Self::DOWN | Self::LEFT | Self::RIGHT | Self::ENTER | Self::BACK
        )
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<char> for Token {
    fn from(ch: char) -> Self {
        let mut s = CompactString::default();
        s.push(ch);
        Self(s)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/token.rs"]
mod tests;
