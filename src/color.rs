//! Color tokens for port coloring.
//!
//! Ports are tinted with one of a fixed set of named colors. The tokens are
//! resolved to actual theme colors by the rendering layer; this crate only
//! deals in the names.

use serde::{Deserialize, Serialize};

/// Named color token assigned to a port type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Purple,
    Green,
    Pink,
    Grey,
    Yellow,
}

impl Color {
    /// Get the token string for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Green => "green",
            Color::Pink => "pink",
            Color::Grey => "grey",
            Color::Yellow => "yellow",
        }
    }

    /// Get all available color tokens.
    pub fn all() -> &'static [Color] {
        &[
            Color::Red,
            Color::Blue,
            Color::Purple,
            Color::Green,
            Color::Pink,
            Color::Grey,
            Color::Yellow,
        ]
    }
}

/// Ports that declare no color fall back to grey.
impl Default for Color {
    fn default() -> Self {
        Color::Grey
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grey() {
        assert_eq!(Color::default(), Color::Grey);
    }

    #[test]
    fn test_all_tokens_round_trip() {
        for color in Color::all() {
            assert_eq!(color.to_string(), color.as_str());
        }
        assert_eq!(Color::all().len(), 7);
    }
}
