//! Color handling for diagram styling.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated color value for diagram styling.
///
/// Accepts any CSS color string (hex colors, named colors, `rgb(...)`
/// functions and so on). The original string is kept and passed through to
/// the rendering backend verbatim; parsing only guards against typos at
/// configuration time instead of deep inside the render pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    raw: String,
}

impl Color {
    /// Parse a color from a CSS color string.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when the string is not a recognized
    /// color.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                raw: color_str.to_string(),
            }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// The color exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_is_accepted() {
        let color = Color::new("#2D3436").unwrap();
        assert_eq!(color.as_str(), "#2D3436");
    }

    #[test]
    fn test_named_color_is_accepted() {
        let color = Color::new("white").unwrap();
        assert_eq!(color.to_string(), "white");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }
}
