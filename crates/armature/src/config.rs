//! Configuration types for diagram rendering.
//!
//! This module provides configuration structures that control how rendered
//! diagrams are laid out and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Controls rank [`Direction`] and node spacing.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use armature::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Top-level configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Rank direction and spacing settings.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Direction in which ranks of the rendered graph flow.
///
/// Maps onto the Graphviz `rankdir` attribute; the serialized names are the
/// lowercase forms accepted in configuration files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Direction {
    /// Top to bottom
    #[serde(rename = "tb")]
    TopBottom,
    /// Bottom to top
    #[serde(rename = "bt")]
    BottomTop,
    /// Left to right
    #[default]
    #[serde(rename = "lr")]
    LeftRight,
    /// Right to left
    #[serde(rename = "rl")]
    RightLeft,
}

impl Direction {
    /// The value this direction takes as a Graphviz `rankdir` attribute.
    pub fn rankdir(self) -> &'static str {
        match self {
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tb" => Ok(Direction::TopBottom),
            "bt" => Ok(Direction::BottomTop),
            "lr" => Ok(Direction::LeftRight),
            "rl" => Ok(Direction::RightLeft),
            _ => Err(format!("Unknown direction: {s}")),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::TopBottom => "tb",
            Direction::BottomTop => "bt",
            Direction::LeftRight => "lr",
            Direction::RightLeft => "rl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        write!(f, "{name}")
    }
}

fn default_nodesep() -> f32 {
    0.60
}

fn default_ranksep() -> f32 {
    0.75
}

/// Layout configuration for rendered diagrams.
///
/// Controls the rank [`Direction`] and the spacing Graphviz leaves between
/// nodes and ranks, in inches.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Direction in which ranks flow.
    #[serde(default)]
    direction: Direction,

    /// Minimum space between two adjacent nodes in the same rank.
    #[serde(default = "default_nodesep")]
    nodesep: f32,

    /// Minimum space between two adjacent ranks.
    #[serde(default = "default_ranksep")]
    ranksep: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            nodesep: default_nodesep(),
            ranksep: default_ranksep(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified direction and spacing.
    ///
    /// # Arguments
    ///
    /// * `direction` - Direction in which ranks flow.
    /// * `nodesep` - Minimum space between adjacent nodes in a rank, in inches.
    /// * `ranksep` - Minimum space between adjacent ranks, in inches.
    pub fn new(direction: Direction, nodesep: f32, ranksep: f32) -> Self {
        Self {
            direction,
            nodesep,
            ranksep,
        }
    }

    /// Returns the rank [`Direction`].
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the node separation in inches.
    pub fn nodesep(&self) -> f32 {
        self.nodesep
    }

    /// Returns the rank separation in inches.
    pub fn ranksep(&self) -> f32 {
        self.ranksep
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Controls appearance options such as background color. Fields that are
/// not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the whole diagram, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family for every label in the diagram.
    #[serde(default)]
    fontname: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the specified options.
    ///
    /// # Arguments
    ///
    /// * `background_color` - Background color string, or `None` for the
    ///   renderer default.
    /// * `fontname` - Font family, or `None` for the renderer default.
    pub fn new(background_color: Option<String>, fontname: Option<String>) -> Self {
        Self {
            background_color,
            fontname,
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the configured font family, falling back to `Sans-Serif`.
    pub fn fontname(&self) -> &str {
        self.fontname.as_deref().unwrap_or("Sans-Serif")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.layout().direction(), Direction::LeftRight);
        assert_eq!(config.layout().nodesep(), 0.60);
        assert_eq!(config.layout().ranksep(), 0.75);
        assert_eq!(config.style().background_color().unwrap(), None);
        assert_eq!(config.style().fontname(), "Sans-Serif");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(Direction::from_str("tb").unwrap(), Direction::TopBottom);
        assert_eq!(Direction::from_str("lr").unwrap(), Direction::LeftRight);
        assert!(Direction::from_str("diagonal").is_err());
    }

    #[test]
    fn test_direction_rankdir() {
        assert_eq!(Direction::TopBottom.rankdir(), "TB");
        assert_eq!(Direction::BottomTop.rankdir(), "BT");
        assert_eq!(Direction::LeftRight.rankdir(), "LR");
        assert_eq!(Direction::RightLeft.rankdir(), "RL");
    }

    #[test]
    fn test_background_color_parses() {
        let style = StyleConfig::new(Some("#FAFAFA".to_string()), None);

        let color = style.background_color().unwrap().unwrap();
        assert_eq!(color.as_str(), "#FAFAFA");
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style = StyleConfig::new(Some("##nope".to_string()), None);

        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_fontname_override() {
        let style = StyleConfig::new(None, Some("Helvetica".to_string()));

        assert_eq!(style.fontname(), "Helvetica");
    }
}
