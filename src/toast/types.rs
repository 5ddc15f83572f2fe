// SPDX-License-Identifier: MPL-2.0
//! Small enums shared by requests, the registry, and presentation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic category of a toast. Drives the default icon and accent color.
///
/// A toast opened through the `default` entry point carries no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Success,
    Error,
    Warning,
    Info,
    Loading,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Success,
        Variant::Error,
        Variant::Warning,
        Variant::Info,
        Variant::Loading,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
            Variant::Info => "info",
            Variant::Loading => "loading",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen edge/corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    TopCenter,
    BottomLeft,
    #[default]
    BottomRight,
    BottomCenter,
}

/// Horizontal placement of a stack within its anchor edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::BottomLeft,
        Position::BottomRight,
        Position::BottomCenter,
    ];

    /// Whether the stack grows downward from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }

    #[must_use]
    pub fn alignment(self) -> Alignment {
        match self {
            Position::TopLeft | Position::BottomLeft => Alignment::Left,
            Position::TopCenter | Position::BottomCenter => Alignment::Center,
            Position::TopRight | Position::BottomRight => Alignment::Right,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
            Position::BottomCenter => "bottom-center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("invalid position: {s}"))
    }
}

/// Exit animation played when a toast is dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    #[default]
    Slide,
    Swipe,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_positions_are_top_anchored() {
        assert!(Position::TopLeft.is_top());
        assert!(Position::TopRight.is_top());
        assert!(Position::TopCenter.is_top());
        assert!(!Position::BottomLeft.is_top());
        assert!(!Position::BottomRight.is_top());
        assert!(!Position::BottomCenter.is_top());
    }

    #[test]
    fn position_parses_from_kebab_case() {
        assert_eq!("top-center".parse::<Position>(), Ok(Position::TopCenter));
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn default_position_is_bottom_right() {
        assert_eq!(Position::default(), Position::BottomRight);
    }

    #[test]
    fn alignment_follows_horizontal_part_of_anchor() {
        assert_eq!(Position::BottomLeft.alignment(), Alignment::Left);
        assert_eq!(Position::TopCenter.alignment(), Alignment::Center);
        assert_eq!(Position::TopRight.alignment(), Alignment::Right);
    }
}
