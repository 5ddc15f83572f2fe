// SPDX-License-Identifier: MPL-2.0
//! Presentation class names understood by the toast stylesheet.
//!
//! The names are part of the public contract with existing stylesheets and
//! must not change, including the `t-slide-exit-*` spelling.

use super::types::{AnimationStyle, Position};

pub const TOASTS: &str = "t_toasts";
pub const GLOBAL: &str = "t_global";
pub const CONTAINER: &str = "t_container";
pub const ICON: &str = "t_icon";
pub const CONTENT: &str = "t_content";
pub const ACTIONS: &str = "t_actions";
pub const LOADING: &str = "t_loading";
pub const DEFAULT_FONT: &str = "t_default_font";
pub const DARK_THEME: &str = "t_dark-theme";
pub const LIGHT_THEME: &str = "t_light-theme";

/// Anchor class for the toast section.
#[must_use]
pub fn position_class(position: Position) -> &'static str {
    match position {
        Position::TopLeft => "t_top-left",
        Position::TopRight => "t_top-right",
        Position::TopCenter => "t_top-center",
        Position::BottomLeft => "t_bottom-left",
        Position::BottomRight => "t_bottom-right",
        Position::BottomCenter => "t_bottom-center",
    }
}

fn enter_class(position: Position) -> &'static str {
    match position {
        Position::TopLeft | Position::TopRight | Position::TopCenter => "t_slide-enter-top",
        Position::BottomLeft | Position::BottomRight | Position::BottomCenter => {
            "t_slide-enter-bottom"
        }
    }
}

fn slide_exit_class(position: Position) -> &'static str {
    match position {
        Position::TopLeft | Position::TopRight | Position::TopCenter => "t-slide-exit-top",
        Position::BottomLeft | Position::BottomRight | Position::BottomCenter => {
            "t-slide-exit-bottom"
        }
    }
}

fn swipe_exit_class(position: Position) -> &'static str {
    match position {
        Position::TopLeft | Position::BottomLeft => "t_swipe-exit-left",
        Position::TopRight | Position::BottomRight => "t_swipe-exit-right",
        Position::TopCenter | Position::BottomCenter => "t_swipe-exit-center",
    }
}

/// Animation class for a toast in the given phase.
///
/// Entering toasts always slide in; the style only picks the exit.
#[must_use]
pub fn animation_class(exiting: bool, style: AnimationStyle, position: Position) -> &'static str {
    match (exiting, style) {
        (false, _) => enter_class(position),
        (true, AnimationStyle::Slide) => slide_exit_class(position),
        (true, AnimationStyle::Swipe) => swipe_exit_class(position),
    }
}

/// Space-separated class list that skips empty entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, class: impl AsRef<str>) -> Self {
        self.push(class);
        self
    }

    /// Adds `class` only when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, class: impl AsRef<str>) -> Self {
        if condition {
            self.with(class)
        } else {
            self
        }
    }

    #[must_use]
    pub fn with_opt(self, class: Option<impl AsRef<str>>) -> Self {
        match class {
            Some(class) => self.with(class),
            None => self,
        }
    }

    pub fn push(&mut self, class: impl AsRef<str>) {
        let class = class.as_ref().trim();
        if !class.is_empty() {
            self.0.push(class.to_string());
        }
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
