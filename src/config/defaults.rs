// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toaster configuration.
//!
//! # Categories
//!
//! - **Capacity**: How many toasts may be visible at once
//! - **Timing**: Auto-dismiss delay and exit animation length
//! - **Content**: Fallback labels for the built-in buttons
//! - **Rendering**: Tick interval driving timers on the Iced surface

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of simultaneously visible toasts.
pub const DEFAULT_MAX_TOASTS: usize = 4;

/// Smallest accepted `max_toasts`.
pub const MIN_MAX_TOASTS: usize = 1;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Auto-dismiss delay applied when a request does not set one (ms).
pub const DEFAULT_DELAY_MS: u64 = 4000;

/// Length of the exit animation before a closed toast is removed (ms).
pub const EXIT_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Label of the action button when neither the action nor the toaster sets one.
pub const DEFAULT_ACTION_CONTENT: &str = "Action";

/// Label of the close button when the toaster does not set one.
pub const DEFAULT_CLOSE_CONTENT: &str = "Close";

/// Tooltip of the close button.
pub const CLOSE_BUTTON_TITLE: &str = "Close toast";

/// Accessible label of the toast section.
pub const SECTION_LABEL: &str = "Toast Notifications";

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Interval between timer ticks on the Iced surface (ms).
pub const TICK_INTERVAL_MS: u64 = 100;

const _: () = {
    assert!(MIN_MAX_TOASTS >= 1);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(TICK_INTERVAL_MS < EXIT_ANIMATION_MS);
};
