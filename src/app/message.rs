// SPDX-License-Identifier: MPL-2.0
//! Messages and launch flags for the demo application.

use crate::toast::{Position, Variant};
use crate::ui::theming::ThemeMode;
use crate::ui::toaster;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open a toast of the given variant (`None` for a plain toast).
    Show(Option<Variant>),
    /// Open a loading toast that settles after a short wait.
    StartLoading { fail: bool },
    /// Open (or update in place) the toast with the fixed demo id.
    UpsertPinned,
    /// Close the pinned toast through the dispatcher.
    ClosePinned,
    /// Open a toast through the process-wide facade.
    ShowViaFacade,
    Toaster(toaster::Message),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured anchor.
    pub position: Option<Position>,
    /// Overrides the configured stack size.
    pub max_toasts: Option<usize>,
    /// Overrides the configured theme.
    pub theme: Option<ThemeMode>,
    /// Config directory; takes precedence over `ICED_TOAST_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Forces reduced motion on.
    pub reduced_motion: bool,
}
