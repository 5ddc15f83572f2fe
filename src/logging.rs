// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the demo binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host application.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG`, `verbose` selects between debug and info output for
/// this crate. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("iced_toast=debug,warn")
        } else {
            EnvFilter::new("iced_toast=info,warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
