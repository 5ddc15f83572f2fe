// SPDX-License-Identifier: MPL-2.0
//! Iced surface for toasts: the mounted toaster, its rendering, and the
//! shared visual tokens.

pub mod design_tokens;
pub mod theming;
pub mod toast_view;
pub mod toaster;

pub use toaster::{LoadingJob, Message, Toaster};
