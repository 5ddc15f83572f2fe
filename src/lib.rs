// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification system for Iced applications.
//!
//! Mount a [`ui::Toaster`] in your application, then open toasts through the
//! [`toast::Dispatcher`] it returns (or the process-wide [`toast::facade`]).
//! The toaster keeps a bounded stack per anchor, auto-dismisses toasts after
//! a pausable countdown, and can follow an async computation with a loading
//! toast.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod toast;
pub mod ui;
