// SPDX-License-Identifier: MPL-2.0
//! Process-wide toast entry points.
//!
//! For callers that cannot hold a [`Dispatcher`]. The most recently mounted
//! global toaster is the target; it unbinds itself when dropped, after
//! which calls are logged and dropped again.
//!
//! ```ignore
//! use iced_toast::toast::{facade, ToastRequest};
//!
//! facade::success(ToastRequest::new("Image saved"));
//! ```

use super::dispatch::Dispatcher;
use super::id::ToastId;
use super::request::{LoadingOptions, ToastRequest};
use super::types::Variant;
use crate::error::DispatchError;
use std::sync::RwLock;
use tracing::warn;

static BINDING: RwLock<Option<Dispatcher>> = RwLock::new(None);

/// Makes `dispatcher` the target of the facade, replacing any previous one.
pub fn bind(dispatcher: Dispatcher) {
    if let Ok(mut binding) = BINDING.write() {
        *binding = Some(dispatcher);
    }
}

/// Clears the binding if it still points at `dispatcher`'s toaster.
pub fn unbind(dispatcher: &Dispatcher) {
    if let Ok(mut binding) = BINDING.write() {
        if binding
            .as_ref()
            .is_some_and(|bound| bound.targets_same_toaster(dispatcher))
        {
            *binding = None;
        }
    }
}

/// Whether a live toaster is bound.
#[must_use]
pub fn is_bound() -> bool {
    target().is_some_and(|dispatcher| dispatcher.is_mounted())
}

fn target() -> Option<Dispatcher> {
    BINDING.read().ok().and_then(|binding| binding.clone())
}

pub fn open(request: ToastRequest) -> ToastRequest {
    match target() {
        Some(dispatcher) => dispatcher.open(request),
        None => {
            let request = request.normalized();
            warn!(id = ?request.id, "toast dropped: {}", DispatchError::Unbound);
            request
        }
    }
}

#[allow(clippy::should_implement_trait)]
pub fn default(request: ToastRequest) -> ToastRequest {
    open(request)
}

pub fn success(request: ToastRequest) -> ToastRequest {
    open(request.variant(Variant::Success))
}

pub fn error(request: ToastRequest) -> ToastRequest {
    open(request.variant(Variant::Error))
}

pub fn warning(request: ToastRequest) -> ToastRequest {
    open(request.variant(Variant::Warning))
}

pub fn info(request: ToastRequest) -> ToastRequest {
    open(request.variant(Variant::Info))
}

pub fn loading(request: ToastRequest, options: impl Into<LoadingOptions>) -> ToastRequest {
    open(request.variant(Variant::Loading).loading(options))
}

pub fn close(id: impl Into<ToastId>) {
    let id = id.into();
    match target() {
        Some(dispatcher) => dispatcher.close(id),
        None => warn!(%id, "toast close dropped: {}", DispatchError::Unbound),
    }
}
