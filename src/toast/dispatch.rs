// SPDX-License-Identifier: MPL-2.0
//! Handles for opening and closing toasts from anywhere in an application.
//!
//! A [`Dispatcher`] is returned when a toaster is mounted. It is cheap to
//! clone and can be moved into callbacks and tasks. Requests are queued and
//! applied by the toaster in the order they were sent.
//!
//! Once the toaster is dropped, the handle stays valid but every request is
//! reported as a warning and dropped.

use super::id::ToastId;
use super::request::{LoadingOptions, ToastRequest};
use super::types::Variant;
use crate::error::DispatchError;
use tokio::sync::mpsc::{error::SendError, UnboundedSender};
use tracing::warn;

/// A request queued for the toaster.
#[derive(Debug)]
pub enum Command {
    Open(ToastRequest),
    Close(ToastId),
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: UnboundedSender<Command>,
}

impl Dispatcher {
    pub(crate) fn new(sender: UnboundedSender<Command>) -> Self {
        Self { sender }
    }

    /// Whether the toaster behind this handle is still alive.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.sender.is_closed()
    }

    pub(crate) fn targets_same_toaster(&self, other: &Dispatcher) -> bool {
        self.sender.same_channel(&other.sender)
    }

    /// Queues `request`, returning it with its id filled in.
    pub fn try_open(&self, request: ToastRequest) -> Result<ToastRequest, DispatchError> {
        let request = request.normalized();
        self.sender
            .send(Command::Open(request.clone()))
            .map_err(|_| DispatchError::Unmounted)?;
        Ok(request)
    }

    /// Like [`try_open`](Self::try_open), but a missing toaster is only
    /// logged.
    pub fn open(&self, request: ToastRequest) -> ToastRequest {
        let request = request.normalized();
        match self.sender.send(Command::Open(request.clone())) {
            Ok(()) => request,
            Err(SendError(_)) => {
                warn!(id = ?request.id, "toast dropped: {}", DispatchError::Unmounted);
                request
            }
        }
    }

    /// Opens a toast with the variant the caller set (or none).
    #[allow(clippy::should_implement_trait)]
    pub fn default(&self, request: ToastRequest) -> ToastRequest {
        self.open(request)
    }

    pub fn success(&self, request: ToastRequest) -> ToastRequest {
        self.open(request.variant(Variant::Success))
    }

    pub fn error(&self, request: ToastRequest) -> ToastRequest {
        self.open(request.variant(Variant::Error))
    }

    pub fn warning(&self, request: ToastRequest) -> ToastRequest {
        self.open(request.variant(Variant::Warning))
    }

    pub fn info(&self, request: ToastRequest) -> ToastRequest {
        self.open(request.variant(Variant::Info))
    }

    /// Opens a loading toast driven by `options`.
    pub fn loading(
        &self,
        request: ToastRequest,
        options: impl Into<LoadingOptions>,
    ) -> ToastRequest {
        self.open(request.variant(Variant::Loading).loading(options))
    }

    pub fn try_close(&self, id: impl Into<ToastId>) -> Result<(), DispatchError> {
        self.sender
            .send(Command::Close(id.into()))
            .map_err(|_| DispatchError::Unmounted)
    }

    /// Closes the toast with `id`. Unknown ids are ignored by the toaster.
    pub fn close(&self, id: impl Into<ToastId>) {
        let id = id.into();
        if self.sender.send(Command::Close(id.clone())).is_err() {
            warn!(%id, "toast close dropped: {}", DispatchError::Unmounted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::request::Loading;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn variant_entry_points_stamp_variant() {
        let (tx, mut rx) = unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.success(ToastRequest::new("a"));
        dispatcher.error(ToastRequest::new("b"));
        dispatcher.warning(ToastRequest::new("c"));
        dispatcher.info(ToastRequest::new("d"));
        dispatcher.default(ToastRequest::new("e"));

        let variants: Vec<Option<Variant>> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|command| match command {
                Command::Open(request) => request.variant,
                Command::Close(_) => panic!("unexpected close"),
            })
            .collect();
        assert_eq!(
            variants,
            [
                Some(Variant::Success),
                Some(Variant::Error),
                Some(Variant::Warning),
                Some(Variant::Info),
                None,
            ]
        );
    }

    #[test]
    fn loading_entry_point_attaches_options() {
        let (tx, mut rx) = unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        let returned = dispatcher.loading(
            ToastRequest::new("working"),
            Loading::from_future(async { Ok::<(), String>(()) }).auto_dismiss(true),
        );

        assert_eq!(returned.variant, Some(Variant::Loading));
        match rx.try_recv() {
            Ok(Command::Open(request)) => {
                assert!(request.loading.as_ref().is_some_and(|o| o.auto_dismiss));
            }
            other => panic!("expected open command, got {other:?}"),
        }
    }

    #[test]
    fn open_returns_request_with_id() {
        let (tx, _rx) = unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        let returned = dispatcher.info(ToastRequest::new("x"));
        assert!(returned.id.is_some());
    }

    #[test]
    fn dropped_toaster_reports_unmounted() {
        let (tx, rx) = unbounded_channel();
        let dispatcher = Dispatcher::new(tx);
        drop(rx);

        assert!(!dispatcher.is_mounted());
        assert_eq!(
            dispatcher.try_open(ToastRequest::new("x")).unwrap_err(),
            DispatchError::Unmounted
        );
        assert_eq!(dispatcher.try_close("x"), Err(DispatchError::Unmounted));
        // soft variants do not panic
        let returned = dispatcher.success(ToastRequest::new("y").id("y"));
        assert_eq!(returned.id, Some(ToastId::from("y")));
        dispatcher.close("y");
    }

    #[test]
    fn commands_keep_call_order() {
        let (tx, mut rx) = unbounded_channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.info(ToastRequest::new("a").id("a"));
        dispatcher.close("a");
        dispatcher.info(ToastRequest::new("b").id("b"));

        assert!(matches!(rx.try_recv(), Ok(Command::Open(r)) if r.text == "a"));
        assert!(matches!(rx.try_recv(), Ok(Command::Close(id)) if id.as_str() == "a"));
        assert!(matches!(rx.try_recv(), Ok(Command::Open(r)) if r.text == "b"));
    }
}
