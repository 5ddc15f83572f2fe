// SPDX-License-Identifier: MPL-2.0
//! Toast requests as callers build them.
//!
//! A [`ToastRequest`] is what the dispatch entry points accept. Every field
//! except `text` is optional; when a request updates an existing toast, only
//! the fields that are set overwrite the stored record.

use super::id::ToastId;
use super::types::Variant;
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Pass-through presentation attributes (`class`, `style`, `data-*`, ...).
pub type Attributes = BTreeMap<String, String>;

/// Shared callback with no arguments, used for action buttons.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Secondary button shown next to the close button.
#[derive(Clone)]
pub struct Action {
    /// Button label. Falls back to the toaster's default action content.
    pub content: Option<String>,
    on_click: Callback,
}

impl Action {
    pub fn new(on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            content: None,
            on_click: Arc::new(on_click),
        }
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Runs the click callback.
    pub fn trigger(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

/// How a loading computation ended, as seen by the toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingOutcome {
    Success,
    /// The computation failed; carries the error's display text.
    Failure(String),
}

type Runner = Box<dyn FnOnce(ToastId) -> BoxFuture<'static, LoadingOutcome> + Send>;

/// Type-erased loading payload carried by a request.
///
/// Built from a [`Loading`] builder. The computation can be started once;
/// the success/error callbacks run inside its continuation.
#[derive(Clone)]
pub struct LoadingOptions {
    runner: Arc<Mutex<Option<Runner>>>,
    /// Text shown once the computation succeeds.
    pub success: Option<String>,
    /// Text shown once the computation fails.
    pub error: Option<String>,
    /// Re-arm the dismiss countdown after the computation settles.
    pub auto_dismiss: bool,
}

impl LoadingOptions {
    /// Starts the computation for the toast `id`.
    ///
    /// Returns `None` if it was already started.
    pub fn start(&self, id: ToastId) -> Option<BoxFuture<'static, LoadingOutcome>> {
        let run = self.runner.lock().ok()?.take()?;
        Some(run(id))
    }

    /// Whether [`start`](Self::start) has already consumed the computation.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.runner
            .lock()
            .map(|runner| runner.is_none())
            .unwrap_or(true)
    }
}

impl fmt::Debug for LoadingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingOptions")
            .field("success", &self.success)
            .field("error", &self.error)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("started", &self.is_started())
            .finish()
    }
}

enum Source<T, E> {
    Pending(BoxFuture<'static, Result<T, E>>),
    Deferred(Box<dyn FnOnce() -> BoxFuture<'static, Result<T, E>> + Send>),
}

/// Typed builder for the `loading` variant.
///
/// ```ignore
/// let options = Loading::from_factory(|| async { fetch_profile().await })
///     .success("Profile loaded")
///     .error("Could not load profile")
///     .auto_dismiss(true)
///     .on_success(|profile, id| println!("{id}: {}", profile.name));
/// toast.loading(ToastRequest::new("Loading profile"), options);
/// ```
pub struct Loading<T, E> {
    source: Source<T, E>,
    success: Option<String>,
    error: Option<String>,
    auto_dismiss: bool,
    on_success: Option<Box<dyn FnOnce(T, ToastId) + Send>>,
    on_error: Option<Box<dyn FnOnce(E, ToastId) + Send>>,
}

impl<T, E> Loading<T, E>
where
    T: Send + 'static,
    E: fmt::Display + Send + 'static,
{
    /// Wraps a computation that is already in flight.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::with_source(Source::Pending(future.boxed()))
    }

    /// Wraps a computation that is created when the toast mounts.
    pub fn from_factory<F, Fut>(factory: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::with_source(Source::Deferred(Box::new(move || factory().boxed())))
    }

    fn with_source(source: Source<T, E>) -> Self {
        Self {
            source,
            success: None,
            error: None,
            auto_dismiss: false,
            on_success: None,
            on_error: None,
        }
    }

    #[must_use]
    pub fn success(mut self, text: impl Into<String>) -> Self {
        self.success = Some(text.into());
        self
    }

    #[must_use]
    pub fn error(mut self, text: impl Into<String>) -> Self {
        self.error = Some(text.into());
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    #[must_use]
    pub fn on_success(mut self, callback: impl FnOnce(T, ToastId) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_error(mut self, callback: impl FnOnce(E, ToastId) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(callback));
        self
    }
}

impl<T, E> From<Loading<T, E>> for LoadingOptions
where
    T: Send + 'static,
    E: fmt::Display + Send + 'static,
{
    fn from(loading: Loading<T, E>) -> Self {
        let Loading {
            source,
            success,
            error,
            auto_dismiss,
            on_success,
            on_error,
        } = loading;

        let runner: Runner = Box::new(move |id: ToastId| {
            let computation = match source {
                Source::Pending(future) => future,
                Source::Deferred(factory) => factory(),
            };
            async move {
                match computation.await {
                    Ok(data) => {
                        if let Some(callback) = on_success {
                            callback(data, id);
                        }
                        LoadingOutcome::Success
                    }
                    Err(err) => {
                        let message = err.to_string();
                        if let Some(callback) = on_error {
                            callback(err, id);
                        }
                        LoadingOutcome::Failure(message)
                    }
                }
            }
            .boxed()
        });

        Self {
            runner: Arc::new(Mutex::new(Some(runner))),
            success,
            error,
            auto_dismiss,
        }
    }
}

/// A request to open or update a toast.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    /// Dedup/update key. Generated on dispatch when absent.
    pub id: Option<ToastId>,
    /// `None` for the plain "default" toast.
    pub variant: Option<Variant>,
    pub text: String,
    pub description: Option<String>,
    /// Glyph that replaces the variant icon.
    pub icon: Option<String>,
    /// Time before auto-dismiss. `None` uses the default, zero disables it.
    pub delay: Option<Duration>,
    pub action: Option<Action>,
    pub attrs: Option<Attributes>,
    /// Only meaningful for the loading variant.
    pub loading: Option<LoadingOptions>,
}

impl ToastRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    #[must_use]
    pub fn delay_ms(self, millis: u64) -> Self {
        self.delay(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Adds one pass-through attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs
            .get_or_insert_with(Attributes::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = Some(attrs);
        self
    }

    #[must_use]
    pub fn loading(mut self, options: impl Into<LoadingOptions>) -> Self {
        self.loading = Some(options.into());
        self
    }

    /// Fills in a generated id if the caller did not supply one.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.id.is_none() {
            self.id = Some(ToastId::generate());
        }
        self
    }
}
