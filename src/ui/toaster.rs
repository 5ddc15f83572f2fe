// SPDX-License-Identifier: MPL-2.0
//! The mounted toast surface.
//!
//! A `Toaster` owns the registry for one window, the lifecycle of every
//! visible toast, and the receiving end of its [`Dispatcher`]. Embed it in
//! an Iced application by forwarding its messages, subscription and view:
//!
//! ```ignore
//! let (toaster, toasts) = Toaster::mount_global(config);
//!
//! // update
//! Message::Toaster(msg) => self.toaster.update(msg).map(Message::Toaster),
//! // subscription
//! self.toaster.subscription().map(Message::Toaster)
//! // view (on top of the app content)
//! Stack::new().push(content).push(self.toaster.view().map(Message::Toaster))
//! ```
//!
//! Every state-changing method takes the current instant, so the surface
//! can be driven deterministically without a window.
//!
//! Hover is wired through `mouse_area`, but Iced emits no focus events for
//! containers, so the view never reports keyboard focus. Hosts that track
//! focus themselves (for example from their own focusable widgets) forward
//! it as [`Message::Focused`] or call [`Toaster::set_focused`]; until then
//! the focus hold is simply never taken.

use crate::config::{ToasterConfig, TICK_INTERVAL_MS};
use crate::toast::{
    facade, Command, Dispatcher, ExitStep, InternalKey, LoadingOutcome, OpenOutcome,
    PresentationContext, Registry, SectionPresentation, ToastId, ToastLifecycle,
    ToastPresentation, ToastRecord, ToastRequest, Variant,
};
use crate::ui::theming::ThemeMode;
use crate::ui::toast_view;
use futures_util::future::BoxFuture;
use iced::{time, Element, Subscription, Task};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::{debug, info};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick: applies queued requests and advances timers.
    Tick(Instant),
    /// Close button pressed.
    CloseRequested(ToastId),
    /// Action button pressed.
    ActionPressed(ToastId),
    /// Pointer entered (`true`) or left (`false`) a toast.
    Hovered(ToastId, bool),
    /// Keyboard focus entered (`true`) or left (`false`) a toast.
    ///
    /// Never produced by [`Toaster::view`]; the host sends it.
    Focused(ToastId, bool),
    /// A loading computation finished.
    LoadingSettled {
        id: ToastId,
        key: InternalKey,
        generation: u64,
        outcome: LoadingOutcome,
    },
}

/// A started loading computation that still has to be driven.
///
/// [`Toaster::update`] turns these into Iced tasks; headless hosts await
/// `future` and pass the result to [`Toaster::settle`].
pub struct LoadingJob {
    pub id: ToastId,
    pub key: InternalKey,
    /// Loading run this job belongs to; later restarts supersede it.
    pub generation: u64,
    pub future: BoxFuture<'static, LoadingOutcome>,
}

impl fmt::Debug for LoadingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingJob")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl LoadingJob {
    fn into_task(self) -> Task<Message> {
        let LoadingJob {
            id,
            key,
            generation,
            future,
        } = self;
        Task::perform(future, move |outcome| Message::LoadingSettled {
            id: id.clone(),
            key,
            generation,
            outcome,
        })
    }
}

pub struct Toaster {
    config: ToasterConfig,
    theme: ThemeMode,
    reduced_motion: bool,
    registry: Registry,
    lifecycles: HashMap<InternalKey, ToastLifecycle>,
    inbox: UnboundedReceiver<Command>,
    dispatcher: Dispatcher,
    global: bool,
}

impl fmt::Debug for Toaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toaster")
            .field("position", &self.config.position)
            .field("visible", &self.registry.len())
            .field("global", &self.global)
            .finish()
    }
}

impl Toaster {
    /// Mounts a toaster and returns it with its dispatch handle.
    #[must_use]
    pub fn new(config: ToasterConfig) -> (Self, Dispatcher) {
        let (sender, inbox) = unbounded_channel();
        let dispatcher = Dispatcher::new(sender);
        let toaster = Self {
            theme: config.theme.resolve(),
            reduced_motion: config.prefers_reduced_motion(),
            registry: Registry::with_capacity(config.max_visible(), config.position),
            lifecycles: HashMap::new(),
            inbox,
            dispatcher: dispatcher.clone(),
            global: false,
            config,
        };
        info!(
            position = %toaster.config.position,
            max_toasts = toaster.config.max_visible(),
            "toaster mounted"
        );
        (toaster, dispatcher)
    }

    /// Mounts a toaster and makes it the target of [`facade`].
    ///
    /// The most recent global mount wins. Dropping the toaster unbinds it.
    #[must_use]
    pub fn mount_global(config: ToasterConfig) -> (Self, Dispatcher) {
        let (mut toaster, dispatcher) = Self::new(config);
        toaster.global = true;
        facade::bind(dispatcher.clone());
        (toaster, dispatcher)
    }

    /// Another handle to this toaster.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    #[must_use]
    pub fn config(&self) -> &ToasterConfig {
        &self.config
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    // =========================================================================
    // Registry operations
    // =========================================================================

    /// Opens or updates a toast right away, bypassing the queue.
    pub fn open(&mut self, request: ToastRequest, now: Instant) -> (ToastRequest, Option<LoadingJob>) {
        let update_delay = request.delay;
        let fresh_loading = request
            .loading
            .as_ref()
            .is_some_and(|options| !options.is_started());
        let (request, outcome) = self.registry.open(request);

        let key = outcome.key();
        let Some(record) = self.registry.get_by_key(key) else {
            return (request, None);
        };
        let is_loading = is_loading_record(record);
        let delay = record.effective_delay();

        match outcome {
            OpenOutcome::Inserted { key, evicted } => {
                if let Some(evicted) = evicted {
                    self.lifecycles.remove(&evicted.key());
                }
                self.lifecycles
                    .insert(key, ToastLifecycle::mount(delay, is_loading, now));
            }
            OpenOutcome::Updated { key } => {
                let lifecycle = self
                    .lifecycles
                    .entry(key)
                    .or_insert_with(|| ToastLifecycle::mount(delay, false, now));
                if update_delay.is_some() {
                    lifecycle.rearm(delay, now);
                }
                if is_loading && fresh_loading {
                    lifecycle.restart_loading(now);
                } else if !is_loading && lifecycle.is_pending() {
                    lifecycle.clear_loading(now);
                }
            }
        }

        let job = self.start_loading(key);
        (request, job)
    }

    /// Removes a toast immediately, without the exit animation.
    pub fn close(&mut self, id: &ToastId) -> bool {
        match self.registry.close(id) {
            Some(record) => {
                self.lifecycles.remove(&record.key());
                true
            }
            None => false,
        }
    }

    /// Closes a toast the way its close button does: exit animation first,
    /// unless reduced motion is requested.
    pub fn request_close(&mut self, id: &ToastId, now: Instant) {
        let Some(key) = self.registry.get(id).map(ToastRecord::key) else {
            return;
        };
        let step = self
            .lifecycles
            .get_mut(&key)
            .map(|lifecycle| lifecycle.begin_exit(now, self.reduced_motion));
        if step == Some(ExitStep::RemoveNow) {
            self.close(id);
        }
    }

    /// Applies every queued dispatch request, in the order they were sent.
    pub fn sync(&mut self, now: Instant) -> Vec<LoadingJob> {
        let mut jobs = Vec::new();
        while let Ok(command) = self.inbox.try_recv() {
            match command {
                Command::Open(request) => {
                    if let (_, Some(job)) = self.open(request, now) {
                        jobs.push(job);
                    }
                }
                Command::Close(id) => {
                    self.close(&id);
                }
            }
        }
        jobs
    }

    /// Applies queued requests, then advances every toast's timers and
    /// removes the ones that finished.
    pub fn tick(&mut self, now: Instant) -> Vec<LoadingJob> {
        let jobs = self.sync(now);

        let reduced_motion = self.reduced_motion;
        let finished: Vec<ToastId> = self
            .registry
            .records()
            .filter(|record| {
                self.lifecycles
                    .get_mut(&record.key())
                    .is_some_and(|lifecycle| lifecycle.tick(now, reduced_motion))
            })
            .map(|record| record.id().clone())
            .collect();

        for id in finished {
            self.close(&id);
        }
        jobs
    }

    pub fn set_hovered(&mut self, id: &ToastId, hovered: bool, now: Instant) {
        if let Some(lifecycle) = self.lifecycle_mut(id) {
            lifecycle.set_hovered(hovered, now);
        }
    }

    pub fn set_focused(&mut self, id: &ToastId, focused: bool, now: Instant) {
        if let Some(lifecycle) = self.lifecycle_mut(id) {
            lifecycle.set_focused(focused, now);
        }
    }

    /// Runs the action callback of a toast.
    pub fn trigger_action(&self, id: &ToastId) {
        if let Some(action) = self.registry.get(id).and_then(|r| r.action.as_ref()) {
            action.trigger();
        }
    }

    /// Records the outcome of a loading computation.
    ///
    /// The toast may have been closed or evicted meanwhile, or its loading
    /// restarted by an update; the outcome is then dropped (its callbacks
    /// have already run). Returns whether a visible toast was updated.
    pub fn settle(
        &mut self,
        id: &ToastId,
        key: InternalKey,
        generation: u64,
        outcome: &LoadingOutcome,
        now: Instant,
    ) -> bool {
        let Some(record) = self
            .registry
            .get_by_key(key)
            .filter(|record| record.id() == id)
        else {
            debug!(%id, ?outcome, "loading settled after its toast was removed");
            return false;
        };
        let auto_dismiss = record
            .loading
            .as_ref()
            .is_some_and(|options| options.auto_dismiss);
        let delay = record.effective_delay();

        let Some(lifecycle) = self.lifecycles.get_mut(&key) else {
            return false;
        };
        if lifecycle.loading_generation() != generation {
            debug!(%id, ?outcome, "loading settled for a superseded run");
            return false;
        }
        lifecycle.resolve(outcome, auto_dismiss, delay, now)
    }

    // =========================================================================
    // Iced integration
    // =========================================================================

    /// Handles a toaster message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Tick(instant) => {
                let jobs = self.tick(instant);
                return Task::batch(jobs.into_iter().map(LoadingJob::into_task));
            }
            Message::CloseRequested(id) => self.request_close(&id, now),
            Message::ActionPressed(id) => self.trigger_action(&id),
            Message::Hovered(id, hovered) => self.set_hovered(&id, hovered, now),
            Message::Focused(id, focused) => self.set_focused(&id, focused, now),
            Message::LoadingSettled {
                id,
                key,
                generation,
                outcome,
            } => {
                self.settle(&id, key, generation, &outcome, now);
            }
        }
        Task::none()
    }

    /// Timer ticks. Always active: requests may be queued at any time.
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    }

    /// Renders the toast stack, to be layered over the application.
    pub fn view(&self) -> Element<'_, Message> {
        toast_view::view_overlay(self)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Visible records in render order.
    pub fn records(&self) -> impl Iterator<Item = &ToastRecord> {
        self.registry.records()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[must_use]
    pub fn lifecycle(&self, id: &ToastId) -> Option<&ToastLifecycle> {
        let key = self.registry.get(id)?.key();
        self.lifecycles.get(&key)
    }

    #[must_use]
    pub fn section(&self) -> SectionPresentation {
        SectionPresentation::new(self.config.position, &self.config.toast_options)
    }

    #[must_use]
    pub fn presentation(&self, id: &ToastId) -> Option<ToastPresentation> {
        let record = self.registry.get(id)?;
        self.describe(record)
    }

    /// Records with their presentation, in render order.
    pub fn entries(&self) -> impl Iterator<Item = (&ToastRecord, ToastPresentation)> {
        self.registry
            .records()
            .filter_map(|record| self.describe(record).map(|p| (record, p)))
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    fn describe(&self, record: &ToastRecord) -> Option<ToastPresentation> {
        let lifecycle = self.lifecycles.get(&record.key())?;
        let ctx = PresentationContext {
            position: self.config.position,
            theme: self.theme,
            options: &self.config.toast_options,
            reduced_motion: self.reduced_motion,
        };
        Some(ToastPresentation::describe(
            record,
            lifecycle,
            self.registry.is_active(record.key()),
            &ctx,
        ))
    }

    fn lifecycle_mut(&mut self, id: &ToastId) -> Option<&mut ToastLifecycle> {
        let key = self.registry.get(id)?.key();
        self.lifecycles.get_mut(&key)
    }

    fn start_loading(&self, key: InternalKey) -> Option<LoadingJob> {
        let record = self.registry.get_by_key(key)?;
        if !is_loading_record(record) {
            return None;
        }
        let generation = self.lifecycles.get(&key)?.loading_generation();
        let future = record.loading.as_ref()?.start(record.id().clone())?;
        debug!(id = %record.id(), generation, "loading computation started");
        Some(LoadingJob {
            id: record.id().clone(),
            key,
            generation,
            future,
        })
    }
}

impl Drop for Toaster {
    fn drop(&mut self) {
        if self.global {
            facade::unbind(&self.dispatcher);
        }
        debug!("toaster unmounted");
    }
}

fn is_loading_record(record: &ToastRecord) -> bool {
    record.variant == Some(Variant::Loading) && record.loading.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Loading, Position};

    fn config(max_toasts: usize, position: Position) -> ToasterConfig {
        ToasterConfig {
            max_toasts,
            position,
            theme: ThemeMode::Light,
            reduced_motion: Some(false),
            ..ToasterConfig::default()
        }
    }

    #[test]
    fn new_toaster_is_empty() {
        let (toaster, dispatcher) = Toaster::new(ToasterConfig::default());
        assert!(toaster.is_empty());
        assert!(dispatcher.is_mounted());
    }

    #[test]
    fn queued_requests_apply_on_sync() {
        let (mut toaster, dispatcher) = Toaster::new(config(4, Position::BottomRight));
        dispatcher.success(ToastRequest::new("a"));
        dispatcher.info(ToastRequest::new("b"));
        assert!(toaster.is_empty());

        toaster.sync(Instant::now());

        let texts: Vec<_> = toaster.records().map(|r| r.text.clone()).collect();
        assert_eq!(texts, ["a", "b"]);
    }

    #[test]
    fn close_button_waits_for_exit_animation() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let now = Instant::now();
        let (request, _) = toaster.open(ToastRequest::new("a"), now);
        let id = request.id.expect("normalized");

        toaster.request_close(&id, now);
        assert_eq!(toaster.len(), 1);
        assert!(toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));

        toaster.tick(now + Duration::from_millis(300));
        assert!(toaster.is_empty());
    }

    #[test]
    fn dispatched_close_removes_immediately() {
        let (mut toaster, dispatcher) = Toaster::new(config(4, Position::BottomRight));
        let now = Instant::now();
        dispatcher.info(ToastRequest::new("a").id("a"));
        toaster.sync(now);

        dispatcher.close("a");
        toaster.sync(now);

        assert!(toaster.is_empty());
    }

    #[test]
    fn evicted_toast_loses_its_lifecycle() {
        let (mut toaster, _) = Toaster::new(config(1, Position::TopLeft));
        let now = Instant::now();
        toaster.open(ToastRequest::new("a").id("a"), now);
        toaster.open(ToastRequest::new("b").id("b"), now);

        assert!(toaster.lifecycle(&ToastId::from("a")).is_none());
        assert_eq!(toaster.lifecycles.len(), 1);
    }

    #[test]
    fn hover_pauses_auto_dismiss() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let start = Instant::now();
        toaster.open(ToastRequest::new("a").id("a").delay_ms(1000), start);
        let id = ToastId::from("a");

        toaster.set_hovered(&id, true, start + Duration::from_millis(500));
        toaster.tick(start + Duration::from_secs(10));
        assert!(!toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));

        toaster.set_hovered(&id, false, start + Duration::from_secs(10));
        toaster.tick(start + Duration::from_millis(10_499));
        assert!(!toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));
        toaster.tick(start + Duration::from_millis(10_500));
        assert!(toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));
    }

    #[test]
    fn focus_hold_pauses_auto_dismiss() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let start = Instant::now();
        toaster.open(ToastRequest::new("a").id("a").delay_ms(1000), start);
        let id = ToastId::from("a");

        toaster.set_focused(&id, true, start + Duration::from_millis(200));
        toaster.tick(start + Duration::from_secs(10));
        assert!(!toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));

        toaster.set_focused(&id, false, start + Duration::from_secs(10));
        toaster.tick(start + Duration::from_millis(10_799));
        assert!(!toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));
        toaster.tick(start + Duration::from_millis(10_800));
        assert!(toaster.lifecycle(&id).is_some_and(ToastLifecycle::is_exiting));
    }

    #[test]
    fn forwarded_focus_message_pauses_countdown() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        toaster.open(ToastRequest::new("a").id("a").delay_ms(1000), Instant::now());
        let id = ToastId::from("a");

        let _ = toaster.update(Message::Focused(id.clone(), true));
        assert!(toaster
            .lifecycle(&id)
            .is_some_and(|l| l.countdown().is_paused()));

        let _ = toaster.update(Message::Focused(id.clone(), false));
        assert!(!toaster
            .lifecycle(&id)
            .is_some_and(|l| l.countdown().is_paused()));
    }

    #[test]
    fn update_with_new_delay_rearms_countdown() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let start = Instant::now();
        toaster.open(ToastRequest::new("a").id("a").delay_ms(1000), start);

        let later = start + Duration::from_millis(900);
        toaster.open(ToastRequest::new("a2").id("a").delay_ms(5000), later);

        let remaining = toaster
            .lifecycle(&ToastId::from("a"))
            .and_then(|l| l.countdown().remaining(later));
        assert_eq!(remaining, Some(Duration::from_millis(5000)));
    }

    #[test]
    fn settle_for_removed_toast_is_ignored() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let now = Instant::now();
        let (_, job) = toaster.open(
            ToastRequest::new("working")
                .id("job")
                .variant(Variant::Loading)
                .loading(Loading::from_future(async { Ok::<(), String>(()) })),
            now,
        );
        let job = job.expect("loading job started");
        toaster.close(&job.id);

        assert!(!toaster.settle(
            &job.id,
            job.key,
            job.generation,
            &LoadingOutcome::Success,
            now
        ));
    }

    #[test]
    fn settle_from_restarted_run_is_ignored() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let now = Instant::now();
        let request = || {
            ToastRequest::new("working")
                .id("job")
                .variant(Variant::Loading)
                .loading(Loading::from_future(std::future::pending::<Result<(), String>>()))
        };
        let (_, first) = toaster.open(request(), now);
        let (_, second) = toaster.open(request(), now);
        let (first, second) = (first.expect("first run"), second.expect("second run"));

        let failure = LoadingOutcome::Failure("stale".into());
        assert!(!toaster.settle(&first.id, first.key, first.generation, &failure, now));
        assert!(toaster
            .lifecycle(&first.id)
            .is_some_and(ToastLifecycle::is_pending));
        assert!(toaster.settle(&second.id, second.key, second.generation, &failure, now));
    }

    #[test]
    fn loading_options_on_non_loading_toast_do_not_start() {
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        let (_, job) = toaster.open(
            ToastRequest::new("x")
                .variant(Variant::Info)
                .loading(Loading::from_future(async { Ok::<(), String>(()) })),
            Instant::now(),
        );
        assert!(job.is_none());
    }

    #[test]
    fn action_callback_runs() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let clicked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&clicked);
        let (mut toaster, _) = Toaster::new(config(4, Position::BottomRight));
        toaster.open(
            ToastRequest::new("x")
                .id("x")
                .action(crate::toast::Action::new(move || flag.store(true, Ordering::SeqCst))),
            Instant::now(),
        );

        toaster.trigger_action(&ToastId::from("x"));
        assert!(clicked.load(Ordering::SeqCst));
    }

    #[test]
    fn dropping_toaster_unmounts_dispatcher() {
        let (toaster, dispatcher) = Toaster::new(ToasterConfig::default());
        drop(toaster);
        assert!(!dispatcher.is_mounted());
    }
}
