// SPDX-License-Identifier: MPL-2.0
//! Toast state: requests, the visible-toast registry, per-toast lifecycles,
//! dispatch handles, and the presentation model.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest` and the loading builder callers use
//! - [`registry`] - `Registry` deciding which toasts are visible
//! - [`policy`] - directional eviction rule for a full registry
//! - [`lifecycle`] - countdown and exit/loading state machine per toast
//! - [`dispatch`] / [`facade`] - how callers reach a mounted toaster
//! - [`classes`] / [`presentation`] - stylesheet class contract
//!
//! Nothing here depends on a running UI; the Iced surface in
//! [`crate::ui::toaster`] drives it with ticks and events.

pub mod classes;
pub mod dispatch;
pub mod facade;
mod id;
pub mod lifecycle;
pub mod policy;
pub mod presentation;
mod record;
pub mod registry;
mod request;
mod types;

pub use dispatch::{Command, Dispatcher};
pub use id::{InternalKey, ToastId};
pub use lifecycle::{Countdown, ExitStep, LoadingState, Phase, Resolution, ToastLifecycle};
pub use policy::{CapacityPolicy, End};
pub use presentation::{PresentationContext, SectionPresentation, ToastPresentation};
pub use record::ToastRecord;
pub use registry::{OpenOutcome, Registry};
pub use request::{
    Action, Attributes, Callback, Loading, LoadingOptions, LoadingOutcome, ToastRequest,
};
pub use types::{Alignment, AnimationStyle, Position, Variant};
