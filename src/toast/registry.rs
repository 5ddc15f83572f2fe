// SPDX-License-Identifier: MPL-2.0
//! Ordered store of the toasts visible on one toaster.
//!
//! The `Registry` decides what is on screen: it inserts new toasts at the
//! anchor end, updates existing ones in place when their id is reused, and
//! evicts the entry furthest from the anchor when capacity is reached.

use super::id::{InternalKey, ToastId};
use super::policy::{CapacityPolicy, End};
use super::record::ToastRecord;
use super::request::ToastRequest;
use super::types::Position;
use std::collections::VecDeque;
use tracing::debug;

/// What `open` did to the list.
#[derive(Debug)]
pub enum OpenOutcome {
    /// A new record was inserted, possibly pushing out another one.
    Inserted {
        key: InternalKey,
        evicted: Option<ToastRecord>,
    },
    /// An existing record with the same id was merged in place.
    Updated { key: InternalKey },
}

impl OpenOutcome {
    #[must_use]
    pub fn key(&self) -> InternalKey {
        match self {
            OpenOutcome::Inserted { key, .. } | OpenOutcome::Updated { key } => *key,
        }
    }
}

/// Visible toasts for one mounted surface, in render order.
#[derive(Debug)]
pub struct Registry {
    records: VecDeque<ToastRecord>,
    policy: CapacityPolicy,
}

impl Registry {
    #[must_use]
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            records: VecDeque::new(),
            policy,
        }
    }

    #[must_use]
    pub fn with_capacity(max_visible: usize, position: Position) -> Self {
        Self::new(CapacityPolicy::new(max_visible, position))
    }

    #[must_use]
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Inserts or updates a toast.
    ///
    /// Returns the request with its id filled in, and what happened.
    pub fn open(&mut self, request: ToastRequest) -> (ToastRequest, OpenOutcome) {
        let request = request.normalized();
        let returned = request.clone();

        let existing = request
            .id
            .as_ref()
            .and_then(|id| self.records.iter().position(|r| r.id() == id));

        if let Some(existing) = existing.and_then(|pos| self.records.get_mut(pos)) {
            existing.merge(request);
            debug!(id = %existing.id(), "toast updated in place");
            let key = existing.key();
            return (returned, OpenOutcome::Updated { key });
        }

        let evicted = match self.policy.eviction(self.records.len()) {
            Some(End::Front) => self.records.pop_front(),
            Some(End::Back) => self.records.pop_back(),
            None => None,
        };
        if let Some(record) = &evicted {
            debug!(id = %record.id(), "toast evicted at capacity");
        }

        let record = ToastRecord::from_request(request, InternalKey::new());
        let key = record.key();
        debug!(id = %record.id(), "toast inserted");
        match self.policy.insert_end() {
            End::Front => self.records.push_front(record),
            End::Back => self.records.push_back(record),
        }

        (returned, OpenOutcome::Inserted { key, evicted })
    }

    /// Removes the toast with `id`, keeping the order of the others.
    ///
    /// Unknown ids are ignored.
    pub fn close(&mut self, id: &ToastId) -> Option<ToastRecord> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        let removed = self.records.remove(pos);
        if removed.is_some() {
            debug!(%id, "toast closed");
        }
        removed
    }

    /// Visible records in render order.
    pub fn records(&self) -> impl Iterator<Item = &ToastRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn get_by_key(&self, key: InternalKey) -> Option<&ToastRecord> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// The record last in render order, drawn above the others.
    #[must_use]
    pub fn active(&self) -> Option<&ToastRecord> {
        self.records.back()
    }

    #[must_use]
    pub fn is_active(&self, key: InternalKey) -> bool {
        self.active().is_some_and(|r| r.key() == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::types::Variant;

    fn texts(registry: &Registry) -> Vec<&str> {
        registry.records().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = Registry::with_capacity(4, Position::BottomRight);
        assert!(registry.is_empty());
        assert!(registry.active().is_none());
    }

    #[test]
    fn bottom_anchor_appends_in_call_order() {
        let mut registry = Registry::with_capacity(4, Position::BottomRight);
        for text in ["1", "2", "3"] {
            registry.open(ToastRequest::new(text));
        }
        assert_eq!(texts(&registry), ["1", "2", "3"]);
    }

    #[test]
    fn top_anchor_prepends() {
        let mut registry = Registry::with_capacity(4, Position::TopLeft);
        for text in ["1", "2", "3"] {
            registry.open(ToastRequest::new(text));
        }
        assert_eq!(texts(&registry), ["3", "2", "1"]);
    }

    #[test]
    fn top_anchor_keeps_newest_three_of_six() {
        let mut registry = Registry::with_capacity(3, Position::TopRight);
        for i in 1..=6 {
            registry.open(ToastRequest::new(format!("#{i}")));
        }
        assert_eq!(texts(&registry), ["#6", "#5", "#4"]);
    }

    #[test]
    fn bottom_anchor_evicts_from_front() {
        let mut registry = Registry::with_capacity(2, Position::BottomCenter);
        registry.open(ToastRequest::new("a"));
        registry.open(ToastRequest::new("b"));
        let (_, outcome) = registry.open(ToastRequest::new("c"));

        match outcome {
            OpenOutcome::Inserted {
                evicted: Some(record),
                ..
            } => assert_eq!(record.text, "a"),
            other => panic!("expected eviction, got {other:?}"),
        }
        assert_eq!(texts(&registry), ["b", "c"]);
    }

    #[test]
    fn reused_id_updates_in_place() {
        let mut registry = Registry::with_capacity(3, Position::BottomRight);
        registry.open(ToastRequest::new("first").id(1_u32));
        let (_, inserted) = registry.open(
            ToastRequest::new("a")
                .id("x")
                .attr("testid", "t")
                .variant(Variant::Info),
        );
        registry.open(ToastRequest::new("last").id(3_u32));

        let (_, updated) = registry.open(ToastRequest::new("b").id("x"));

        assert!(matches!(updated, OpenOutcome::Updated { .. }));
        assert_eq!(updated.key(), inserted.key());
        assert_eq!(registry.len(), 3);
        assert_eq!(texts(&registry), ["first", "b", "last"]);

        let record = registry.get(&ToastId::from("x")).expect("record kept");
        assert_eq!(record.attr("testid"), Some("t"));
        assert_eq!(record.variant, Some(Variant::Info));
    }

    #[test]
    fn update_at_capacity_does_not_evict() {
        let mut registry = Registry::with_capacity(2, Position::TopLeft);
        registry.open(ToastRequest::new("a").id("a"));
        registry.open(ToastRequest::new("b").id("b"));

        let (_, outcome) = registry.open(ToastRequest::new("a2").id("a"));

        assert!(matches!(outcome, OpenOutcome::Updated { .. }));
        assert_eq!(texts(&registry), ["b", "a2"]);
    }

    #[test]
    fn open_returns_normalized_request() {
        let mut registry = Registry::with_capacity(4, Position::BottomRight);
        let (request, _) = registry.open(ToastRequest::new("hello"));
        let id = request.id.expect("id generated");
        assert!(registry.get(&id).is_some());
    }

    #[test]
    fn close_removes_only_matching_record() {
        let mut registry = Registry::with_capacity(4, Position::BottomRight);
        for id in ["a", "b", "c"] {
            registry.open(ToastRequest::new(id).id(id));
        }

        let removed = registry.close(&ToastId::from("b"));

        assert_eq!(removed.map(|r| r.text), Some("b".to_string()));
        assert_eq!(texts(&registry), ["a", "c"]);
    }

    #[test]
    fn close_unknown_id_is_noop() {
        let mut registry = Registry::with_capacity(4, Position::BottomRight);
        registry.open(ToastRequest::new("a").id("a"));

        assert!(registry.close(&ToastId::from("missing")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn last_record_in_render_order_is_active() {
        let mut registry = Registry::with_capacity(4, Position::BottomRight);
        let (_, first) = registry.open(ToastRequest::new("a"));
        let (_, second) = registry.open(ToastRequest::new("b"));

        assert!(registry.is_active(second.key()));
        assert!(!registry.is_active(first.key()));
    }
}
