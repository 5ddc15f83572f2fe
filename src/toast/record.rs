// SPDX-License-Identifier: MPL-2.0
//! Stored toast records.

use super::id::{InternalKey, ToastId};
use super::request::{Action, Attributes, LoadingOptions, ToastRequest};
use super::types::Variant;
use crate::config::defaults::DEFAULT_DELAY_MS;
use std::time::Duration;

/// One visible notification, as owned by the registry.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    key: InternalKey,
    pub variant: Option<Variant>,
    pub text: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub delay: Option<Duration>,
    pub action: Option<Action>,
    pub attrs: Option<Attributes>,
    pub loading: Option<LoadingOptions>,
}

impl ToastRecord {
    /// Builds a record from a request, generating the id if needed.
    pub fn from_request(request: ToastRequest, key: InternalKey) -> Self {
        let request = request.normalized();
        Self {
            id: request.id.unwrap_or_else(ToastId::generate),
            key,
            variant: request.variant,
            text: request.text,
            description: request.description,
            icon: request.icon,
            delay: request.delay,
            action: request.action,
            attrs: request.attrs,
            loading: request.loading,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn key(&self) -> InternalKey {
        self.key
    }

    /// Auto-dismiss delay, with the default applied.
    #[must_use]
    pub fn effective_delay(&self) -> Duration {
        self.delay
            .unwrap_or(Duration::from_millis(DEFAULT_DELAY_MS))
    }

    /// Shallow merge: every field the request sets wins, the rest is kept.
    ///
    /// `id` and `key` never change. `text` is always present on a request
    /// and therefore always replaced.
    pub fn merge(&mut self, request: ToastRequest) {
        let ToastRequest {
            id: _,
            variant,
            text,
            description,
            icon,
            delay,
            action,
            attrs,
            loading,
        } = request;

        self.text = text;
        if variant.is_some() {
            self.variant = variant;
        }
        if description.is_some() {
            self.description = description;
        }
        if icon.is_some() {
            self.icon = icon;
        }
        if delay.is_some() {
            self.delay = delay;
        }
        if action.is_some() {
            self.action = action;
        }
        if attrs.is_some() {
            self.attrs = attrs;
        }
        if loading.is_some() {
            self.loading = loading;
        }
    }

    /// Looks up one pass-through attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .as_ref()
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_omitted_fields() {
        let mut record = ToastRecord::from_request(
            ToastRequest::new("a")
                .id("x")
                .description("first")
                .attr("testid", "t"),
            InternalKey::new(),
        );

        record.merge(ToastRequest::new("b").id("x"));

        assert_eq!(record.text, "b");
        assert_eq!(record.description.as_deref(), Some("first"));
        assert_eq!(record.attr("testid"), Some("t"));
    }

    #[test]
    fn merge_overwrites_present_fields() {
        let mut record = ToastRecord::from_request(
            ToastRequest::new("a").variant(Variant::Info).attr("testid", "t"),
            InternalKey::new(),
        );

        record.merge(
            ToastRequest::new("b")
                .variant(Variant::Error)
                .attr("role", "status"),
        );

        assert_eq!(record.variant, Some(Variant::Error));
        // attrs are replaced as a whole, not merged key by key
        assert_eq!(record.attr("testid"), None);
        assert_eq!(record.attr("role"), Some("status"));
    }

    #[test]
    fn merge_never_changes_identity() {
        let key = InternalKey::new();
        let mut record = ToastRecord::from_request(ToastRequest::new("a").id("x"), key);

        record.merge(ToastRequest::new("b").id("y"));

        assert_eq!(record.id(), &ToastId::from("x"));
        assert_eq!(record.key(), key);
    }

    #[test]
    fn effective_delay_defaults_to_four_seconds() {
        let record = ToastRecord::from_request(ToastRequest::new("a"), InternalKey::new());
        assert_eq!(record.effective_delay(), Duration::from_millis(4000));
    }
}
