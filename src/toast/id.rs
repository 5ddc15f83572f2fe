// SPDX-License-Identifier: MPL-2.0
//! Toast identity: caller-facing ids and render keys.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identity used to update or close a toast.
///
/// Callers may supply their own (strings or integers); otherwise one is
/// generated when the request is dispatched. Integers are stored in their
/// decimal form, so `ToastId::from(7)` and `ToastId::from("7")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    /// Generates a fresh id: eight lowercase hex digits.
    ///
    /// Ids never repeat within a process (the first 2^32 of them at least).
    #[must_use]
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        static SEED: OnceLock<u32> = OnceLock::new();

        let seed = *SEED.get_or_init(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
                .unwrap_or(0x5eed_1234)
        });
        let n = COUNTER.fetch_add(1, Ordering::Relaxed) as u32;
        // Multiplying by an odd constant is a bijection on u32.
        let mixed = n.wrapping_mul(0x9e37_79b9).wrapping_add(seed);
        Self(format!("{mixed:08x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ToastId {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

/// Render identity of a record. Assigned once on insert and kept across
/// updates; never used to match requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InternalKey(u64);

impl InternalKey {
    /// Creates a new unique key.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for InternalKey {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_eight_hex_digits() {
        let id = ToastId::generate();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let ids: HashSet<ToastId> = (0..10_000).map(|_| ToastId::generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn integer_and_string_ids_compare_by_text() {
        assert_eq!(ToastId::from(42_u32), ToastId::from("42"));
        assert_ne!(ToastId::from("a"), ToastId::from("b"));
    }

    #[test]
    fn internal_keys_are_unique() {
        assert_ne!(InternalKey::new(), InternalKey::new());
    }
}
