// SPDX-License-Identifier: MPL-2.0
//! Bounded-size policy for the visible toast list.
//!
//! The list is kept in render order. New toasts enter at the end nearest
//! the anchor edge; when the list is full, the entry furthest from that
//! edge is dropped first.

use super::types::Position;

/// One end of the render-ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Front,
    Back,
}

/// Capacity and direction for one mounted toaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    max_visible: usize,
    position: Position,
}

impl CapacityPolicy {
    /// `max_visible` is clamped to at least one.
    #[must_use]
    pub fn new(max_visible: usize, position: Position) -> Self {
        Self {
            max_visible: max_visible.max(1),
            position,
        }
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where new toasts are inserted.
    ///
    /// Top-anchored stacks prepend, bottom-anchored stacks append.
    #[must_use]
    pub fn insert_end(&self) -> End {
        if self.position.is_top() {
            End::Front
        } else {
            End::Back
        }
    }

    /// Which entry to drop when inserting into a list of `len` entries,
    /// or `None` if there is still room.
    #[must_use]
    pub fn eviction(&self, len: usize) -> Option<End> {
        if len < self.max_visible {
            return None;
        }
        Some(match self.insert_end() {
            End::Front => End::Back,
            End::Back => End::Front,
        })
    }
}
