//! Half-open byte spans over a specific text snapshot.
//!
//! Every span is only meaningful against the exact buffer it was measured
//! on. After a mutation the owner must either rebuild the span or shift it
//! through the edit delta that produced the new buffer.

use serde::Serialize;

/// A half-open `[start, end)` byte range into a text snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Strict-interior containment: `[s, e)` is surrounded only when it
    /// starts strictly after this span starts and ends strictly before
    /// this span ends. Boundary-touching ranges are NOT surrounded.
    ///
    /// This deliberately rejects edge-adjacent ranges; callers that need
    /// inclusive boundaries must widen the span themselves (see
    /// DESIGN.md for why the rule stays strict).
    pub fn surrounds(&self, start: usize, end: usize) -> bool {
        start > self.start && end < self.end
    }

    /// Slice the covered text out of the snapshot this span was built on.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}
