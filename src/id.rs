//! Widget identifiers
//!
//! Identifiers are handed out by allocators the caller owns, so two UI trees
//! never share hidden counters.

use std::fmt;

/// Identifier of a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for [`WidgetId`]s.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) returns.
    pub fn peek(&self) -> WidgetId {
        WidgetId(self.next)
    }
}

/// Allocator for stencil reference values used by clipping widgets.
///
/// Value 0 is the cleared stencil buffer, so references cycle through 1..=255.
#[derive(Debug)]
pub struct StencilAllocator {
    next: u8,
}

impl StencilAllocator {
    /// Create an allocator whose first reference is 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next stencil reference, wrapping back to 1 after 255.
    pub fn next_ref(&mut self) -> u8 {
        let value = self.next;
        self.next = if self.next == u8::MAX { 1 } else { self.next + 1 };
        value
    }
}

impl Default for StencilAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), WidgetId(0));
        assert_eq!(ids.next_id(), WidgetId(1));
        assert_eq!(ids.peek(), WidgetId(2));
    }

    #[test]
    fn test_independent_allocators() {
        let mut a = IdAllocator::starting_at(10);
        let mut b = IdAllocator::starting_at(10);
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn test_stencil_refs_skip_zero() {
        let mut refs = StencilAllocator::new();
        let first = refs.next_ref();
        assert_eq!(first, 1);
        for _ in 0..253 {
            refs.next_ref();
        }
        assert_eq!(refs.next_ref(), 255);
        assert_eq!(refs.next_ref(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(WidgetId(7).to_string(), "#7");
    }
}
