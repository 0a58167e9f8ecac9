//! Binary-heap open set keyed by `(f, g, insertion_order)`.
//!
//! The heap has no decrease-key. A better route to a cell already in the heap
//! is pushed as a second entry; the search discards whichever entries no
//! longer match the arena's best `g` when they surface.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use gridstar_core::Cell;

/// One heap entry: a cell plus the scores it was pushed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) cell: Cell,
    pub(crate) f: i32,
    pub(crate) g: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse` to pop the
        // smallest first. Lower f, then lower g, then earlier insertion.
        self.f
            .cmp(&other.f)
            .then(self.g.cmp(&other.g))
            .then(self.seq.cmp(&other.seq))
    }
}

pub(crate) struct OpenSet {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, cell: Cell, f: i32, g: i32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { cell, f, g, seq }));
    }

    /// Pop the entry with the lowest `(f, g, seq)`. May be stale.
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Number of entries, stale duplicates included.
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// All entries in heap order (not priority order), stale ones included.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.heap.iter().map(|Reverse(entry)| entry)
    }
}
