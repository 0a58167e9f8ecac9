//! The [`Grid`] type: dimensions, blocked cells and the two endpoints of a
//! search.
//!
//! A `Grid` is a plain owned value. Editors mutate it freely; searches borrow
//! it read-only and call [`validate`](Grid::validate) before they start.

use std::collections::HashSet;

use crate::error::InvalidGrid;
use crate::geom::{Cell, Dims};

/// A rectangular map with obstacles and a start/end pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dims: Dims,
    blocked: HashSet<Cell>,
    start: Cell,
    end: Cell,
}

impl Grid {
    /// Create an obstacle-free grid. No invariant is checked here.
    pub fn new(dims: Dims, start: Cell, end: Cell) -> Self {
        Self {
            dims,
            blocked: HashSet::new(),
            start,
            end,
        }
    }

    /// Builder-style variant of [`block`](Self::block) for many cells.
    pub fn with_blocked(mut self, cells: impl IntoIterator<Item = Cell>) -> Self {
        self.blocked.extend(cells);
        self
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Move the start to `c`, clearing any obstacle there.
    pub fn set_start(&mut self, c: Cell) {
        self.blocked.remove(&c);
        self.start = c;
    }

    /// Move the end to `c`, clearing any obstacle there.
    pub fn set_end(&mut self, c: Cell) {
        self.blocked.remove(&c);
        self.end = c;
    }

    /// Mark `c` as blocked. Returns `true` if it was walkable before.
    pub fn block(&mut self, c: Cell) -> bool {
        self.blocked.insert(c)
    }

    /// Mark `c` as walkable. Returns `true` if it was blocked before.
    pub fn unblock(&mut self, c: Cell) -> bool {
        self.blocked.remove(&c)
    }

    /// Flip the blocked state of `c`, returning the new state.
    pub fn toggle(&mut self, c: Cell) -> bool {
        if self.blocked.remove(&c) {
            false
        } else {
            self.blocked.insert(c);
            true
        }
    }

    /// Remove every obstacle.
    pub fn clear_blocked(&mut self) {
        self.blocked.clear();
    }

    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.blocked.contains(&c)
    }

    /// Whether a search may step onto `c`: inside the grid and not blocked.
    #[inline]
    pub fn is_walkable(&self, c: Cell) -> bool {
        self.dims.contains(c) && !self.blocked.contains(&c)
    }

    /// Iterate over blocked cells in unspecified order.
    pub fn blocked(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked.iter().copied()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }

    /// Check the preconditions a search relies on.
    ///
    /// Grids whose corner-to-corner Manhattan distance overflows `i32` are
    /// rejected, since search scores are `i32`.
    ///
    /// Checks run in a fixed order (dimensions, start, end, obstacles), so
    /// the first violation reported is deterministic except among several
    /// out-of-bounds obstacles.
    pub fn validate(&self) -> Result<(), InvalidGrid> {
        if self.dims.is_empty() {
            return Err(InvalidGrid::empty(self.dims));
        }
        if (self.dims.rows - 1).checked_add(self.dims.cols - 1).is_none() {
            return Err(InvalidGrid::too_large(self.dims));
        }
        if !self.dims.contains(self.start) {
            return Err(InvalidGrid::StartOutOfBounds(self.start));
        }
        if !self.dims.contains(self.end) {
            return Err(InvalidGrid::EndOutOfBounds(self.end));
        }
        if self.is_blocked(self.start) {
            return Err(InvalidGrid::StartBlocked(self.start));
        }
        if self.is_blocked(self.end) {
            return Err(InvalidGrid::EndBlocked(self.end));
        }
        if let Some(&c) = self.blocked.iter().find(|&&c| !self.dims.contains(c)) {
            return Err(InvalidGrid::BlockedOutOfBounds(c));
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::new(Dims::new(4, 5), Cell::new(0, 0), Cell::new(3, 4))
            .with_blocked([Cell::new(1, 1), Cell::new(2, 3)]);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
