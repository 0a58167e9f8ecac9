use std::collections::HashMap;

use gridstar_core::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Status {
    Unseen,
    Open,
    Closed,
}

/// Per-cell search record.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    /// `None` for the start cell.
    pub(crate) parent: Option<Cell>,
    pub(crate) status: Status,
}

/// Node storage for one search, keyed by cell.
///
/// Only cells the search has reached get an entry, so memory follows the
/// explored region rather than the grid's area. Predecessors are plain
/// `Cell` values, and path reconstruction is a walk over map lookups.
pub(crate) struct Arena {
    nodes: HashMap<Cell, Node>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    #[inline]
    pub(crate) fn node(&self, c: Cell) -> Option<&Node> {
        self.nodes.get(&c)
    }

    /// Record a (better) route to `c` and mark it open.
    pub(crate) fn open(&mut self, c: Cell, g: i32, f: i32, parent: Option<Cell>) {
        self.nodes.insert(
            c,
            Node {
                g,
                f,
                parent,
                status: Status::Open,
            },
        );
    }

    pub(crate) fn close(&mut self, c: Cell) {
        if let Some(n) = self.nodes.get_mut(&c) {
            n.status = Status::Closed;
        }
    }

    #[inline]
    pub(crate) fn status(&self, c: Cell) -> Status {
        self.nodes.get(&c).map_or(Status::Unseen, |n| n.status)
    }

    /// Best known cost to `c`, if the search has reached it.
    pub(crate) fn g(&self, c: Cell) -> Option<i32> {
        self.nodes.get(&c).map(|n| n.g)
    }

    /// Cells with the given status, in row-major order.
    pub(crate) fn cells_with(&self, status: Status) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.status == status)
            .map(|(&c, _)| c)
            .collect();
        cells.sort_unstable();
        cells
    }

    /// Walk predecessors from `c` back to the root; start-first order.
    pub(crate) fn trace(&self, c: Cell) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(c);
        while let Some(p) = cur {
            path.push(p);
            cur = self.nodes.get(&p).and_then(|n| n.parent);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_arena_is_unseen() {
        let a = Arena::new();
        assert_eq!(a.status(Cell::new(1, 1)), Status::Unseen);
        assert_eq!(a.g(Cell::new(1, 1)), None);
        assert!(a.cells_with(Status::Open).is_empty());
        // An unrecorded cell is its own root.
        assert_eq!(a.trace(Cell::new(4, 4)), vec![Cell::new(4, 4)]);
    }

    #[test]
    fn trace_follows_parents() {
        let mut a = Arena::new();
        let s = Cell::new(0, 0);
        let m = Cell::new(0, 1);
        let e = Cell::new(1, 1);
        a.open(s, 0, 2, None);
        a.close(s);
        a.open(m, 1, 2, Some(s));
        a.open(e, 2, 2, Some(m));
        assert_eq!(a.trace(e), vec![s, m, e]);
        assert_eq!(a.g(e), Some(2));
        assert_eq!(a.status(s), Status::Closed);
        assert_eq!(a.node(m).map(|n| n.f), Some(2));
        assert_eq!(a.cells_with(Status::Open), vec![m, e]);
    }

    #[test]
    fn reopen_replaces_route() {
        let mut a = Arena::new();
        let c = Cell::new(2, 2);
        a.open(c, 5, 7, Some(Cell::new(2, 1)));
        a.open(c, 3, 5, Some(Cell::new(1, 2)));
        let n = a.node(c).unwrap();
        assert_eq!((n.g, n.f, n.parent), (3, 5, Some(Cell::new(1, 2))));
    }

    #[test]
    fn memory_follows_explored_cells() {
        let mut a = Arena::new();
        a.open(Cell::new(i32::MAX - 1, i32::MAX - 1), 0, 1, None);
        assert_eq!(a.nodes.len(), 1);
    }
}
