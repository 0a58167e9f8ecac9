use std::collections::VecDeque;
use std::iter::FusedIterator;

use gridstar_core::{Cell, Grid, InvalidGrid};
use log::{debug, trace};

use crate::arena::{Arena, Status};
use crate::distance::manhattan;
use crate::event::{Path, SearchEvent, SearchOutcome};
use crate::neighbors::Neighbors;
use crate::open_set::OpenSet;

/// Work queued by an expansion and handed out one item per `next`.
enum Pending {
    Emit(SearchEvent),
    /// Enter `cell` into the open set; yields `Frontier` when applied.
    Open {
        cell: Cell,
        g: i32,
        f: i32,
        parent: Option<Cell>,
    },
}

/// A single A* run over a borrowed [`Grid`], consumed as an iterator of
/// [`SearchEvent`]s.
///
/// Each call to `next` hands out one event. An expansion is decided as a
/// whole when the previous one has been fully pulled, but its effects are
/// applied one event at a time: a cell shows up in
/// [`open_cells`](Self::open_cells) only once its `Frontier` event has been
/// yielded, and in [`closed_cells`](Self::closed_cells) once its `Expanded`
/// event has. The observation methods therefore always describe exactly the
/// events seen so far. Dropping the pathfinder at any point cancels the
/// search.
///
/// A pathfinder is single-use: once the terminal event has been yielded the
/// iterator stays exhausted.
pub struct Pathfinder<'g> {
    grid: &'g Grid,
    arena: Arena,
    open: OpenSet,
    nbuf: Neighbors,
    pending: VecDeque<Pending>,
    current: Option<Cell>,
    expanded: usize,
    /// Set once the terminal event has been queued.
    done: bool,
}

impl<'g> Pathfinder<'g> {
    /// Validate `grid` and prepare a search from its start to its end.
    ///
    /// No event is produced if the grid is invalid.
    pub fn new(grid: &'g Grid) -> Result<Self, InvalidGrid> {
        grid.validate()?;

        let from = grid.start();
        let to = grid.end();

        debug!(
            "astar: {} -> {} on {} grid ({} blocked)",
            from,
            to,
            grid.dims(),
            grid.blocked_count()
        );

        let mut pf = Self {
            grid,
            arena: Arena::new(),
            open: OpenSet::new(),
            nbuf: Neighbors::new(),
            pending: VecDeque::new(),
            current: None,
            expanded: 0,
            done: false,
        };

        if from == to {
            pf.current = Some(from);
            pf.finish(SearchEvent::Success {
                path: Path::new(vec![from]),
            });
            return Ok(pf);
        }

        pf.pending.push_back(Pending::Open {
            cell: from,
            g: 0,
            f: manhattan(from, to),
            parent: None,
        });
        Ok(pf)
    }

    /// Drain the remaining events and report whether a path was found.
    pub fn run(mut self) -> SearchOutcome {
        self.find_map(|event| match event {
            SearchEvent::Success { path } => Some(path),
            _ => None,
        })
        .map_or(SearchOutcome::NotFound, SearchOutcome::Found)
    }

    /// Perform one expansion, queueing the work it produces.
    ///
    /// Only called with an empty queue, so every earlier open-set update has
    /// already been applied.
    fn step(&mut self) {
        let entry = loop {
            let Some(entry) = self.open.pop() else {
                debug!(
                    "astar: no path to {} after {} expansions",
                    self.grid.end(),
                    self.expanded
                );
                self.finish(SearchEvent::Failure);
                return;
            };
            // Skip stale duplicates left behind by cost improvements.
            if self
                .arena
                .node(entry.cell)
                .is_some_and(|n| n.status == Status::Open && n.g == entry.g)
            {
                break entry;
            }
        };

        let cell = entry.cell;
        self.current = Some(cell);

        if cell == self.grid.end() {
            let path = Path::new(self.arena.trace(cell));
            debug!(
                "astar: reached {} in {} steps after {} expansions ({} heap entries left)",
                cell,
                path.cost(),
                self.expanded,
                self.open.len()
            );
            self.finish(SearchEvent::Success { path });
            return;
        }

        // Yielded by the same `next` call, so closing now stays in sync.
        self.arena.close(cell);
        self.expanded += 1;
        trace!("astar: expand {} g={} f={}", cell, entry.g, entry.f);
        self.pending.push_back(Pending::Emit(SearchEvent::Expanded { cell }));

        let grid = self.grid;
        let to = grid.end();
        let tentative_g = entry.g + 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        for &n in nbuf.cardinal(cell, |n| grid.is_walkable(n)) {
            match self.arena.node(n) {
                Some(node) if node.status == Status::Closed => continue,
                Some(node) if tentative_g >= node.g => continue,
                _ => {}
            }
            self.pending.push_back(Pending::Open {
                cell: n,
                g: tentative_g,
                f: tentative_g + manhattan(n, to),
                parent: Some(cell),
            });
        }
        self.nbuf = nbuf;
    }

    fn finish(&mut self, event: SearchEvent) {
        self.pending.push_back(Pending::Emit(event));
        self.done = true;
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.grid.start()
    }

    #[inline]
    pub fn end(&self) -> Cell {
        self.grid.end()
    }

    /// Whether every event, the terminal one included, has been yielded.
    pub fn is_finished(&self) -> bool {
        self.done && self.pending.is_empty()
    }

    /// Number of `Expanded` events yielded so far.
    pub fn expanded_count(&self) -> usize {
        self.expanded
    }

    /// Cells currently in the open set, sorted row-major. Stale heap
    /// duplicates are not reported.
    pub fn open_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .open
            .iter()
            .filter(|e| {
                self.arena
                    .node(e.cell)
                    .is_some_and(|n| n.status == Status::Open && n.g == e.g)
            })
            .map(|e| e.cell)
            .collect();
        cells.sort_unstable();
        cells
    }

    /// Cells whose cost is final, in row-major order.
    pub fn closed_cells(&self) -> Vec<Cell> {
        self.arena.cells_with(Status::Closed)
    }

    pub fn is_open(&self, c: Cell) -> bool {
        self.arena.status(c) == Status::Open
    }

    pub fn is_closed(&self, c: Cell) -> bool {
        self.arena.status(c) == Status::Closed
    }

    /// Best known cost from the start to `c`, or `None` if not reached yet.
    pub fn g_score(&self, c: Cell) -> Option<i32> {
        self.arena.g(c)
    }

    /// `g + manhattan(c, end)` for a reached cell.
    pub fn f_score(&self, c: Cell) -> Option<i32> {
        self.arena.node(c).map(|n| n.f)
    }

    /// The cell most recently taken off the open set.
    pub fn current(&self) -> Option<Cell> {
        self.current
    }

    /// Predecessor chain from the start to [`current`](Self::current).
    ///
    /// Before any cell has been popped this is empty; once the end has been
    /// reached it equals the final path.
    pub fn partial_path(&self) -> Vec<Cell> {
        self.current.map_or_else(Vec::new, |c| self.arena.trace(c))
    }
}

impl Iterator for Pathfinder<'_> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        if self.pending.is_empty() && !self.done {
            self.step();
        }
        match self.pending.pop_front()? {
            Pending::Emit(event) => Some(event),
            Pending::Open { cell, g, f, parent } => {
                self.arena.open(cell, g, f, parent);
                self.open.push(cell, f, g);
                Some(SearchEvent::Frontier { cell })
            }
        }
    }
}

impl FusedIterator for Pathfinder<'_> {}

/// Start a search over `grid`. Shorthand for [`Pathfinder::new`].
pub fn search(grid: &Grid) -> Result<Pathfinder<'_>, InvalidGrid> {
    Pathfinder::new(grid)
}

/// Run a search to completion and return the shortest path, if any.
pub fn find_path(grid: &Grid) -> Result<Option<Path>, InvalidGrid> {
    Ok(Pathfinder::new(grid)?.run().into_path())
}
