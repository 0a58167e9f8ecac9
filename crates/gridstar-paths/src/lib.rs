//! A* pathfinding on 4-connected grids, one observable step at a time.
//!
//! [`Pathfinder`] runs A* with the Manhattan heuristic over a
//! [`gridstar_core::Grid`] and yields its progress as a lazy stream of
//! [`SearchEvent`]s, so a renderer can pace the search frame by frame:
//!
//! - [`SearchEvent::Frontier`]: a cell entered the open set or got cheaper
//! - [`SearchEvent::Expanded`]: a cell moved to the closed set
//! - [`SearchEvent::Success`]: the final [`Path`]
//! - [`SearchEvent::Failure`]: the end is unreachable
//!
//! Ordering is fully deterministic: the open set pops the lowest `f`, then
//! the lowest `g`, then the earliest insertion, and neighbours are visited in
//! a fixed order. The same grid always produces the same event stream.
//!
//! ```
//! use gridstar_core::{Cell, Dims, Grid};
//! use gridstar_paths::{SearchEvent, search};
//!
//! let grid = Grid::new(Dims::new(3, 3), Cell::new(0, 0), Cell::new(2, 2));
//! let last = search(&grid).unwrap().last();
//! match last {
//!     Some(SearchEvent::Success { path }) => assert_eq!(path.len(), 5),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod arena;
mod astar;
mod distance;
mod event;
mod neighbors;
mod open_set;

pub use astar::{Pathfinder, find_path, search};
pub use distance::manhattan;
pub use event::{Path, SearchEvent, SearchOutcome};
