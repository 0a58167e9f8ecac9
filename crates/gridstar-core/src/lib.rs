//! **gridstar-core**: value types for grid pathfinding.
//!
//! This crate provides the types shared by the search and its callers:
//! grid coordinates ([`Cell`]), dimensions ([`Dims`]), the obstacle map with
//! its start/end pair ([`Grid`]), and the precondition error ([`InvalidGrid`]).

pub mod error;
pub mod geom;
pub mod grid;

pub use error::InvalidGrid;
pub use geom::{Cell, Dims};
pub use grid::Grid;
