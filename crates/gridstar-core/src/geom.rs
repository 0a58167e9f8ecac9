//! Geometry primitives: [`Cell`] and [`Dims`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid position addressed by row and column. Rows grow down, columns grow
/// right.
///
/// Coordinates are signed so that a neighbour stepped off the edge of a grid
/// is still a valid value; bounds are checked by [`Dims::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in the order right, left, down, up.
    ///
    /// Cells outside any particular grid are included; callers filter them.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(0, 1),
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(-1, 0),
        ]
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid cells lie in `[0, rows) × [0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells. Zero when either side is non-positive.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let rows = self.rows.max(0);
        let cols = self.cols.max(0);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(1, 2);
        let b = Cell::new(3, 4);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(b - a, Cell::new(2, 2));
        assert_eq!(a.shift(-1, 1), Cell::new(0, 3));
    }

    #[test]
    fn neighbors_order() {
        let n = Cell::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Cell::new(5, 6),
                Cell::new(5, 4),
                Cell::new(6, 5),
                Cell::new(4, 5),
            ]
        );
        assert!(n.iter().all(|&c| c.is_adjacent(Cell::new(5, 5))));
        assert!(!Cell::new(0, 0).is_adjacent(Cell::new(1, 1)));
    }

    #[test]
    fn cell_hash_and_ord() {
        let set: HashSet<Cell> = [Cell::new(1, 1), Cell::new(1, 1), Cell::new(0, 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, -1).to_string(), "(3, -1)");
        assert_eq!(Dims::new(65, 80).to_string(), "65x80");
    }

    #[test]
    fn dims_contains() {
        let d = Dims::new(2, 3);
        assert_eq!(d.len(), 6);
        assert!(d.contains(Cell::new(0, 0)));
        assert!(d.contains(Cell::new(1, 2)));
        assert!(!d.contains(Cell::new(2, 0)));
        assert!(!d.contains(Cell::new(0, 3)));
        assert!(!d.contains(Cell::new(-1, 0)));
    }

    #[test]
    fn dims_empty() {
        assert!(Dims::new(0, 5).is_empty());
        assert!(Dims::new(4, -1).is_empty());
        assert_eq!(Dims::new(-3, 3).len(), 0);
        assert_eq!(Dims::new(0, 5).cells().count(), 0);
    }

    #[test]
    fn cells_are_row_major() {
        let d = Dims::new(2, 3);
        let cells: Vec<Cell> = d.cells().collect();
        assert_eq!(cells.len(), d.len());
        assert_eq!(cells[..4], [(0, 0), (0, 1), (0, 2), (1, 0)].map(Cell::from));
        assert!(cells.windows(2).all(|w| w[0] < w[1]));
    }
}
