use gridstar_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// The exact step count between two cells on an open 4-connected grid, so it
/// never overestimates and is consistent across single steps.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
