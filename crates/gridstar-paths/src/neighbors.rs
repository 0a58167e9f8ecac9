use gridstar_core::Cell;

/// Reusable buffer for orthogonal neighbour enumeration.
pub(crate) struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbours of `c` for which `keep` returns
    /// `true`, in the order of [`Cell::neighbors_4`].
    pub(crate) fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Dims;

    #[test]
    fn corner_filters_out_of_bounds() {
        let dims = Dims::new(3, 3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Cell::new(0, 0), |n| dims.contains(n));
        assert_eq!(got, &[Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn buffer_is_reused() {
        let mut nb = Neighbors::default();
        assert_eq!(nb.cardinal(Cell::new(5, 5), |_| true).len(), 4);
        assert!(nb.cardinal(Cell::new(5, 5), |_| false).is_empty());
    }
}
