use std::fmt;

use gridstar_core::Cell;

/// An ordered run of cells from a search's start to its end, both included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Cell>);

impl Path {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for paths produced by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of unit steps: one less than [`len`](Self::len).
    pub fn cost(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.0.contains(&c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Cell> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// One observable step of a search, in the order the search performs it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// `cell` left the open set and its cost is final.
    Expanded { cell: Cell },
    /// `cell` entered the open set, or its cost improved.
    Frontier { cell: Cell },
    /// The end was reached. Always the last event.
    Success { path: Path },
    /// The open set ran dry without reaching the end. Always the last event.
    Failure,
}

impl SearchEvent {
    /// Whether no further events follow this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Failure)
    }

    /// The cell an `Expanded` or `Frontier` event refers to.
    pub fn cell(&self) -> Option<Cell> {
        match self {
            Self::Expanded { cell } | Self::Frontier { cell } => Some(*cell),
            Self::Success { .. } | Self::Failure => None,
        }
    }
}

/// Result of driving a search to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
}

impl SearchOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_round_trip() {
        let events = vec![
            SearchEvent::Frontier {
                cell: Cell::new(0, 0),
            },
            SearchEvent::Expanded {
                cell: Cell::new(0, 0),
            },
            SearchEvent::Success {
                path: Path::new(vec![Cell::new(0, 0), Cell::new(0, 1)]),
            },
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<SearchEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }
}
