//! Driving a search under a step budget and summarising it as text.

use std::fmt;

use gridstar_core::{Cell, Grid, InvalidGrid};
use gridstar_paths::{Path, Pathfinder, SearchEvent, SearchOutcome};

const BLOCKED: char = '#';
const OPEN: char = 'o';
const CLOSED: char = 'x';
const ON_PATH: char = '*';
const FREE: char = '.';

/// Summary of one (possibly truncated) search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub events: usize,
    pub frontier: usize,
    pub expanded: usize,
    /// `None` when the step budget ran out before a terminal event.
    pub outcome: Option<SearchOutcome>,
    /// Character map of the state the search stopped in.
    pub map: String,
}

/// Pull events from a search over `grid`, stopping after `max_steps` events
/// if a budget is given.
pub fn drive(grid: &Grid, max_steps: Option<usize>) -> Result<Report, InvalidGrid> {
    let mut pf = Pathfinder::new(grid)?;
    let budget = max_steps.unwrap_or(usize::MAX);

    let mut events = 0;
    let mut frontier = 0;
    let mut expanded = 0;
    let mut outcome = None;

    while events < budget {
        let Some(event) = pf.next() else { break };
        events += 1;
        match event {
            SearchEvent::Frontier { .. } => frontier += 1,
            SearchEvent::Expanded { .. } => expanded += 1,
            SearchEvent::Success { path } => outcome = Some(SearchOutcome::Found(path)),
            SearchEvent::Failure => outcome = Some(SearchOutcome::NotFound),
        }
    }

    let map = render_map(&pf, outcome.as_ref().and_then(SearchOutcome::path));
    Ok(Report {
        events,
        frontier,
        expanded,
        outcome,
        map,
    })
}

/// Draw the search state one character per cell, one line per row.
///
/// While the search is still running, the tentative chain to the current
/// cell is drawn in place of a final path.
pub fn render_map(pf: &Pathfinder<'_>, path: Option<&Path>) -> String {
    let grid = pf.grid();
    let tentative = if pf.is_finished() {
        Vec::new()
    } else {
        pf.partial_path()
    };
    let on_path = |c: Cell| match path {
        Some(p) => p.contains(c),
        None => tentative.contains(&c),
    };

    let mut out = String::with_capacity(grid.dims().len() + grid.rows().max(0) as usize);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let c = Cell::new(row, col);
            let ch = if c == grid.start() {
                'S'
            } else if c == grid.end() {
                'E'
            } else if on_path(c) {
                ON_PATH
            } else if grid.is_blocked(c) {
                BLOCKED
            } else if pf.is_closed(c) {
                CLOSED
            } else if pf.is_open(c) {
                OPEN
            } else {
                FREE
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.map)?;
        writeln!(
            f,
            "{} events: {} frontier, {} expanded",
            self.events, self.frontier, self.expanded
        )?;
        match &self.outcome {
            Some(SearchOutcome::Found(path)) => {
                write!(f, "path found: {} cells, {} steps", path.len(), path.cost())
            }
            Some(SearchOutcome::NotFound) => write!(f, "no path"),
            None => write!(f, "stopped before the search finished"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Dims;

    fn corridor() -> Grid {
        Grid::new(Dims::new(3, 4), Cell::new(0, 0), Cell::new(2, 3))
            .with_blocked([Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)])
    }

    #[test]
    fn full_run_draws_path() {
        let report = drive(&corridor(), None).unwrap();
        assert_eq!(
            report.outcome.as_ref().and_then(SearchOutcome::path).map(Path::len),
            Some(6)
        );
        assert_eq!(report.map, "S***\n###*\n...E\n");
        assert_eq!(report.events, report.frontier + report.expanded + 1);
        assert!(report.to_string().ends_with("path found: 6 cells, 5 steps"));
    }

    #[test]
    fn budget_stops_early() {
        let report = drive(&corridor(), Some(2)).unwrap();
        assert_eq!(report.events, 2);
        assert_eq!(report.outcome, None);
        // Frontier(start) then Expanded(start); (0, 1) is not drawn until
        // its Frontier event has been pulled.
        assert_eq!(report.expanded, 1);
        assert_eq!(report.map, "S...\n###.\n...E\n");
        assert!(report.to_string().ends_with("stopped before the search finished"));

        let report = drive(&corridor(), Some(3)).unwrap();
        assert_eq!(report.frontier, 2);
        assert_eq!(report.map, "So..\n###.\n...E\n");
    }

    #[test]
    fn unreachable_reports_no_path() {
        let g = corridor().with_blocked([Cell::new(1, 3)]);
        let report = drive(&g, None).unwrap();
        assert_eq!(report.outcome, Some(SearchOutcome::NotFound));
        assert_eq!(report.map, "Sxxx\n####\n...E\n");
    }

    #[test]
    fn invalid_grid_propagates() {
        let g = corridor().with_blocked([Cell::new(2, 3)]);
        assert_eq!(drive(&g, None), Err(InvalidGrid::EndBlocked(Cell::new(2, 3))));
    }
}
