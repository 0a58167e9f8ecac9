//! Reading and writing the map editor's coordinate files.
//!
//! Files store screen-style `x,y` pairs where `x` is the column and `y` is
//! the row. Obstacle lines may use a comma or whitespace as separator.

use std::io;
use std::path::Path;

use gridstar_core::{Cell, Dims, Grid, InvalidGrid};
use log::{debug, warn};

use crate::error::LoadError;

/// Parse one `x,y` / `x y` pair. Fields beyond the second are ignored.
fn parse_pair(line: &str) -> Option<Result<Cell, String>> {
    let mut parts: Vec<&str> = if line.contains(',') {
        line.split(',').collect()
    } else {
        line.split_whitespace().collect()
    };
    if parts.len() < 2 {
        return None;
    }
    parts.truncate(2);
    let x = parts[0].trim().parse::<i32>();
    let y = parts[1].trim().parse::<i32>();
    Some(match (x, y) {
        (Ok(x), Ok(y)) => Ok(Cell::new(y, x)),
        _ => Err(line.to_string()),
    })
}

/// Parse an obstacle file. Blank and short lines are skipped silently;
/// lines that do not hold two integers are skipped with a warning.
pub fn parse_obstacles(text: &str) -> Vec<Cell> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_pair)
        .filter_map(|res| match res {
            Ok(c) => Some(c),
            Err(line) => {
                warn!("skipping obstacle line {line:?}: not two integers");
                None
            }
        })
        .collect()
}

/// Parse a points file: start on the first line, end on the second.
pub fn parse_points(text: &str) -> Option<(Cell, Cell)> {
    let mut lines = text.lines();
    let start = lines.next()?;
    let end = lines.next()?;
    let point = |line: &str| {
        let (x, y) = line.trim().split_once(',')?;
        let y = y.split(',').next()?;
        Some(Cell::new(y.trim().parse().ok()?, x.trim().parse().ok()?))
    };
    Some((point(start)?, point(end)?))
}

/// Read an obstacle file. A missing file means no obstacles.
pub fn load_obstacles(path: &Path) -> Result<Vec<Cell>, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(parse_obstacles(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, starting without obstacles", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(LoadError::io(path, e)),
    }
}

/// Read a points file. Any failure yields `None` so callers fall back to
/// their defaults.
pub fn load_points(path: &Path) -> Option<(Cell, Cell)> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("cannot read points from {}: {e}", path.display());
            return None;
        }
    };
    let points = parse_points(&text);
    if points.is_none() {
        warn!("{} does not hold two x,y lines", path.display());
    }
    points
}

/// Render obstacles as `x,y` lines ordered by column, then row.
pub fn format_obstacles(cells: impl IntoIterator<Item = Cell>) -> String {
    let mut pairs: Vec<(i32, i32)> = cells.into_iter().map(|c| (c.col, c.row)).collect();
    pairs.sort_unstable();
    pairs.dedup();
    pairs.iter().map(|(x, y)| format!("{x},{y}\n")).collect()
}

/// Render the start and end as two `x,y` lines.
pub fn format_points(start: Cell, end: Cell) -> String {
    format!("{},{}\n{},{}\n", start.col, start.row, end.col, end.row)
}

/// Save obstacles in the format [`load_obstacles`] reads.
pub fn write_obstacles(
    path: &Path,
    cells: impl IntoIterator<Item = Cell>,
) -> Result<(), LoadError> {
    let text = format_obstacles(cells);
    std::fs::write(path, &text).map_err(|e| LoadError::io(path, e))?;
    debug!("saved {} obstacles to {}", text.lines().count(), path.display());
    Ok(())
}

/// Save the endpoints in the format [`load_points`] reads.
pub fn write_points(path: &Path, start: Cell, end: Cell) -> Result<(), LoadError> {
    std::fs::write(path, format_points(start, end)).map_err(|e| LoadError::io(path, e))?;
    debug!("saved start {start} and end {end} to {}", path.display());
    Ok(())
}

/// Assemble a validated grid the way the editor's files are meant to be
/// read: obstacles off the map are dropped and the endpoints are always
/// walkable.
pub fn build_grid(
    dims: Dims,
    obstacles: impl IntoIterator<Item = Cell>,
    start: Cell,
    end: Cell,
) -> Result<Grid, InvalidGrid> {
    let mut grid = Grid::new(dims, start, end);
    for c in obstacles {
        if dims.contains(c) {
            grid.block(c);
        } else {
            warn!("dropping obstacle {c} outside {dims} grid");
        }
    }
    grid.unblock(start);
    grid.unblock(end);
    grid.validate()?;
    Ok(grid)
}
