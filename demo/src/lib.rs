//! Command-line driver for gridstar.
//!
//! Loads the map editor's obstacle and points files into a
//! [`gridstar_core::Grid`], runs a search over it and summarises the
//! result as a character map.

pub mod config;
pub mod error;
pub mod loader;
pub mod report;

pub use config::DemoConfig;
pub use error::LoadError;
pub use report::{Report, drive, render_map};

use gridstar_core::Grid;

/// Build the grid described by `config`, reading its files.
///
/// Falls back to the configured default endpoints when the points file is
/// missing or malformed.
pub fn load_grid(config: &DemoConfig) -> Result<Grid, LoadError> {
    let obstacles = loader::load_obstacles(&config.obstacle_file)?;
    let (start, end) = loader::load_points(&config.points_file)
        .unwrap_or((config.default_start, config.default_end));
    Ok(loader::build_grid(config.dims, obstacles, start, end)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::{Cell, Dims};
    use gridstar_paths::SearchOutcome;

    #[test]
    fn load_and_drive() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig {
            dims: Dims::new(4, 4),
            obstacle_file: dir.path().join("obstacles.txt"),
            points_file: dir.path().join("points.txt"),
            ..DemoConfig::default()
        };
        // Wall along column 1, open at the bottom.
        std::fs::write(&config.obstacle_file, "1,0\n1,1\n1,2\n").unwrap();
        std::fs::write(&config.points_file, "0,0\n2,0\n").unwrap();

        let grid = load_grid(&config).unwrap();
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.end(), Cell::new(0, 2));

        let report = drive(&grid, None).unwrap();
        let Some(SearchOutcome::Found(path)) = report.outcome else {
            panic!("expected a path");
        };
        assert_eq!(path.len(), 9);
        assert!(path.contains(Cell::new(3, 1)));
    }

    #[test]
    fn defaults_apply_without_points() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig {
            obstacle_file: dir.path().join("missing-obstacles.txt"),
            points_file: dir.path().join("missing-points.txt"),
            ..DemoConfig::default()
        };
        let grid = load_grid(&config).unwrap();
        assert_eq!(grid.start(), config.default_start);
        assert_eq!(grid.end(), config.default_end);
        assert_eq!(grid.blocked_count(), 0);
    }

    #[test]
    fn endpoints_off_the_map_are_grid_errors() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig {
            dims: Dims::new(5, 5),
            obstacle_file: dir.path().join("obstacles.txt"),
            points_file: dir.path().join("points.txt"),
            ..DemoConfig::default()
        };
        std::fs::write(&config.points_file, "0,0\n9,9\n").unwrap();
        let err = load_grid(&config).unwrap_err();
        assert!(matches!(err, LoadError::Grid(_)));
    }
}
