//! Demo configuration, loaded from JSON.

use std::path::{Path, PathBuf};

use gridstar_core::{Cell, Dims};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Settings for one demo run. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Grid size.
    pub dims: Dims,
    /// Blocked cells, one `x,y` or `x y` per line.
    pub obstacle_file: PathBuf,
    /// Start on the first line, end on the second, both `x,y`.
    pub points_file: PathBuf,
    /// Used when the points file is missing or unreadable.
    pub default_start: Cell,
    pub default_end: Cell,
    /// Stop pulling events after this many (unbounded when absent).
    pub max_steps: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dims: Dims::new(65, 80),
            obstacle_file: PathBuf::from("data/obstacles.txt"),
            points_file: PathBuf::from("data/points.txt"),
            default_start: Cell::new(15, 64),
            default_end: Cell::new(51, 6),
            max_steps: None,
        }
    }
}

impl DemoConfig {
    /// Read a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn partial_override() {
        let cfg = DemoConfig::from_json(
            r#"{ "dims": { "rows": 10, "cols": 12 }, "max_steps": 50 }"#,
        )
        .unwrap();
        assert_eq!(cfg.dims, Dims::new(10, 12));
        assert_eq!(cfg.max_steps, Some(50));
        assert_eq!(cfg.points_file, PathBuf::from("data/points.txt"));
    }

    #[test]
    fn bad_json_is_config_error() {
        let err = DemoConfig::from_json("{ dims: ").unwrap_err();
        assert!(matches!(err, LoadError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DemoConfig::load(Path::new("/nonexistent/gridstar.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("/nonexistent/gridstar.json: "));
    }
}
