use std::fmt;
use std::io;
use std::path::PathBuf;

use gridstar_core::InvalidGrid;

/// Errors raised while turning files on disk into a searchable grid.
#[derive(Debug)]
pub enum LoadError {
    /// A file could not be read or written.
    Io { path: PathBuf, source: io::Error },
    /// The config file is not valid JSON for [`DemoConfig`](crate::DemoConfig).
    Config(serde_json::Error),
    /// The loaded coordinates do not form a valid grid.
    Grid(InvalidGrid),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<InvalidGrid> for LoadError {
    fn from(e: InvalidGrid) -> Self {
        Self::Grid(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}
