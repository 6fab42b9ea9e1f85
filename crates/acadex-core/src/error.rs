use acadex_types::CatalogLevel;
use std::fmt;

/// Result type for acadex-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the core layer
#[derive(Debug)]
pub enum Error {
    /// Selection attempted at a level whose parent is unselected
    LevelDisabled(CatalogLevel),
    /// Selection id is not among the loaded options for the level
    UnknownOption { level: CatalogLevel, id: String },
    /// Catalog path has no segments or more than four
    PathShape(String),
    /// A path segment matched nothing at its level
    PathSegment { level: CatalogLevel, segment: String },
    /// The catalog source failed while resolving a path
    Source(String),
    /// CSV parsing failed before validation could start
    Csv(csv::Error),
    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LevelDisabled(level) => {
                write!(f, "cannot select a {} before its parent level", level)
            }
            Error::UnknownOption { level, id } => {
                write!(f, "'{}' is not among the loaded {} options", id, level)
            }
            Error::PathShape(msg) => write!(f, "invalid catalog path: {}", msg),
            Error::PathSegment { level, segment } => {
                write!(f, "no {} matches '{}'", level, segment)
            }
            Error::Source(msg) => write!(f, "catalog fetch failed: {}", msg),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
