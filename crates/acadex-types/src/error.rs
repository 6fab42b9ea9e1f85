use std::fmt;

/// Result type for acadex-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Value is not a recognized user role
    InvalidRole(String),
    /// Value is not a recognized course level
    InvalidLevel(String),
    /// Value is not a recognized catalog level name
    InvalidCatalogLevel(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRole(value) => {
                write!(f, "invalid role '{}' (expected member, exec or admin)", value)
            }
            Error::InvalidLevel(value) => {
                write!(f, "invalid course level '{}' (expected 100..700)", value)
            }
            Error::InvalidCatalogLevel(value) => {
                write!(
                    f,
                    "invalid catalog level '{}' (expected college, department, course or subject)",
                    value
                )
            }
        }
    }
}

impl std::error::Error for Error {}
