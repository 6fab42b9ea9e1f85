use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Transport failure: connection, timeout, TLS.
    Http(reqwest::Error),
    /// Missing or rejected token. Split from `Status` so handlers can
    /// point the user at `acadex login`.
    Unauthorized(String),
    /// Any other non-success status, with the server's message when the
    /// body carried one.
    Status { status: u16, message: String },
    /// 2xx body that did not decode as the expected shape.
    Decode(String),
    /// The backend answered 200 but reported a failure in-band
    /// (the AI relay does this).
    Backend(String),
    /// Credential store could not be read or written.
    Session(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "request failed: {}", err),
            Error::Unauthorized(message) => write!(f, "unauthorized: {}", message),
            Error::Status { status, message } => write!(f, "server error ({}): {}", status, message),
            Error::Decode(message) => write!(f, "unexpected response shape: {}", message),
            Error::Backend(message) => write!(f, "backend reported: {}", message),
            Error::Session(message) => write!(f, "session error: {}", message),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
