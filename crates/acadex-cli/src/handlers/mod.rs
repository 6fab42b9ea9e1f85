mod context;

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod console;
pub mod init;
pub mod quiz;
pub mod stats;
pub mod tutorial;
pub mod users;

pub use context::HandlerContext;

use acadex_client::Error;
use anyhow::anyhow;

/// Map client errors to something actionable on the command line. The
/// important case: an expired or missing token should say "log in", not
/// dump an HTTP status.
pub(crate) fn describe(err: Error) -> anyhow::Error {
    match err {
        Error::Unauthorized(message) => {
            anyhow!("unauthorized: {} (run 'acadex login' first)", message)
        }
        other => anyhow!(other),
    }
}
