pub mod cascade;
pub mod error;
pub mod questions;
pub mod source;

pub use cascade::{CascadeState, FetchOutcome, FetchTicket};
pub use error::{Error, Result};
pub use questions::{CsvIssue, CsvReport};
pub use source::{CatalogSource, FetchResult, ResolvedPath, ResolvedSegment, resolve_path};
