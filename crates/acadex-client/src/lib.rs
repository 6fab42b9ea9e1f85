//! acadex-client: typed async client for the acadex backend API.
//!
//! # Overview
//!
//! One [`Client`] per process, built from a [`ServerConfig`] and an
//! optional bearer token taken from the saved [`Session`]. Endpoints are
//! grouped behind accessor structs (`client.users()`, `client.catalog()`,
//! ...) so call sites read like the API tree.
//!
//! # Quickstart
//!
//! ```no_run
//! use acadex_client::{Client, ServerConfig, Session};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let server = ServerConfig::new("https://api.example.edu");
//! let session = Session::load(std::path::Path::new("/tmp/acadex"))?;
//! let client = Client::new(&server, session.map(|s| s.token))?;
//!
//! let colleges = client.catalog().colleges().await?;
//! println!("{} colleges", colleges.len());
//! # Ok(())
//! # }
//! ```
//!
//! List endpoints normalize both response shapes the backend produces
//! (bare array, or `{data, pagination}`) into `Page<T>`. Mutations return
//! `()` on success; callers refetch when they need fresh state, which is
//! what the server's own clients do.

pub mod api;
pub mod client;
pub mod error;
pub mod session;

pub use api::{
    AiApi, AuthApi, CatalogApi, NewCollege, NewCourse, NewDepartment, NewQuiz, NewSubject, QuizApi,
    QuizQuery, QuizUpdate, RegisterRequest, TutorialApi, TutorialQuery, TutorialScope, UserQuery,
    UsersApi,
};
pub use client::{Client, DEFAULT_BASE_URL, ServerConfig};
pub use error::{Error, Result};
pub use session::Session;
