use std::fmt;

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod common;
pub mod console;
pub mod init;
pub mod quiz;
pub mod result;
pub mod stats;
pub mod tutorial;
pub mod user;

pub use auth::*;
pub use catalog::*;
pub use chat::*;
pub use common::*;
pub use console::*;
pub use init::*;
pub use quiz::*;
pub use result::*;
pub use stats::*;
pub use tutorial::*;
pub use user::*;

/// Bridge from a view model to its text rendering.
///
/// View models stay pure data; the boxed `Display` returned here lives in
/// `views/` and owns all layout and styling decisions.
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
