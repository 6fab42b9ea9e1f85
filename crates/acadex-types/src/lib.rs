pub mod catalog;
pub mod chat;
pub mod error;
pub mod page;
pub mod quiz;
pub mod stats;
pub mod tutorial;
pub mod user;

pub use catalog::*;
pub use chat::*;
pub use error::{Error, Result};
pub use page::*;
pub use quiz::*;
pub use stats::*;
pub use tutorial::*;
pub use user::*;
