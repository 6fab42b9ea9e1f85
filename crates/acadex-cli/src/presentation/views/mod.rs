pub mod auth;
pub mod catalog;
pub mod chat;
pub mod common;
pub mod init;
pub mod quiz;
pub mod stats;
pub mod tutorial;
pub mod users;
