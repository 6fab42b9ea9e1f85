//! Testing infrastructure for acadex integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory plus configured CLI execution
//! - `assertions`: checks over the JSON command envelope
//! - `fixtures`: canned question-bank CSVs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
