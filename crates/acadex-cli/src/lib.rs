// NOTE: acadex Architecture Rationale
//
// Why a thin client (not a local mirror of the catalog)?
// - The Express backend owns all writes and validation; mirroring records locally
//   creates sync issues for no benefit at admin-console scale
// - Every command round-trips to the API, so output always reflects server state
// - Trade-off: commands need a reachable server, but `--server` plus config.toml
//   make switching deployments trivial
//
// Why one cascade engine for every catalog pick?
// - College → Department → Course → Subject is the same parent/child walk whether
//   it runs in the TUI, behind `catalog resolve`, or inside `quiz create --path`
// - A single state machine (acadex-core::cascade) means the clearing and staleness
//   rules are enforced once instead of re-implemented per screen
// - Trade-off: the engine is index-driven and a little abstract, but screens stay
//   declarative
//
// Why explicit session state (not ambient globals)?
// - The bearer token lives in one place (credentials.toml under the data dir) and
//   is loaded into the Client at construction
// - Handlers receive an ExecutionContext; nothing reads authentication out of
//   process-global state, which keeps tests hermetic
//
// Why local CSV validation before upload?
// - Question banks are bulk-imported; rejecting a malformed file before the
//   network round-trip gives line-numbered errors and keeps --dry-run offline
//   when the file cannot be accepted anyway

mod args;
mod commands;
pub mod config;
pub mod context;
pub mod presentation;
mod handlers;

pub use args::{
    CatalogCommand, Cli, Commands, QuizCommand, TutorialCommand, UserCommand,
};
pub use commands::run;
