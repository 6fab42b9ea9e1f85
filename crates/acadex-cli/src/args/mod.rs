// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not flat)?
// - Flat command structures become unwieldy past ~10 commands
// - Namespaces (user, catalog, quiz, tutorial) group related operations
// - Improves --help discoverability and conceptual clarity
// - Example: `quiz create` vs `quiz import` vs flat `create-quiz` and `import-questions`
//
// Why top-level auth verbs (not an `auth` namespace)?
// - `acadex login` / `acadex logout` / `acadex whoami` are the first commands
//   anyone types; burying them under a namespace adds friction for no grouping win

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "acadex")]
#[command(about = "Administer the acadex learning platform from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: ~/.acadex)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Server base URL (overrides config.toml)")]
    pub server: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
