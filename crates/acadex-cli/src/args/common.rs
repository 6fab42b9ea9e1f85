use clap::Args;

/// Pagination flags shared by every list command. `--limit` falls back to
/// `[output].page_size` from config.toml when omitted.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    #[arg(long, default_value = "1", help = "Page number (1-based)")]
    pub page: u64,

    #[arg(long, help = "Items per page")]
    pub limit: Option<u64>,
}

/// Catalog scope for tutorial commands. Exactly one of the three must be
/// given; `--path` walks the catalog hierarchy and uses the deepest segment.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct ScopeArgs {
    #[arg(long, help = "Subject id")]
    pub subject: Option<String>,

    #[arg(long, help = "Course id")]
    pub course: Option<String>,

    #[arg(long, help = "Catalog path, e.g. 'ENG/CSE/CSC101/Algorithms'")]
    pub path: Option<String>,
}

/// Subject selection for quiz commands: a raw id or a catalog path that
/// resolves down to a subject.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct SubjectScopeArgs {
    #[arg(long, help = "Subject id")]
    pub subject: Option<String>,

    #[arg(long, help = "Catalog path ending at a subject")]
    pub path: Option<String>,
}
