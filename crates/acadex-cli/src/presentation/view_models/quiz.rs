use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QuizRowViewModel {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizListViewModel {
    pub quizzes: Vec<QuizRowViewModel>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CsvIssueViewModel {
    pub line: u64,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerImportViewModel {
    pub total: u64,
    pub inserted: u64,
    pub skipped: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Outcome of `quiz import`. When the CSV fails local validation
/// `server_report` stays `None` and `issues` carries the line-numbered
/// problems; nothing was sent over the network in that case.
#[derive(Debug, Clone, Serialize)]
pub struct QuizImportViewModel {
    pub quiz_id: String,
    pub file: String,
    pub dry_run: bool,
    pub rows: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<CsvIssueViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_report: Option<ServerImportViewModel>,
}
