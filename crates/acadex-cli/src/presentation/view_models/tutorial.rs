use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TutorialRowViewModel {
    pub id: String,
    pub title: String,
    pub published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorialListViewModel {
    pub scope: String,
    pub files: Vec<TutorialRowViewModel>,
    pub total: u64,
    pub page: u64,
    pub pages: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorialUploadViewModel {
    pub title: String,
    pub scope: String,
    pub file: String,
    pub bytes: usize,
}
