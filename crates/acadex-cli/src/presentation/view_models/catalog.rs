use serde::Serialize;

/// One row in a catalog listing. The same shape serves all four levels:
/// colleges put their abbreviation in `code`, courses put their title in
/// `name` and their level in `detail`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntryViewModel {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogListViewModel {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub entries: Vec<CatalogEntryViewModel>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogCreatedViewModel {
    pub level: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSegmentViewModel {
    pub level: String,
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPathViewModel {
    pub path: String,
    pub segments: Vec<ResolvedSegmentViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
}
