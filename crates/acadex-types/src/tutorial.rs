use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ParentRef;

/// Uploaded tutorial PDF.
///
/// New records are scoped to a subject; older ones are scoped directly to
/// a course, so both references are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialFile {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<ParentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<ParentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl TutorialFile {
    /// The reference this file is scoped to, subject first.
    pub fn scope(&self) -> Option<&ParentRef> {
        self.subject.as_ref().or(self.course.as_ref())
    }
}
