use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ParentRef;

/// Quiz attached to a subject.
///
/// The backend has answered both `active` and `isActive` over time; the
/// alias keeps old payloads decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subject: ParentRef,
    #[serde(default = "default_active", alias = "isActive")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Server-side report for a question CSV import (dry run or committed).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub inserted: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_accepts_is_active_alias() {
        let quiz: Quiz = serde_json::from_str(
            r#"{"_id":"q1","title":"Week 1","subject":"s1","isActive":false}"#,
        )
        .unwrap();
        assert!(!quiz.active);
        assert_eq!(quiz.subject.id(), "s1");
    }
}
