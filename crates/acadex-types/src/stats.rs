use serde::{Deserialize, Serialize};

/// Platform-wide record counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub courses: u64,
    #[serde(default)]
    pub subjects: u64,
    #[serde(default)]
    pub quizzes: u64,
    #[serde(default)]
    pub pdfs: u64,
}
