use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatsViewModel {
    pub server: String,
    pub users: u64,
    pub courses: u64,
    pub subjects: u64,
    pub quizzes: u64,
    pub pdfs: u64,
}
