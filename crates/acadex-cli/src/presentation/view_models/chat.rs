use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AskViewModel {
    pub model: String,
    pub prompt: String,
    pub reply: String,
}
