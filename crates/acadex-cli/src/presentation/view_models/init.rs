use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InitViewModel {
    pub config_path: String,
    pub server: String,
    pub created: bool,
}
