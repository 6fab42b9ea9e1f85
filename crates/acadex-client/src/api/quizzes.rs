use reqwest::{Method, multipart};
use serde::Serialize;

use acadex_types::{ImportReport, Page, Quiz};

use crate::client::Client;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct QuizQuery {
    pub q: Option<String>,
    pub active: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl QuizQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Serialize)]
pub struct NewQuiz<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub subject: &'a str,
}

/// Partial update; only the set fields are sent.
#[derive(Debug, Default, Serialize)]
pub struct QuizUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'a str>,
}

impl QuizUpdate<'_> {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.subject.is_none()
    }
}

#[derive(Serialize)]
struct ActiveBody {
    #[serde(rename = "isActive")]
    is_active: bool,
}

pub struct QuizApi<'a> {
    client: &'a Client,
}

impl<'a> QuizApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        QuizApi { client }
    }

    pub async fn list(&self, query: &QuizQuery) -> Result<Page<Quiz>> {
        self.client.get_json("/api/quiz", &query.pairs()).await
    }

    pub async fn create(&self, quiz: &NewQuiz<'_>) -> Result<()> {
        self.client
            .send_unit(self.client.request(Method::POST, "/api/quiz").json(quiz))
            .await
    }

    pub async fn update(&self, id: &str, update: &QuizUpdate<'_>) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::PUT, &format!("/api/quiz/{}", id))
                    .json(update),
            )
            .await
    }

    pub async fn set_active(&self, id: &str, active: bool) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::PATCH, &format!("/api/quiz/{}/active", id))
                    .json(&ActiveBody { is_active: active }),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .send_unit(self.client.request(Method::DELETE, &format!("/api/quiz/{}", id)))
            .await
    }

    /// Upload a question CSV. With `dry_run` the server validates and
    /// reports without inserting anything.
    pub async fn import_questions(
        &self,
        id: &str,
        file_name: &str,
        csv_bytes: Vec<u8>,
        dry_run: bool,
    ) -> Result<ImportReport> {
        let part = multipart::Part::bytes(csv_bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = multipart::Form::new().part("csv", part);
        let builder = self
            .client
            .request(Method::POST, &format!("/api/quiz/{}/questions/csv", id))
            .query(&[("dryRun", dry_run.to_string())])
            .multipart(form);
        self.client.send_json(builder).await
    }
}
