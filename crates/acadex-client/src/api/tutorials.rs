use reqwest::{Method, multipart};
use serde::Serialize;

use acadex_types::{Page, TutorialFile};

use crate::client::Client;
use crate::error::Result;

/// What a tutorial file is attached to. Subject scoping is the current
/// model; course scoping remains for records uploaded before subjects
/// existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TutorialScope {
    Subject(String),
    Course(String),
}

impl TutorialScope {
    fn path(&self) -> String {
        match self {
            TutorialScope::Subject(id) => format!("/api/tutorials/subject/{}", id),
            TutorialScope::Course(id) => format!("/api/tutorials/{}", id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TutorialQuery {
    pub q: Option<String>,
    pub published: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl TutorialQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(published) = self.published {
            pairs.push(("published", published.to_string()));
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

#[derive(Serialize)]
struct FileUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct PublishBody {
    published: bool,
}

pub struct TutorialApi<'a> {
    client: &'a Client,
}

impl<'a> TutorialApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        TutorialApi { client }
    }

    pub async fn list(
        &self,
        scope: &TutorialScope,
        query: &TutorialQuery,
    ) -> Result<Page<TutorialFile>> {
        self.client.get_json(&scope.path(), &query.pairs()).await
    }

    /// Upload a PDF into the scope. The field names (`pdf`, `title`,
    /// `description`) are what the server's upload middleware expects.
    pub async fn upload(
        &self,
        scope: &TutorialScope,
        title: &str,
        description: Option<&str>,
        file_name: &str,
        pdf_bytes: Vec<u8>,
    ) -> Result<()> {
        let part = multipart::Part::bytes(pdf_bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let mut form = multipart::Form::new()
            .text("title", title.to_string())
            .part("pdf", part);
        if let Some(description) = description {
            form = form.text("description", description.to_string());
        }
        self.client
            .send_unit(self.client.request(Method::POST, &scope.path()).multipart(form))
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::PUT, &format!("/api/tutorials/file/{}", id))
                    .json(&FileUpdate { title, description }),
            )
            .await
    }

    pub async fn set_published(&self, id: &str, published: bool) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::PATCH, &format!("/api/tutorials/file/{}/publish", id))
                    .json(&PublishBody { published }),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::DELETE, &format!("/api/tutorials/file/{}", id)),
            )
            .await
    }
}
