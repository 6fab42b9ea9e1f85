use reqwest::Method;
use serde::Serialize;

use acadex_core::source::{CatalogSource, FetchResult};
use acadex_types::{
    CatalogLevel, CatalogOption, College, Course, CourseLevel, Department, Page, Subject,
};

use crate::client::Client;
use crate::error::Result;

pub struct CatalogApi<'a> {
    client: &'a Client,
}

#[derive(Debug, Serialize)]
pub struct NewCollege<'a> {
    pub name: &'a str,
    pub abbr: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub college: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewCourse<'a> {
    pub code: &'a str,
    pub title: &'a str,
    pub level: CourseLevel,
    pub department: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewSubject<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub course: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> CatalogApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        CatalogApi { client }
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        level: CatalogLevel,
        parent: Option<&str>,
    ) -> Result<Vec<T>> {
        let path = format!("/api/catalog/{}", level.collection());
        let mut query = Vec::new();
        if let (Some(parent), Some(key)) = (parent, level.parent_query_key()) {
            query.push((key, parent.to_string()));
        }
        let page: Page<T> = self.client.get_json(&path, &query).await?;
        Ok(page.items)
    }

    pub async fn colleges(&self) -> Result<Vec<College>> {
        self.list(CatalogLevel::College, None).await
    }

    pub async fn departments(&self, college: Option<&str>) -> Result<Vec<Department>> {
        self.list(CatalogLevel::Department, college).await
    }

    pub async fn courses(&self, department: Option<&str>) -> Result<Vec<Course>> {
        self.list(CatalogLevel::Course, department).await
    }

    pub async fn subjects(&self, course: Option<&str>) -> Result<Vec<Subject>> {
        self.list(CatalogLevel::Subject, course).await
    }

    /// Uniform option rows for one level, scoped to a parent id. This is
    /// what the cascade selector consumes.
    pub async fn options_at(
        &self,
        level: CatalogLevel,
        parent: Option<&str>,
    ) -> Result<Vec<CatalogOption>> {
        Ok(match level {
            CatalogLevel::College => self
                .colleges()
                .await?
                .iter()
                .map(CatalogOption::from)
                .collect(),
            CatalogLevel::Department => self
                .departments(parent)
                .await?
                .iter()
                .map(CatalogOption::from)
                .collect(),
            CatalogLevel::Course => self
                .courses(parent)
                .await?
                .iter()
                .map(CatalogOption::from)
                .collect(),
            CatalogLevel::Subject => self
                .subjects(parent)
                .await?
                .iter()
                .map(CatalogOption::from)
                .collect(),
        })
    }

    pub async fn create_college(&self, body: &NewCollege<'_>) -> Result<()> {
        self.create(CatalogLevel::College, body).await
    }

    pub async fn create_department(&self, body: &NewDepartment<'_>) -> Result<()> {
        self.create(CatalogLevel::Department, body).await
    }

    pub async fn create_course(&self, body: &NewCourse<'_>) -> Result<()> {
        self.create(CatalogLevel::Course, body).await
    }

    pub async fn create_subject(&self, body: &NewSubject<'_>) -> Result<()> {
        self.create(CatalogLevel::Subject, body).await
    }

    async fn create<B: Serialize>(&self, level: CatalogLevel, body: &B) -> Result<()> {
        let path = format!("/api/catalog/{}", level.collection());
        self.client
            .send_unit(self.client.request(Method::POST, &path).json(body))
            .await
    }
}

impl CatalogSource for CatalogApi<'_> {
    async fn options(&self, level: CatalogLevel, parent: Option<&str>) -> FetchResult {
        self.options_at(level, parent)
            .await
            .map_err(|err| err.to_string())
    }
}
