use reqwest::Method;
use serde::Serialize;

use acadex_types::{Page, Role, User};

use crate::client::Client;
use crate::error::Result;

/// Filters for user listing and export. `None` fields are omitted from
/// the query string.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub q: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
}

impl UserQuery {
    fn pairs(&self, paging: bool) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.to_string()));
        }
        if let Some(active) = self.active {
            pairs.push(("active", active.to_string()));
        }
        if paging {
            if let Some(page) = self.page {
                pairs.push(("page", page.to_string()));
            }
            if let Some(limit) = self.limit {
                pairs.push(("limit", limit.to_string()));
            }
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

pub struct UsersApi<'a> {
    client: &'a Client,
}

#[derive(Serialize)]
struct RoleBody {
    role: Role,
}

#[derive(Serialize)]
struct StatusBody {
    active: bool,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        UsersApi { client }
    }

    pub async fn list(&self, query: &UserQuery) -> Result<Page<User>> {
        self.client.get_json("/api/users", &query.pairs(true)).await
    }

    /// Server-rendered CSV of all users matching the filters; paging is
    /// intentionally not forwarded.
    pub async fn export_csv(&self, query: &UserQuery) -> Result<Vec<u8>> {
        self.client
            .get_bytes("/api/users/export", &query.pairs(false))
            .await
    }

    pub async fn set_role(&self, id: &str, role: Role) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::PATCH, &format!("/api/users/{}/role", id))
                    .json(&RoleBody { role }),
            )
            .await
    }

    pub async fn set_status(&self, id: &str, active: bool) -> Result<()> {
        self.client
            .send_unit(
                self.client
                    .request(Method::PATCH, &format!("/api/users/{}/status", id))
                    .json(&StatusBody { active }),
            )
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .send_unit(self.client.request(Method::DELETE, &format!("/api/users/{}", id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_skip_unset_fields_and_paging_for_export() {
        let query = UserQuery {
            q: Some("ada".to_string()),
            role: Some(Role::Exec),
            active: Some(true),
            page: Some(3),
            limit: Some(20),
            sort: Some("-createdAt".to_string()),
        };
        let listed = query.pairs(true);
        assert!(listed.contains(&("page", "3".to_string())));
        assert!(listed.contains(&("role", "exec".to_string())));

        let exported = query.pairs(false);
        assert!(!exported.iter().any(|(key, _)| *key == "page" || *key == "limit"));
        assert!(exported.contains(&("sort", "-createdAt".to_string())));

        assert!(UserQuery::default().pairs(true).is_empty());
    }
}
