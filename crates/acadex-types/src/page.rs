use serde::{Deserialize, Deserializer, Serialize};

/// Pagination block the backend attaches to enveloped list responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Normalized list response.
///
/// List endpoints answer either a bare array or an envelope of
/// `{data, pagination}`. Decoding accepts both; `pagination` is `None`
/// for the bare form.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    pub fn bare(items: Vec<T>) -> Self {
        Page {
            items,
            pagination: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total record count across all pages, falling back to the current
    /// page's length when the server sent no pagination block.
    pub fn total(&self) -> u64 {
        self.pagination
            .map(|p| p.total)
            .unwrap_or(self.items.len() as u64)
    }

    pub fn pages(&self) -> u64 {
        self.pagination.map(|p| p.pages).unwrap_or(1).max(1)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Page::bare(Vec::new())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Enveloped {
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    Bare(Vec<T>),
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ListBody::<T>::deserialize(deserializer)? {
            ListBody::Enveloped { data, pagination } => Page {
                items: data,
                pagination,
            },
            ListBody::Bare(items) => Page {
                items,
                pagination: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bare_array() {
        let page: Page<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(page.len(), 2);
        assert!(page.pagination.is_none());
        assert_eq!(page.total(), 2);
        assert_eq!(page.pages(), 1);
    }

    #[test]
    fn decodes_envelope_with_pagination() {
        let page: Page<String> = serde_json::from_str(
            r#"{"data":["a"],"pagination":{"total":41,"pages":5,"page":1,"limit":10}}"#,
        )
        .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.total(), 41);
        assert_eq!(page.pages(), 5);
    }

    #[test]
    fn decodes_envelope_without_pagination_block() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.pagination.is_none());
    }
}
