use acadex_types::{CatalogLevel, CatalogOption};
use serde::Serialize;

use crate::cascade::CascadeState;
use crate::error::{Error, Result};

/// Outcome of one options fetch. Failures are plain text: the selector
/// treats any failure as an empty child list and surfaces the message.
pub type FetchResult = std::result::Result<Vec<CatalogOption>, String>;

/// Provider of catalog options, one list per (level, parent) pair.
///
/// Implemented by the REST client for the live backend and by in-memory
/// fixtures in tests.
pub trait CatalogSource {
    fn options(
        &self,
        level: CatalogLevel,
        parent: Option<&str>,
    ) -> impl Future<Output = FetchResult> + Send;
}

/// One matched segment of a resolved catalog path.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSegment {
    pub level: CatalogLevel,
    pub id: String,
    pub label: String,
}

/// Result of resolving a `college/department/course/subject` path.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPath {
    pub segments: Vec<ResolvedSegment>,
}

impl ResolvedPath {
    pub fn deepest(&self) -> Option<&ResolvedSegment> {
        self.segments.last()
    }

    pub fn id_at(&self, level: CatalogLevel) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.level == level)
            .map(|segment| segment.id.as_str())
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.id_at(CatalogLevel::Subject)
    }

    pub fn course_id(&self) -> Option<&str> {
        self.id_at(CatalogLevel::Course)
    }
}

/// Resolve a slash-separated catalog path ("ENG/CSE/CSC101/ALG") to ids,
/// matching each segment against code, label or id, case-insensitively.
///
/// The walk drives a [`CascadeState`] so non-interactive resolution obeys
/// exactly the same ordering and enablement rules as the interactive
/// picker. A partial path is fine: "ENG/CSE" resolves to a department.
pub async fn resolve_path<S: CatalogSource>(source: &S, path: &str) -> Result<ResolvedPath> {
    let segments: Vec<&str> = path
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    if segments.is_empty() {
        return Err(Error::PathShape("no segments".to_string()));
    }
    if segments.len() > CatalogLevel::COUNT {
        return Err(Error::PathShape(format!(
            "{} segments, at most {} allowed",
            segments.len(),
            CatalogLevel::COUNT
        )));
    }

    let mut state = CascadeState::new();
    let ticket = state.begin_load_roots();
    let roots = source
        .options(ticket.level, ticket.parent.as_deref())
        .await
        .map_err(Error::Source)?;
    state.apply_fetch(&ticket, Ok(roots));

    let mut resolved = Vec::with_capacity(segments.len());
    for (level, segment) in CatalogLevel::ALL.into_iter().zip(segments.iter()) {
        let matched = state
            .options(level)
            .iter()
            .find(|option| option.matches(segment))
            .cloned()
            .ok_or_else(|| Error::PathSegment {
                level,
                segment: segment.to_string(),
            })?;

        let ticket = state.select(level, &matched.id)?;
        resolved.push(ResolvedSegment {
            level,
            id: matched.id,
            label: matched.label,
        });

        // Only fetch children while segments remain to be matched.
        if resolved.len() < segments.len() {
            if let Some(ticket) = ticket {
                let children = source
                    .options(ticket.level, ticket.parent.as_deref())
                    .await
                    .map_err(Error::Source)?;
                state.apply_fetch(&ticket, Ok(children));
            }
        }
    }

    Ok(ResolvedPath { segments: resolved })
}
