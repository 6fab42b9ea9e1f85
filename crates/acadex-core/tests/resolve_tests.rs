use std::sync::Mutex;

use acadex_core::error::Error;
use acadex_core::source::{CatalogSource, FetchResult, resolve_path};
use acadex_types::{CatalogLevel, CatalogOption};

fn opt(id: &str, token: &str, label: &str) -> CatalogOption {
    CatalogOption {
        id: id.to_string(),
        label: label.to_string(),
        token: token.to_string(),
    }
}

/// Canned two-college catalog; records every fetch it serves.
#[derive(Default)]
struct FakeCatalog {
    calls: Mutex<Vec<(CatalogLevel, Option<String>)>>,
}

impl CatalogSource for FakeCatalog {
    async fn options(&self, level: CatalogLevel, parent: Option<&str>) -> FetchResult {
        self.calls
            .lock()
            .unwrap()
            .push((level, parent.map(str::to_string)));
        Ok(match (level, parent) {
            (CatalogLevel::College, None) => vec![
                opt("c-eng", "ENG", "Engineering (ENG)"),
                opt("c-sci", "SCI", "Science (SCI)"),
            ],
            (CatalogLevel::Department, Some("c-eng")) => {
                vec![opt("d-cse", "CSE", "Computer Science (CSE)")]
            }
            (CatalogLevel::Course, Some("d-cse")) => {
                vec![opt("x-csc101", "CSC101", "CSC101 - Intro to Computing")]
            }
            (CatalogLevel::Subject, Some("x-csc101")) => {
                vec![opt("s-alg", "ALG", "Algorithms (ALG)")]
            }
            _ => vec![],
        })
    }
}

/// Always fails below the college level.
struct BrokenCatalog;

impl CatalogSource for BrokenCatalog {
    async fn options(&self, level: CatalogLevel, _parent: Option<&str>) -> FetchResult {
        if level == CatalogLevel::College {
            Ok(vec![opt("c-eng", "ENG", "Engineering (ENG)")])
        } else {
            Err("departments unavailable".to_string())
        }
    }
}

#[tokio::test]
async fn test_full_path_resolves_to_subject() {
    let source = FakeCatalog::default();
    let resolved = resolve_path(&source, "ENG/CSE/CSC101/ALG").await.unwrap();
    assert_eq!(resolved.segments.len(), 4);
    assert_eq!(resolved.subject_id(), Some("s-alg"));
    assert_eq!(resolved.course_id(), Some("x-csc101"));
    assert_eq!(resolved.deepest().unwrap().level, CatalogLevel::Subject);
}

#[test]
fn test_partial_path_stops_at_its_depth() {
    let source = FakeCatalog::default();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let resolved = runtime.block_on(resolve_path(&source, "eng/cse")).unwrap();
    assert_eq!(resolved.deepest().unwrap().id, "d-cse");
    assert_eq!(resolved.subject_id(), None);

    // One fetch per matched level, none for the unmatched depths.
    let calls = source.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], (CatalogLevel::College, None));
    assert_eq!(calls[1], (CatalogLevel::Department, Some("c-eng".to_string())));
}

#[tokio::test]
async fn test_unmatched_segment_names_its_level() {
    let source = FakeCatalog::default();
    match resolve_path(&source, "ENG/typo").await {
        Err(Error::PathSegment { level, segment }) => {
            assert_eq!(level, CatalogLevel::Department);
            assert_eq!(segment, "typo");
        }
        other => panic!("expected PathSegment, got {:?}", other.map(|r| r.segments)),
    }
}

#[tokio::test]
async fn test_path_shape_is_checked_before_any_fetch() {
    let source = FakeCatalog::default();
    assert!(matches!(
        resolve_path(&source, "a/b/c/d/e").await,
        Err(Error::PathShape(_))
    ));
    assert!(matches!(
        resolve_path(&source, " / ").await,
        Err(Error::PathShape(_))
    ));
    assert!(source.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_source_failure_propagates() {
    match resolve_path(&BrokenCatalog, "ENG/CSE").await {
        Err(Error::Source(message)) => assert_eq!(message, "departments unavailable"),
        other => panic!("expected Source error, got {:?}", other.map(|r| r.segments)),
    }
}

#[tokio::test]
async fn test_segments_match_by_id_too() {
    let source = FakeCatalog::default();
    let resolved = resolve_path(&source, "c-eng/d-cse").await.unwrap();
    assert_eq!(resolved.deepest().unwrap().id, "d-cse");
}
