use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The four levels of the catalog hierarchy, ordered root to leaf.
///
/// The numeric index (0..=3) is the canonical level number used by the
/// cascade selector; `child()`/`parent()` walk the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogLevel {
    College,
    Department,
    Course,
    Subject,
}

impl CatalogLevel {
    pub const COUNT: usize = 4;

    pub const ALL: [CatalogLevel; Self::COUNT] = [
        CatalogLevel::College,
        CatalogLevel::Department,
        CatalogLevel::Course,
        CatalogLevel::Subject,
    ];

    pub fn index(self) -> usize {
        match self {
            CatalogLevel::College => 0,
            CatalogLevel::Department => 1,
            CatalogLevel::Course => 2,
            CatalogLevel::Subject => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn child(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn parent(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Query-string key used when listing children scoped to a parent
    /// (e.g. `/api/catalog/departments?college=<id>`).
    pub fn parent_query_key(self) -> Option<&'static str> {
        match self {
            CatalogLevel::College => None,
            CatalogLevel::Department => Some("college"),
            CatalogLevel::Course => Some("department"),
            CatalogLevel::Subject => Some("course"),
        }
    }

    /// Path segment under `/api/catalog/`.
    pub fn collection(self) -> &'static str {
        match self {
            CatalogLevel::College => "colleges",
            CatalogLevel::Department => "departments",
            CatalogLevel::Course => "courses",
            CatalogLevel::Subject => "subjects",
        }
    }
}

impl fmt::Display for CatalogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CatalogLevel::College => "college",
            CatalogLevel::Department => "department",
            CatalogLevel::Course => "course",
            CatalogLevel::Subject => "subject",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CatalogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "college" | "colleges" => Ok(CatalogLevel::College),
            "department" | "departments" => Ok(CatalogLevel::Department),
            "course" | "courses" => Ok(CatalogLevel::Course),
            "subject" | "subjects" => Ok(CatalogLevel::Subject),
            other => Err(Error::InvalidCatalogLevel(other.to_string())),
        }
    }
}

/// Course level band, serialized as the literal strings the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseLevel {
    #[serde(rename = "100")]
    L100,
    #[serde(rename = "200")]
    L200,
    #[serde(rename = "300")]
    L300,
    #[serde(rename = "400")]
    L400,
    #[serde(rename = "500")]
    L500,
    #[serde(rename = "600")]
    L600,
    #[serde(rename = "700")]
    L700,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 7] = [
        CourseLevel::L100,
        CourseLevel::L200,
        CourseLevel::L300,
        CourseLevel::L400,
        CourseLevel::L500,
        CourseLevel::L600,
        CourseLevel::L700,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::L100 => "100",
            CourseLevel::L200 => "200",
            CourseLevel::L300 => "300",
            CourseLevel::L400 => "400",
            CourseLevel::L500 => "500",
            CourseLevel::L600 => "600",
            CourseLevel::L700 => "700",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| Error::InvalidLevel(s.to_string()))
    }
}

/// Reference to a parent record.
///
/// The backend sometimes answers a bare id and sometimes a populated
/// object, depending on whether the query populated the relation. Both
/// shapes decode to the same thing for our purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    Id(String),
    Populated(ParentSummary),
}

/// The populated form of a parent reference. Only identity fields are
/// carried; which of the optional fields is present depends on the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbr: Option<String>,
}

impl ParentRef {
    pub fn id(&self) -> &str {
        match self {
            ParentRef::Id(id) => id,
            ParentRef::Populated(summary) => &summary.id,
        }
    }

    /// Best human-readable label, falling back to the id.
    pub fn label(&self) -> &str {
        match self {
            ParentRef::Id(id) => id,
            ParentRef::Populated(summary) => summary
                .name
                .as_deref()
                .or(summary.title.as_deref())
                .or(summary.code.as_deref())
                .or(summary.abbr.as_deref())
                .unwrap_or(&summary.id),
        }
    }
}

impl From<&str> for ParentRef {
    fn from(id: &str) -> Self {
        ParentRef::Id(id.to_string())
    }
}

/// College: level 0 of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub abbr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Department: level 1, scoped to a college.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub college: ParentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Course: level 2, scoped to a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(alias = "_id")]
    pub id: String,
    pub code: String,
    pub title: String,
    pub level: CourseLevel,
    pub department: ParentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Subject: level 3, the leaf quizzes and tutorials attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub code: String,
    pub course: ParentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Uniform option row consumed by the cascade selector, whatever the level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: String,
    /// Display label ("Engineering (ENG)", "CSC101 - Intro to Computing").
    pub label: String,
    /// Code-like token used for non-interactive path matching.
    pub token: String,
}

impl From<&College> for CatalogOption {
    fn from(college: &College) -> Self {
        CatalogOption {
            id: college.id.clone(),
            label: format!("{} ({})", college.name, college.abbr),
            token: college.abbr.clone(),
        }
    }
}

impl From<&Department> for CatalogOption {
    fn from(department: &Department) -> Self {
        CatalogOption {
            id: department.id.clone(),
            label: format!("{} ({})", department.name, department.code),
            token: department.code.clone(),
        }
    }
}

impl From<&Course> for CatalogOption {
    fn from(course: &Course) -> Self {
        CatalogOption {
            id: course.id.clone(),
            label: format!("{} - {}", course.code, course.title),
            token: course.code.clone(),
        }
    }
}

impl From<&Subject> for CatalogOption {
    fn from(subject: &Subject) -> Self {
        CatalogOption {
            id: subject.id.clone(),
            label: format!("{} ({})", subject.name, subject.code),
            token: subject.code.clone(),
        }
    }
}

impl CatalogOption {
    /// Case-insensitive match against the code token, label or id.
    pub fn matches(&self, segment: &str) -> bool {
        self.token.eq_ignore_ascii_case(segment)
            || self.id == segment
            || self.label.eq_ignore_ascii_case(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_ref_decodes_bare_id_and_populated_object() {
        let bare: ParentRef = serde_json::from_str("\"665f1\"").unwrap();
        assert_eq!(bare.id(), "665f1");
        assert_eq!(bare.label(), "665f1");

        let populated: ParentRef =
            serde_json::from_str(r#"{"_id":"665f1","name":"Engineering","abbr":"ENG"}"#).unwrap();
        assert_eq!(populated.id(), "665f1");
        assert_eq!(populated.label(), "Engineering");
    }

    #[test]
    fn course_level_parses_known_bands_only() {
        assert_eq!("300".parse::<CourseLevel>().unwrap(), CourseLevel::L300);
        assert!("800".parse::<CourseLevel>().is_err());
        assert!("abc".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn catalog_level_walks_parent_and_child() {
        assert_eq!(CatalogLevel::College.child(), Some(CatalogLevel::Department));
        assert_eq!(CatalogLevel::Subject.child(), None);
        assert_eq!(CatalogLevel::College.parent(), None);
        assert_eq!(CatalogLevel::Subject.parent(), Some(CatalogLevel::Course));
        assert_eq!(CatalogLevel::Department.parent_query_key(), Some("college"));
    }

    #[test]
    fn college_record_accepts_mongo_id_alias() {
        let college: College =
            serde_json::from_str(r#"{"_id":"abc","name":"Science","abbr":"SCI"}"#).unwrap();
        assert_eq!(college.id, "abc");
        let option = CatalogOption::from(&college);
        assert!(option.matches("sci"));
        assert!(option.matches("abc"));
        assert!(!option.matches("eng"));
    }
}
