use acadex_types::{CourseLevel, Role};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RoleArg {
    Member,
    Exec,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Member => Role::Member,
            RoleArg::Exec => Role::Exec,
            RoleArg::Admin => Role::Admin,
        }
    }
}

impl fmt::Display for RoleArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Role::from(*self))
    }
}

/// Roles a signed-in member may request for themselves. Plain `member` is the
/// default on registration, so it is not a promotion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PromoteRoleArg {
    Exec,
    Admin,
}

impl From<PromoteRoleArg> for Role {
    fn from(value: PromoteRoleArg) -> Self {
        match value {
            PromoteRoleArg::Exec => Role::Exec,
            PromoteRoleArg::Admin => Role::Admin,
        }
    }
}

impl fmt::Display for PromoteRoleArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Role::from(*self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CourseLevelArg {
    #[value(name = "100")]
    L100,
    #[value(name = "200")]
    L200,
    #[value(name = "300")]
    L300,
    #[value(name = "400")]
    L400,
    #[value(name = "500")]
    L500,
    #[value(name = "600")]
    L600,
    #[value(name = "700")]
    L700,
}

impl From<CourseLevelArg> for CourseLevel {
    fn from(value: CourseLevelArg) -> Self {
        match value {
            CourseLevelArg::L100 => CourseLevel::L100,
            CourseLevelArg::L200 => CourseLevel::L200,
            CourseLevelArg::L300 => CourseLevel::L300,
            CourseLevelArg::L400 => CourseLevel::L400,
            CourseLevelArg::L500 => CourseLevel::L500,
            CourseLevelArg::L600 => CourseLevel::L600,
            CourseLevelArg::L700 => CourseLevel::L700,
        }
    }
}

impl fmt::Display for CourseLevelArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CourseLevel::from(*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StatusFilter {
    Active,
    Inactive,
    All,
}

impl StatusFilter {
    /// Maps the filter to the optional `active` query parameter.
    pub fn as_query(&self) -> Option<bool> {
        match self {
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
            StatusFilter::All => None,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::Active => write!(f, "active"),
            StatusFilter::Inactive => write!(f, "inactive"),
            StatusFilter::All => write!(f, "all"),
        }
    }
}
