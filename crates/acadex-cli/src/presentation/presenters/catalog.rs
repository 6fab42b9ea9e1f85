use acadex_core::ResolvedPath;
use acadex_types::{CatalogLevel, College, Course, Department, Subject};

use crate::presentation::view_models::{
    CatalogCreatedViewModel, CatalogEntryViewModel, CatalogListViewModel, CommandResultViewModel,
    Guidance, ResolvedPathViewModel, ResolvedSegmentViewModel, StatusBadge,
};

fn finish_list(
    level: CatalogLevel,
    scope: Option<String>,
    entries: Vec<CatalogEntryViewModel>,
    create_hint: &str,
) -> CommandResultViewModel<CatalogListViewModel> {
    let content = CatalogListViewModel {
        level: level.to_string(),
        scope,
        total: entries.len() as u64,
        entries,
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.entries.is_empty() {
        let label = format!("No {}s here yet", result.content.level);
        result = result
            .with_badge(StatusBadge::warning(label))
            .with_suggestion(Guidance::new("Create one").with_command(create_hint));
    } else {
        let label = format!("{} {}(s)", result.content.total, result.content.level);
        result = result.with_badge(StatusBadge::success(label));
    }

    result
}

pub fn present_colleges(colleges: &[College]) -> CommandResultViewModel<CatalogListViewModel> {
    let entries = colleges
        .iter()
        .map(|c| CatalogEntryViewModel {
            id: c.id.clone(),
            name: c.name.clone(),
            code: Some(c.abbr.clone()),
            parent: None,
            detail: None,
        })
        .collect();

    finish_list(
        CatalogLevel::College,
        None,
        entries,
        "acadex catalog colleges create <NAME> --abbr <ABBR>",
    )
}

pub fn present_departments(
    departments: &[Department],
    scope: Option<String>,
) -> CommandResultViewModel<CatalogListViewModel> {
    let entries = departments
        .iter()
        .map(|d| CatalogEntryViewModel {
            id: d.id.clone(),
            name: d.name.clone(),
            code: Some(d.code.clone()),
            parent: Some(d.college.label().to_string()),
            detail: None,
        })
        .collect();

    finish_list(
        CatalogLevel::Department,
        scope,
        entries,
        "acadex catalog departments create <NAME> --code <CODE> --college <ID>",
    )
}

pub fn present_courses(
    courses: &[Course],
    scope: Option<String>,
) -> CommandResultViewModel<CatalogListViewModel> {
    let entries = courses
        .iter()
        .map(|c| CatalogEntryViewModel {
            id: c.id.clone(),
            name: c.title.clone(),
            code: Some(c.code.clone()),
            parent: Some(c.department.label().to_string()),
            detail: Some(format!("{} level", c.level.as_str())),
        })
        .collect();

    finish_list(
        CatalogLevel::Course,
        scope,
        entries,
        "acadex catalog courses create <CODE> --title <TITLE> --department <ID>",
    )
}

pub fn present_subjects(
    subjects: &[Subject],
    scope: Option<String>,
) -> CommandResultViewModel<CatalogListViewModel> {
    let entries = subjects
        .iter()
        .map(|s| CatalogEntryViewModel {
            id: s.id.clone(),
            name: s.name.clone(),
            code: Some(s.code.clone()),
            parent: Some(s.course.label().to_string()),
            detail: s.description.clone(),
        })
        .collect();

    finish_list(
        CatalogLevel::Subject,
        scope,
        entries,
        "acadex catalog subjects create <NAME> --code <CODE> --course <ID>",
    )
}

pub fn present_catalog_created(
    level: CatalogLevel,
    name: &str,
    code: Option<&str>,
    parent: Option<&str>,
) -> CommandResultViewModel<CatalogCreatedViewModel> {
    let content = CatalogCreatedViewModel {
        level: level.to_string(),
        name: name.to_string(),
        code: code.map(String::from),
        parent: parent.map(String::from),
    };

    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(format!("{} created", level)));

    if let Some(child) = level.child() {
        result = result.with_suggestion(
            Guidance::new(format!("Add a {} under it", child))
                .with_command(format!("acadex catalog {}s create --help", child)),
        );
    }

    result
}

pub fn present_resolved_path(
    path: &str,
    resolved: &ResolvedPath,
) -> CommandResultViewModel<ResolvedPathViewModel> {
    let segments: Vec<ResolvedSegmentViewModel> = resolved
        .segments
        .iter()
        .map(|s| ResolvedSegmentViewModel {
            level: s.level.to_string(),
            id: s.id.clone(),
            label: s.label.clone(),
        })
        .collect();

    let content = ResolvedPathViewModel {
        path: path.to_string(),
        subject_id: resolved.subject_id().map(String::from),
        course_id: resolved.course_id().map(String::from),
        segments,
    };

    let mut result = CommandResultViewModel::new(content);

    let Some(deepest) = resolved.deepest() else {
        return result.with_badge(StatusBadge::warning("Nothing resolved"));
    };

    result = result.with_badge(StatusBadge::success(format!(
        "Resolved down to {} '{}'",
        deepest.level, deepest.label
    )));

    if let Some(subject) = resolved.subject_id() {
        result = result
            .with_suggestion(
                Guidance::new("Create a quiz on this subject")
                    .with_command(format!("acadex quiz create <TITLE> --subject {}", subject)),
            )
            .with_suggestion(
                Guidance::new("List its tutorials")
                    .with_command(format!("acadex tutorial list --subject {}", subject)),
            );
    } else if let Some(next) = deepest.level.child() {
        result = result.with_suggestion(Guidance::new(format!(
            "Append a {} segment to reach a {}",
            next,
            CatalogLevel::Subject
        )));
    }

    result
}
