use acadex_types::{Page, TutorialFile};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, MessageViewModel, StatusBadge, TutorialListViewModel,
    TutorialRowViewModel, TutorialUploadViewModel,
};

pub(crate) fn tutorial_row(file: &TutorialFile) -> TutorialRowViewModel {
    TutorialRowViewModel {
        id: file.id.clone(),
        title: file.title.clone(),
        published: file.published,
        description: file.description.clone(),
        created_at: file.created_at,
    }
}

pub fn present_tutorial_list(
    scope: &str,
    page: &Page<TutorialFile>,
    current_page: u64,
) -> CommandResultViewModel<TutorialListViewModel> {
    let content = TutorialListViewModel {
        scope: scope.to_string(),
        files: page.items.iter().map(tutorial_row).collect(),
        total: page.total(),
        page: current_page,
        pages: page.pages(),
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.files.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("No tutorials in this scope"))
            .with_suggestion(
                Guidance::new("Upload a PDF")
                    .with_command("acadex tutorial upload <FILE.pdf> --title <TITLE> ..."),
            );
    } else {
        let unpublished = result
            .content
            .files
            .iter()
            .filter(|f| !f.published)
            .count();
        let label = format!("{} tutorial(s)", result.content.total);
        result = result.with_badge(StatusBadge::success(label));
        if unpublished > 0 {
            result = result.with_suggestion(Guidance::new(format!(
                "{} of them are still unpublished and hidden from students",
                unpublished
            )));
        }
    }

    result
}

pub fn present_tutorial_uploaded(
    title: &str,
    scope: &str,
    file: &str,
    bytes: usize,
) -> CommandResultViewModel<TutorialUploadViewModel> {
    let content = TutorialUploadViewModel {
        title: title.to_string(),
        scope: scope.to_string(),
        file: file.to_string(),
        bytes,
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success("Tutorial uploaded"))
        .with_suggestion(Guidance::new(
            "New uploads start unpublished; publish when ready",
        ))
}

pub fn present_tutorial_updated(id: &str) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!(
        "Tutorial {} was updated.",
        id
    )))
    .with_badge(StatusBadge::success("Tutorial updated"))
}

pub fn present_tutorial_published(
    id: &str,
    published: bool,
) -> CommandResultViewModel<MessageViewModel> {
    let (label, message) = if published {
        (
            "Tutorial published",
            format!("Tutorial {} is now visible to students.", id),
        )
    } else {
        (
            "Tutorial unpublished",
            format!("Tutorial {} is now hidden from students.", id),
        )
    };

    CommandResultViewModel::new(MessageViewModel::new(message))
        .with_badge(StatusBadge::success(label))
}

pub fn present_tutorial_deleted(id: &str) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!(
        "Tutorial {} and its PDF were permanently deleted.",
        id
    )))
    .with_badge(StatusBadge::success("Tutorial deleted"))
}
