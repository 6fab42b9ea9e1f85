use acadex_core::questions::CsvReport;
use acadex_types::{ImportReport, Page, Quiz};

use crate::presentation::view_models::{
    CommandResultViewModel, CsvIssueViewModel, Guidance, MessageViewModel, QuizImportViewModel,
    QuizListViewModel, QuizRowViewModel, ServerImportViewModel, StatusBadge,
};

pub(crate) fn quiz_row(quiz: &Quiz) -> QuizRowViewModel {
    QuizRowViewModel {
        id: quiz.id.clone(),
        title: quiz.title.clone(),
        subject: quiz.subject.label().to_string(),
        active: quiz.active,
        questions: quiz.question_count,
        created_at: quiz.created_at,
    }
}

pub fn present_quiz_list(
    page: &Page<Quiz>,
    current_page: u64,
    filtered: bool,
) -> CommandResultViewModel<QuizListViewModel> {
    let content = QuizListViewModel {
        quizzes: page.items.iter().map(quiz_row).collect(),
        total: page.total(),
        page: current_page,
        pages: page.pages(),
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.quizzes.is_empty() {
        let label = if filtered {
            "No quizzes match the filters"
        } else {
            "No quizzes yet"
        };
        result = result.with_badge(StatusBadge::warning(label)).with_suggestion(
            Guidance::new("Create one")
                .with_command("acadex quiz create <TITLE> --path <COLLEGE/DEPT/COURSE/SUBJECT>"),
        );
    } else {
        let label = format!("{} quiz(zes)", result.content.total);
        result = result.with_badge(StatusBadge::success(label));
        if result.content.page < result.content.pages {
            let command = format!("acadex quiz list --page {}", result.content.page + 1);
            result = result.with_suggestion(Guidance::new("Next page").with_command(command));
        }
    }

    result
}

pub fn present_quiz_created(
    title: &str,
    subject_id: &str,
) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!(
        "Quiz '{}' was created on subject {}.",
        title, subject_id
    )))
    .with_badge(StatusBadge::success("Quiz created"))
    .with_suggestion(
        Guidance::new("Import questions from CSV")
            .with_command("acadex quiz import <ID> questions.csv --dry-run"),
    )
}

pub fn present_quiz_updated(id: &str) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!("Quiz {} was updated.", id)))
        .with_badge(StatusBadge::success("Quiz updated"))
}

pub fn present_quiz_active(id: &str, active: bool) -> CommandResultViewModel<MessageViewModel> {
    let (label, message) = if active {
        (
            "Quiz activated",
            format!("Quiz {} is now visible to students.", id),
        )
    } else {
        (
            "Quiz deactivated",
            format!("Quiz {} is now hidden from students.", id),
        )
    };

    CommandResultViewModel::new(MessageViewModel::new(message))
        .with_badge(StatusBadge::success(label))
}

pub fn present_quiz_deleted(id: &str) -> CommandResultViewModel<MessageViewModel> {
    CommandResultViewModel::new(MessageViewModel::new(format!(
        "Quiz {} and its questions were permanently deleted.",
        id
    )))
    .with_badge(StatusBadge::success("Quiz deleted"))
}

pub fn present_quiz_import(
    quiz_id: &str,
    file: &str,
    dry_run: bool,
    local: &CsvReport,
    server: Option<&ImportReport>,
) -> CommandResultViewModel<QuizImportViewModel> {
    let issues: Vec<CsvIssueViewModel> = local
        .issues
        .iter()
        .map(|issue| CsvIssueViewModel {
            line: issue.line,
            field: issue.field.clone(),
            message: issue.message.clone(),
        })
        .collect();

    let content = QuizImportViewModel {
        quiz_id: quiz_id.to_string(),
        file: file.to_string(),
        dry_run,
        rows: local.rows,
        issues,
        server_report: server.map(|report| ServerImportViewModel {
            total: report.total,
            inserted: report.inserted,
            skipped: report.skipped,
            errors: report.errors.clone(),
        }),
    };

    let result = CommandResultViewModel::new(content);

    if !local.ok() {
        return result
            .with_badge(StatusBadge::error("CSV validation failed"))
            .with_suggestion(Guidance::new(
                "Fix the listed lines and run the import again; nothing was uploaded",
            ));
    }

    match server {
        Some(report) if dry_run => result.with_badge(StatusBadge::info(format!(
            "Dry run: {} of {} question(s) would be imported",
            report.inserted, report.total
        ))),
        Some(report) => {
            let mut result = result.with_badge(StatusBadge::success(format!(
                "Imported {} of {} question(s)",
                report.inserted, report.total
            )));
            if report.skipped > 0 {
                result = result.with_suggestion(Guidance::new(format!(
                    "{} row(s) were skipped by the server; see the errors above",
                    report.skipped
                )));
            }
            result
        }
        None => result.with_badge(StatusBadge::info("Validated locally")),
    }
}
