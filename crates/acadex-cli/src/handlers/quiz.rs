use std::path::PathBuf;

use anyhow::Result;

use acadex_client::{Client, NewQuiz, QuizQuery, QuizUpdate};

use crate::args::{OutputFormat, PageArgs, StatusFilter, SubjectScopeArgs};
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

/// Turn `--subject <ID>` or `--path <A/B/C/D>` into a subject id. A path
/// that stops short of a subject is an error, not a silent fallback.
async fn subject_from_scope(client: &Client, scope: &SubjectScopeArgs) -> Result<String> {
    match (&scope.subject, &scope.path) {
        (Some(subject), _) => Ok(subject.clone()),
        (None, Some(path)) => {
            let resolved = acadex_core::resolve_path(&client.catalog(), path).await?;
            match resolved.subject_id() {
                Some(subject) => Ok(subject.to_string()),
                None => {
                    let stop = resolved
                        .deepest()
                        .map(|segment| segment.level.to_string())
                        .unwrap_or_else(|| "nothing".to_string());
                    anyhow::bail!(
                        "'{}' resolves to a {}; extend the path down to a subject",
                        path,
                        stop
                    )
                }
            }
        }
        (None, None) => anyhow::bail!("either --subject or --path is required"),
    }
}

pub async fn list(
    exec: &ExecutionContext,
    q: Option<String>,
    status: StatusFilter,
    page: PageArgs,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let filtered = q.is_some() || status.as_query().is_some();
    let query = QuizQuery {
        q,
        active: status.as_query(),
        page: Some(page.page),
        limit: Some(page.limit.unwrap_or(exec.page_size()?)),
    };
    let result = client.quizzes().list(&query).await.map_err(describe)?;
    ctx.render(presenters::present_quiz_list(&result, page.page, filtered))
}

pub async fn create(
    exec: &ExecutionContext,
    title: String,
    description: Option<String>,
    scope: SubjectScopeArgs,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let subject = subject_from_scope(&client, &scope).await?;
    client
        .quizzes()
        .create(&NewQuiz {
            title: &title,
            description: description.as_deref(),
            subject: &subject,
        })
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_quiz_created(&title, &subject))
}

pub async fn update(
    exec: &ExecutionContext,
    id: String,
    title: Option<String>,
    description: Option<String>,
    subject: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);

    let update = QuizUpdate {
        title: title.as_deref(),
        description: description.as_deref(),
        subject: subject.as_deref(),
    };
    if update.is_empty() {
        anyhow::bail!("nothing to update (pass --title, --description or --subject)");
    }

    let client = exec.client()?;
    client.quizzes().update(&id, &update).await.map_err(describe)?;
    ctx.render(presenters::present_quiz_updated(&id))
}

pub async fn set_active(
    exec: &ExecutionContext,
    id: String,
    active: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .quizzes()
        .set_active(&id, active)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_quiz_active(&id, active))
}

pub async fn delete(
    exec: &ExecutionContext,
    id: String,
    yes: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    if !yes {
        anyhow::bail!("refusing to delete quiz {} without --yes", id);
    }

    let client = exec.client()?;
    client.quizzes().delete(&id).await.map_err(describe)?;
    ctx.render(presenters::present_quiz_deleted(&id))
}

/// Validate the CSV locally before anything touches the network, so a
/// malformed file is reported line by line without a server round trip.
pub async fn import(
    exec: &ExecutionContext,
    id: String,
    file: PathBuf,
    dry_run: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let file_label = file.display().to_string();

    let local = acadex_core::questions::validate_file(&file)?;
    if !local.ok() {
        ctx.render(presenters::present_quiz_import(
            &id,
            &file_label,
            dry_run,
            &local,
            None,
        ))?;
        anyhow::bail!(
            "{} issue(s) in {}; nothing was uploaded",
            local.issues.len(),
            file_label
        );
    }

    let client = exec.client()?;
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("questions.csv");
    let csv_bytes = std::fs::read(&file)?;
    let report = client
        .quizzes()
        .import_questions(&id, file_name, csv_bytes, dry_run)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_quiz_import(
        &id,
        &file_label,
        dry_run,
        &local,
        Some(&report),
    ))
}
