use std::path::PathBuf;

use anyhow::Result;

use acadex_client::{Client, TutorialQuery, TutorialScope};

use crate::args::{OutputFormat, PageArgs, ScopeArgs};
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

/// Turn `--subject`, `--course` or `--path` into a tutorial scope. A path
/// ending at a subject scopes to that subject; one ending at a course
/// scopes to the course (older uploads live there).
async fn scope_from_args(client: &Client, args: &ScopeArgs) -> Result<TutorialScope> {
    if let Some(subject) = &args.subject {
        return Ok(TutorialScope::Subject(subject.clone()));
    }
    if let Some(course) = &args.course {
        return Ok(TutorialScope::Course(course.clone()));
    }
    let Some(path) = &args.path else {
        anyhow::bail!("one of --subject, --course or --path is required");
    };

    let resolved = acadex_core::resolve_path(&client.catalog(), path).await?;
    if let Some(subject) = resolved.subject_id() {
        return Ok(TutorialScope::Subject(subject.to_string()));
    }
    if let Some(course) = resolved.course_id() {
        return Ok(TutorialScope::Course(course.to_string()));
    }
    let stop = resolved
        .deepest()
        .map(|segment| segment.level.to_string())
        .unwrap_or_else(|| "nothing".to_string());
    anyhow::bail!(
        "'{}' resolves to a {}; tutorials live under courses and subjects",
        path,
        stop
    )
}

fn scope_label(scope: &TutorialScope) -> String {
    match scope {
        TutorialScope::Subject(id) => format!("subject {}", id),
        TutorialScope::Course(id) => format!("course {}", id),
    }
}

pub async fn list(
    exec: &ExecutionContext,
    scope: ScopeArgs,
    q: Option<String>,
    published: Option<bool>,
    page: PageArgs,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let scope = scope_from_args(&client, &scope).await?;
    let query = TutorialQuery {
        q,
        published,
        page: Some(page.page),
        limit: Some(page.limit.unwrap_or(exec.page_size()?)),
    };
    let result = client
        .tutorials()
        .list(&scope, &query)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_tutorial_list(
        &scope_label(&scope),
        &result,
        page.page,
    ))
}

pub async fn upload(
    exec: &ExecutionContext,
    file: PathBuf,
    title: String,
    description: Option<String>,
    scope: ScopeArgs,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let scope = scope_from_args(&client, &scope).await?;
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("tutorial.pdf");
    let pdf_bytes = std::fs::read(&file)?;
    let size = pdf_bytes.len();
    client
        .tutorials()
        .upload(&scope, &title, description.as_deref(), file_name, pdf_bytes)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_tutorial_uploaded(
        &title,
        &scope_label(&scope),
        &file.display().to_string(),
        size,
    ))
}

pub async fn update(
    exec: &ExecutionContext,
    id: String,
    title: Option<String>,
    description: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    if title.is_none() && description.is_none() {
        anyhow::bail!("nothing to update (pass --title or --description)");
    }

    let client = exec.client()?;
    client
        .tutorials()
        .update(&id, title.as_deref(), description.as_deref())
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_tutorial_updated(&id))
}

pub async fn set_published(
    exec: &ExecutionContext,
    id: String,
    published: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .tutorials()
        .set_published(&id, published)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_tutorial_published(&id, published))
}

pub async fn delete(
    exec: &ExecutionContext,
    id: String,
    yes: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    if !yes {
        anyhow::bail!("refusing to delete tutorial {} without --yes", id);
    }

    let client = exec.client()?;
    client.tutorials().delete(&id).await.map_err(describe)?;
    ctx.render(presenters::present_tutorial_deleted(&id))
}
