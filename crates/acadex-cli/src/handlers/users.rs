use std::path::PathBuf;

use anyhow::Result;

use acadex_client::UserQuery;
use acadex_types::Role;

use crate::args::{OutputFormat, PageArgs, RoleArg, StatusFilter};
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

pub async fn list(
    exec: &ExecutionContext,
    q: Option<String>,
    role: Option<RoleArg>,
    status: StatusFilter,
    sort: Option<String>,
    page: PageArgs,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let filtered = q.is_some() || role.is_some() || status.as_query().is_some();
    let query = UserQuery {
        q,
        role: role.map(Role::from),
        active: status.as_query(),
        page: Some(page.page),
        limit: Some(page.limit.unwrap_or(exec.page_size()?)),
        sort,
    };
    let result = client.users().list(&query).await.map_err(describe)?;
    ctx.render(presenters::present_user_list(&result, page.page, filtered))
}

pub async fn set_role(
    exec: &ExecutionContext,
    id: String,
    role: RoleArg,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let role = Role::from(role);
    client.users().set_role(&id, role).await.map_err(describe)?;
    ctx.render(presenters::present_user_role_set(&id, role))
}

pub async fn set_status(
    exec: &ExecutionContext,
    id: String,
    active: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    client
        .users()
        .set_status(&id, active)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_user_status_set(&id, active))
}

pub async fn delete(
    exec: &ExecutionContext,
    id: String,
    yes: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    if !yes {
        anyhow::bail!("refusing to delete account {} without --yes", id);
    }

    let client = exec.client()?;
    client.users().delete(&id).await.map_err(describe)?;
    ctx.render(presenters::present_user_deleted(&id))
}

pub async fn export(
    exec: &ExecutionContext,
    output: PathBuf,
    q: Option<String>,
    role: Option<RoleArg>,
    status: StatusFilter,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;

    let query = UserQuery {
        q,
        role: role.map(Role::from),
        active: status.as_query(),
        ..Default::default()
    };
    let bytes = client.users().export_csv(&query).await.map_err(describe)?;
    std::fs::write(&output, &bytes)?;

    let view_model = presenters::present_users_exported(&output.display().to_string(), bytes.len());
    ctx.render(view_model)
}
