use std::io::Write;

use anyhow::Result;

use acadex_client::{RegisterRequest, Session};
use acadex_types::Role;

use crate::args::{OutputFormat, PromoteRoleArg};
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

fn prompt_password(label: &str) -> Result<String> {
    eprint!("{}: ", label);
    std::io::stderr().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password cannot be empty");
    }
    Ok(password)
}

pub async fn login(
    exec: &ExecutionContext,
    identifier: String,
    password: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password")?,
    };

    let client = exec.client()?;
    let token = client
        .auth()
        .login(&identifier, &password)
        .await
        .map_err(describe)?;
    Session::new(token, identifier.clone()).save(exec.data_dir())?;

    let view_model = presenters::present_login(&identifier, client.base_url());
    ctx.render(view_model)
}

pub fn logout(exec: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let existed = Session::clear(exec.data_dir())?;
    ctx.render(presenters::present_logout(existed))
}

pub async fn whoami(exec: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    if !client.is_authenticated() {
        anyhow::bail!("no stored session (run 'acadex login' first)");
    }

    let user = client.auth().me().await.map_err(describe)?;
    ctx.render(presenters::present_profile(&user))
}

pub async fn register(
    exec: &ExecutionContext,
    name: String,
    username: String,
    email: String,
    password: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let password = match password {
        Some(password) => password,
        None => {
            let first = prompt_password("Password")?;
            let second = prompt_password("Confirm password")?;
            if first != second {
                anyhow::bail!("passwords do not match");
            }
            first
        }
    };

    let client = exec.client()?;
    let request = RegisterRequest {
        name: name.clone(),
        username: username.clone(),
        email: email.clone(),
        password,
    };
    let token = client.auth().register(&request).await.map_err(describe)?;
    Session::new(token, username.clone()).save(exec.data_dir())?;

    let view_model = presenters::present_register(
        &name,
        &username,
        &email,
        client.base_url(),
        "Account created and signed in.".to_string(),
    );
    ctx.render(view_model)
}

pub async fn promote(
    exec: &ExecutionContext,
    role: PromoteRoleArg,
    code: String,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    if !client.is_authenticated() {
        anyhow::bail!("no stored session (run 'acadex login' first)");
    }

    let role = Role::from(role);
    let message = client
        .auth()
        .promote_self(role, &code)
        .await
        .map_err(describe)?;
    ctx.render(presenters::present_promote(&role.to_string(), message))
}
