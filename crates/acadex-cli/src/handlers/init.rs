use anyhow::Result;

use crate::args::OutputFormat;
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;

pub fn handle(
    exec: &ExecutionContext,
    server: Option<String>,
    force: bool,
    format: OutputFormat,
) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let path = exec.config_path();
    let existed = path.exists();

    if existed && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = Config::default();
    if let Some(server) = server {
        config.server.base_url = server;
    }
    config.save_to(&path)?;

    let view_model = presenters::present_init(
        &path.display().to_string(),
        &config.server.base_url,
        !existed,
    );
    ctx.render(view_model)
}
