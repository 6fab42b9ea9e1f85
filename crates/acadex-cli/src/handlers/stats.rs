use anyhow::Result;

use crate::args::OutputFormat;
use crate::context::ExecutionContext;
use crate::handlers::{HandlerContext, describe};
use crate::presentation::presenters;

pub async fn handle(exec: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let ctx = HandlerContext::new(format);
    let client = exec.client()?;
    let stats = client.stats().await.map_err(describe)?;
    ctx.render(presenters::present_stats(client.base_url(), &stats))
}
