use wv_core::api::InsightRequest;
use wv_intel::IntelService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InsightArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wvai insight`.
pub async fn handle(
    args: &InsightArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = InsightRequest {
        user_id: ctx.user_id().to_string(),
        level: ctx.level,
        pool_id: args.pool_id.clone(),
    };
    let response = ctx.backend()?.insight(&request).await?;
    output(&response, flags.format)
}
