use wv_core::api::ChatRequest;
use wv_intel::IntelService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wvai chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = ChatRequest {
        user_id: ctx.user_id().to_string(),
        level: ctx.level,
        message: args.message.clone(),
        context_category: args.category.clone(),
        active_pool_ids: args.pools.clone(),
    };
    let response = ctx.backend()?.chat(&request).await?;
    output(&response, flags.format)
}
