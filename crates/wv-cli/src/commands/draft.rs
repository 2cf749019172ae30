use wv_core::api::GenerateUserWagerRequest;
use wv_intel::IntelService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DraftArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wvai draft`.
pub async fn handle(args: &DraftArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = GenerateUserWagerRequest {
        user_id: ctx.user_id().to_string(),
        level: ctx.level,
        prompt: args.prompt.clone(),
        duration: args.duration.clone(),
    };
    let response = ctx.backend()?.draft_user_wager(&request).await?;
    if !response.can_create {
        tracing::info!(level = %ctx.level, "wager drafting is locked at this level");
    }
    output(&response, flags.format)
}
