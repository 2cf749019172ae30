use serde::Serialize;
use wv_core::{Level, ai_tone, can_create_wager_from_ai};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToneReport {
    level: Level,
    name: &'static str,
    tone: &'static str,
    can_create_wager_from_ai: bool,
}

/// Handle `wvai tone`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let level = ctx.level;
    output(
        &ToneReport {
            level,
            name: level.name(),
            tone: ai_tone(level),
            can_create_wager_from_ai: can_create_wager_from_ai(level),
        },
        flags.format,
    )
}
