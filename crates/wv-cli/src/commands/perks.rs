use serde::Serialize;
use wv_core::gate::policy;
use wv_core::perks::{LevelPerks, LockTeaser, level_perks};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PerksReport {
    #[serde(flatten)]
    perks: &'static LevelPerks,
    locked: Vec<LockTeaser>,
}

/// Handle `wvai perks`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let locked = policy(ctx.level)
        .locked_insights()
        .iter()
        .map(|locked| LockTeaser::for_locked(ctx.level, locked))
        .collect();

    output(
        &PerksReport {
            perks: level_perks(ctx.level),
            locked,
        },
        flags.format,
    )
}
