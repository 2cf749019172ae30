use std::io::Read;

use anyhow::{Context, bail};
use wv_core::visible_insight;
use wv_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GateArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `wvai gate`.
pub fn handle(args: &GateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read insight from stdin")?;
            buf
        }
    };

    let registry = SchemaRegistry::new();
    let full = registry
        .decode_full_insight(&raw)
        .context("input is not a valid full insight")?;

    if args.strict {
        let issues = full.check();
        if !issues.is_empty() {
            let listed = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            bail!("inconsistent insight: {listed}");
        }
    }

    output(&visible_insight(ctx.level, &full), flags.format)
}
