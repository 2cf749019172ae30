use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Gate(args) => commands::gate::handle(&args, ctx, flags),
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags).await,
        Commands::Insight(args) => commands::insight::handle(&args, ctx, flags).await,
        Commands::Draft(args) => commands::draft::handle(&args, ctx, flags).await,
        Commands::Perks => commands::perks::handle(ctx, flags),
        Commands::Tone => commands::tone::handle(ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
