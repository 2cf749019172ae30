use clap::Parser;
use wv_core::Level;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `wvai` binary.
#[derive(Debug, Parser)]
#[command(name = "wvai", version, about = "WagerVS intel - level-gated AI insights")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// User level 1-4 (defaults to general.default_level)
    #[arg(short, long, global = true)]
    pub level: Option<Level>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            level: self.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use wv_core::Level;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["wvai", "--format", "raw", "--level", "3", "--verbose", "tone"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.level, Some(Level::Strategist));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Tone));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["wvai", "perks", "-l", "2", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.global_flags().level, Some(Level::Creator));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Perks));
    }

    #[test]
    fn level_outside_range_is_rejected() {
        for value in ["0", "5", "elite"] {
            assert!(Cli::try_parse_from(["wvai", "--level", value, "tone"]).is_err());
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["wvai", "--format", "table", "tone"]).is_err());
    }

    #[test]
    fn chat_collects_repeated_pools() {
        let cli = Cli::try_parse_from([
            "wvai",
            "chat",
            "why is SOL pumping?",
            "--pool",
            "sol-30m",
            "--pool",
            "eth-1h",
            "--category",
            "Crypto",
        ])
        .expect("cli should parse");

        let Commands::Chat(args) = cli.command else {
            panic!("expected chat");
        };
        assert_eq!(args.message, "why is SOL pumping?");
        assert_eq!(args.pools, vec!["sol-30m", "eth-1h"]);
        assert_eq!(args.category.as_deref(), Some("Crypto"));
    }

    #[test]
    fn gate_and_draft_options() {
        let cli = Cli::try_parse_from(["wvai", "gate", "--input", "insight.json", "--strict"])
            .expect("cli should parse");
        let Commands::Gate(args) = cli.command else {
            panic!("expected gate");
        };
        assert!(args.strict);
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("insight.json")));

        let cli = Cli::try_parse_from(["wvai", "draft", "rain in Austin?", "--duration", "4h"])
            .expect("cli should parse");
        let Commands::Draft(args) = cli.command else {
            panic!("expected draft");
        };
        assert_eq!(args.duration.as_deref(), Some("4h"));
    }

    #[test]
    fn schema_name_is_optional() {
        let cli = Cli::try_parse_from(["wvai", "schema"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Schema(ref args) if args.name.is_none()));
    }
}
