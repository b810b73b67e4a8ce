//! Flags that shape a session rather than a single command.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Session flags, flattened into [`super::Cli`].
#[derive(Debug, Default, Args)]
#[command(next_help_heading = "Session")]
pub struct GlobalArgs {
    /// Log more to stderr (-v info, -vv debug, -vvv trace); -v also prints
    /// hints under prompt errors
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Hide the banner and prompt; replies are still printed
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE (TOML) instead of the platform config dir
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How replies are rendered; json applies to `all` and `birthdays`
    #[arg(long, value_enum, default_value_t)]
    pub output_format: OutputFormat,

    /// Look-ahead for `birthdays` without an argument, overriding the config
    #[arg(short, long, value_name = "DAYS")]
    pub days: Option<u32>,
}

/// Reply rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise
    #[default]
    Auto,
    /// Coloured text
    Human,
    /// Uncoloured text
    Plain,
    /// JSON for listings, text for everything else
    Json,
}
