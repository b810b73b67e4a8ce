//! Diagnostics on stderr.
//!
//! stdout belongs to the conversation, so every log line goes to stderr. The
//! default filter covers the three workspace crates at a level picked by
//! `-v` / `-q`; a `RUST_LOG` directive replaces it wholesale.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

const LOG_TARGETS: [&str; 3] = ["addrbook", "addrbook_core", "addrbook_adapters"];

/// Install the stderr subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity(args))));

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("tracing subscriber already installed")
}

/// `-q` pins ERROR; otherwise WARN, raised one step per `-v`.
fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            ..Default::default()
        }
    }

    #[test]
    fn each_v_raises_the_level() {
        let levels: Vec<_> = (0..=4).map(|v| verbosity(&args(v, false))).collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE,
            ]
        );
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(verbosity(&args(0, true)), LevelFilter::ERROR);
        assert_eq!(verbosity(&args(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_every_workspace_crate() {
        let rendered = directives(LevelFilter::DEBUG).to_lowercase();
        assert_eq!(
            rendered,
            "addrbook=debug,addrbook_core=debug,addrbook_adapters=debug"
        );
        assert!(rendered.parse::<EnvFilter>().is_ok());
    }
}
