use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

mod commands;

/// Default log directives. Targets are crate names with underscores.
const LOG_DIRECTIVES: [&str; 2] = ["sustain_client=info", "sustain_store=info"];

#[derive(Parser)]
#[command(
    name = "sustain",
    about = "Sustain — initiative catalog tooling",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate the record store with the seed catalog.
    ///
    /// Idempotent: ids are derived from titles, so re-running rewrites
    /// the same records instead of duplicating them.
    Seed {
        /// Data directory containing the store file.
        #[arg(long, default_value = "/var/lib/sustain")]
        data_dir: PathBuf,
    },
    /// Fetch all six categories from a running daemon and render the
    /// merged list.
    Fetch {
        /// API address (host:port).
        #[arg(long, env = "SUSTAIN_API_ADDR", default_value = "127.0.0.1:3001")]
        address: String,
        /// Per-request timeout in seconds.
        #[arg(long, default_value = "10")]
        timeout: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { data_dir } => commands::seed::run(&data_dir),
        Commands::Fetch { address, timeout } => {
            commands::fetch::run(&address, Duration::from_secs(timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_directives_target_library_crates() {
        for directive in LOG_DIRECTIVES {
            // Crate targets use underscores; hyphenated names never match.
            assert!(!directive.contains('-'));
            assert!(
                directive
                    .parse::<tracing_subscriber::filter::Directive>()
                    .is_ok()
            );
        }
    }
}
