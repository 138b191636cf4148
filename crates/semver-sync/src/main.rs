use clap::Parser;
use semver_sync::{SyncOptions, render_duplicates, sync};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Reconcile duplicate dependency ranges across the packages of a monorepo.
#[derive(Debug, Parser)]
#[command(name = "semver-sync", version, about)]
struct Cli {
    /// Glob selecting package manifests, relative to the current directory
    #[arg(default_value = semver_sync::DEFAULT_PATTERN)]
    pattern: String,

    /// Leave the root package.json out of the run
    #[arg(long)]
    no_root: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = SyncOptions {
        pattern: cli.pattern,
        include_root: !cli.no_root,
    };

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("error: cannot determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    match sync(&root, &options) {
        Ok(report) => {
            if let Some(text) = render_duplicates(&report.duplicates) {
                println!("{text}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
