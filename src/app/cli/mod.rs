//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, BootstrapOverrides};
use crate::domain::AppError;
use crate::domain::workflow::DEFAULT_REMOTE;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "DEVSYNC_LOG";

#[derive(Parser)]
#[command(name = "devsync")]
#[command(version)]
#[command(
    about = "Scaffold a daily-commit GitHub Actions workflow, push it, and trigger it",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write, commit, push, and dispatch the workflow (default)
    #[clap(visible_alias = "b")]
    Bootstrap {
        /// Do not dispatch the workflow after pushing
        #[arg(long)]
        no_dispatch: bool,
        /// Read configuration from this file instead of devsync.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Remote whose URL is printed
        #[arg(short, long)]
        remote: Option<String>,
    },
    /// Write the workflow file only
    #[clap(visible_alias = "e")]
    Emit,
    /// Dispatch the workflow through the GitHub CLI
    #[clap(visible_alias = "d")]
    Dispatch,
    /// Print the repository and Actions page URLs
    #[clap(visible_alias = "u")]
    Url {
        /// Remote to resolve
        #[arg(short, long, default_value = DEFAULT_REMOTE)]
        remote: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing();

    let result: Result<i32, AppError> = match cli.command {
        None => run_bootstrap(BootstrapOverrides::default()),
        Some(Commands::Bootstrap { no_dispatch, config, remote }) => {
            run_bootstrap(BootstrapOverrides { config, no_dispatch, remote })
        }
        Some(Commands::Emit) => run_emit().map(|_| 0),
        Some(Commands::Dispatch) => Ok(run_dispatch()),
        Some(Commands::Url { remote }) => run_url(&remote).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_bootstrap(overrides: BootstrapOverrides) -> Result<i32, AppError> {
    let report = api::bootstrap(&overrides)?;
    Ok(if report.success() { 0 } else { 1 })
}

fn run_emit() -> Result<(), AppError> {
    let path = api::emit()?;
    println!("✓ Created workflow file: {}", path);
    Ok(())
}

fn run_dispatch() -> i32 {
    if api::dispatch().is_dispatched() { 0 } else { 1 }
}

fn run_url(remote: &str) -> Result<(), AppError> {
    let url = api::repository_url(remote)?.ok_or_else(|| AppError::RemoteNotFound(remote.into()))?;
    println!("Repository URL: {}", url);
    println!("Actions page: {}", url.actions_page());
    Ok(())
}
