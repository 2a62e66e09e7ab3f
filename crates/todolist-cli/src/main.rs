mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use todolist_core::AppConfig;
use todolist_domain::DescriptionPolicy;
use todolist_persistence::{JsonFileStore, TaskStore};
use todolist_tui::App;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.is_none())?;

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "todolist", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let policy = DescriptionPolicy::from(config.effective_require_description());
    let file_path = match storage_path(cli.file, &config) {
        Some(path) => path,
        None => output::output_error("No storage location: pass --file or set TODOLIST_FILE"),
    };
    tracing::debug!("Using storage file {}", file_path.display());

    match cli.command {
        None => {
            let backend = JsonFileStore::open(&file_path).await?;
            let store = TaskStore::load(backend, policy).await?;
            let mut app = App::new(store);
            app.run().await?;
        }
        Some(cmd) => {
            if let Err(e) = run_command(&file_path, policy, cmd).await {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum LogTarget {
    File(PathBuf),
    Stderr,
    Off,
}

/// Nothing goes to stderr while the TUI owns the terminal; `TODOLIST_DEBUG_LOG`
/// captures its logs in a file instead.
fn log_target(debug_log: Option<PathBuf>, tui: bool) -> LogTarget {
    match debug_log {
        Some(path) => LogTarget::File(path),
        None if tui => LogTarget::Off,
        None => LogTarget::Stderr,
    }
}

fn init_logging(tui: bool) -> anyhow::Result<()> {
    let debug_log = std::env::var_os("TODOLIST_DEBUG_LOG").map(PathBuf::from);
    match log_target(debug_log, tui) {
        LogTarget::File(log_path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)?;

            tracing_subscriber::fmt()
                .with_writer(log_file)
                .with_max_level(tracing::Level::DEBUG)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}

fn storage_path(flag: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    flag.or_else(|| config.effective_storage_file())
}

async fn run_command(
    file_path: &Path,
    policy: DescriptionPolicy,
    cmd: Commands,
) -> anyhow::Result<()> {
    let backend = JsonFileStore::open(file_path).await?;
    let mut store = TaskStore::load(backend, policy).await?;

    match cmd {
        Commands::Add(args) => handlers::task::add(&mut store, args).await,
        Commands::List(args) => handlers::task::list(&store, args),
        Commands::Get { id } => handlers::task::get(&store, id),
        Commands::Delete { id } => handlers::task::delete(&mut store, id).await,
        Commands::Done { id } => handlers::task::toggle_done(&mut store, id).await,
        Commands::ToggleEdit { id } => handlers::task::toggle_edit(&mut store, id).await,
        Commands::Edit(args) => handlers::task::edit(&mut store, args).await,
        Commands::Theme { action } => handlers::theme::handle(&mut store, action).await,
        Commands::Completions { .. } => Ok(()),
    }
}
