//! `primer-tui`: terminal client for browsing student housing listings.
//!
//! Boots once (listings, banner copy, approximate location), then hands
//! everything to `primer_core::Controller` and renders the `Screen` it
//! describes. Pages are reachable via number keys (1-4): Home, Browse,
//! Favorites and Profile.
//!
//! Logs are written to a file (default `/tmp/primer-tui.log`) to avoid
//! corrupting the terminal UI.

mod action;
mod app;
mod component;
mod event;
mod input;
mod screens;
mod theme;
mod tui;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use primer_api::{FeedClient, TransportConfig};
use primer_core::{BootConfig, Controller, FileStore, MemoryStore, SharedKv};

use crate::app::App;
use crate::event::EventReader;

/// Browse student housing near your campus.
#[derive(Parser, Debug)]
#[command(name = "primer-tui", version, about)]
struct Cli {
    /// Page to open first (home, browse, favorites, profile)
    #[arg(short, long, default_value = "home")]
    page: String,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip all network access: built-in listings and default location
    #[arg(long)]
    offline: bool,

    /// Log file path (defaults to /tmp/primer-tui.log)
    #[arg(long, default_value = "/tmp/primer-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr; that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "primer_tui={log_level},primer_core={log_level},primer_api={log_level}"
        ))
    });

    let log_dir = cli.log_file.parent().unwrap_or(Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("primer-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Saved state lives in a JSON file; if it cannot be opened the session
/// still runs, it just forgets everything on exit.
fn open_storage(path: &Path) -> SharedKv {
    match FileStore::open(path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "saved state unavailable, using memory");
            Arc::new(MemoryStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks(&cli.log_file)?;
    let _log_guard = setup_tracing(&cli);

    let config = match &cli.config {
        Some(path) => primer_config::load_config_from(path)?,
        None => primer_config::load_config_or_default(),
    };
    let boot_config = if cli.offline {
        BootConfig::offline()
    } else {
        config.to_boot_config()?
    };

    info!(page = %cli.page, offline = cli.offline, "starting primer-tui");

    let transport = TransportConfig::default().with_timeout(config.data_timeout());
    let client = FeedClient::new(&transport)?;
    let outcome = primer_core::boot(&client, &boot_config).await;
    let storage = open_storage(&config.storage_path());

    let events = EventReader::new();
    let driver = event::banner_driver(events.sender());

    let controller = Controller::new(outcome, storage, driver, &cli.page);
    let mut app = App::new(controller);
    app.run(events).await?;

    Ok(())
}
