use anyhow::Context;
use clap::Parser;
use quoterm::catalog::{Catalog, CategoryFilter};
use quoterm::config::Config;
use quoterm::session::Session;
use quoterm::share::SystemShare;
use quoterm::storage::JsonFileStore;
use quoterm::ui::{self, UiTimings};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quoterm", version, about = "Random quote viewer for the terminal")]
struct Cli {
    /// Path to the config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Starting category filter (all, success, love, coding, life, motivation)
    #[arg(long, value_name = "TAG")]
    category: Option<String>,

    /// Directory for favorites and the log file
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match &cli.category {
        Some(tag) => tag.parse::<CategoryFilter>()?,
        None => CategoryFilter::All,
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory '{}'", data_dir.display()))?;

    init_logging(&data_dir);
    tracing::info!(data_dir = %data_dir.display(), category = %filter, "starting quoterm");

    let store = JsonFileStore::new(&data_dir);
    let session = Session::new(Catalog::builtin(), Box::new(store), filter);
    let timings = UiTimings::from_config(&config.ui);

    ui::run(session, Box::new(SystemShare::new()), timings).context("terminal UI failed")?;
    Ok(())
}

/// File-based logging: the terminal belongs to the TUI, so nothing may be
/// written to stdout or stderr while it runs.
fn init_logging(data_dir: &Path) {
    let log_path = data_dir.join("quoterm.log");
    let Ok(log_file) = File::create(&log_path) else {
        return;
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(log_file)
        .try_init();
}
