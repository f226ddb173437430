mod cli;

use crate::cli::app::App;
use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tasklist::{AppConfig, StoreKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Interactive single-user task list")]
struct Cli {
    /// Where tasks are kept
    #[arg(long, value_enum, default_value_t = StoreKind::File)]
    store: StoreKind,

    /// Data file for the file store (defaults to the per-user data directory)
    #[arg(long, env = "TASKLIST_DATA_FILE")]
    data_file: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        let config = AppConfig::new().store(self.store);
        match self.data_file {
            Some(path) => config.data_file(path),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config();
    let manager = tasklist::open(&config).context("Failed to set up task storage")?;

    let mut app = App::new(manager);
    app.run(io::stdin().lock(), io::stdout().lock())
        .context("Terminal I/O failed")?;
    Ok(())
}
