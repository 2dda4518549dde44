//! CLI entry point for taskline.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod repl;
mod storage;
mod ui;

use config::Config;
use repl::Session;
use storage::TaskFile;
use taskline_core::TaskList;
use ui::Frame;

/// Line-oriented task-tracking assistant.
#[derive(Parser, Debug)]
#[command(
    name = "taskline",
    version,
    about = "taskline: a line-oriented task-tracking assistant"
)]
struct Cli {
    /// Path to the JSON task file (overrides the configured location).
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the greeting banner.
    #[arg(long)]
    no_banner: bool,

    /// Keep tasks in memory only; nothing is read from or written to disk.
    #[arg(long)]
    memory: bool,
}

fn main() -> Result<()> {
    install_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let store = task_file(&cli, &config);
    let tasks = match &store {
        Some(store) => store.load()?,
        None => TaskList::new(),
    };

    let frame = Frame::new(config.border_width);
    let banner = config.banner && !cli.no_banner;
    let mut session = Session::new(tasks, frame, banner, store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

fn task_file(cli: &Cli, config: &Config) -> Option<TaskFile> {
    if cli.memory {
        return None;
    }
    let path = cli.data_file.clone().unwrap_or_else(|| config.data_file.clone());
    Some(TaskFile::new(path))
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}
