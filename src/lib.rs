//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function and the building
//! blocks of a session (lookup tables, loader, statistics, reports).

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod models;
pub mod report;
pub mod stats;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::AppResult;
use std::path::Path;
use ui::Console;
use ui::messages::warning;

/// Resolve the configuration: config file first, then command-line overrides.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(size) = cli.page_size {
        cfg.page_size = size;
    }
    if cli.no_timing {
        cfg.show_timing = false;
    }

    cfg.validate()?;
    tracing::debug!(?cfg, "configuration resolved");
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ config file + overrides
    let cfg = resolve_config(&cli)?;

    let data_dir = cfg.data_path();
    if !data_dir.is_dir() {
        warning(format!(
            "Data directory '{}' does not exist",
            data_dir.display()
        ));
    }

    // 3️⃣ interactive session on stdin/stdout
    let mut console = Console::stdio();
    crate::core::session::run_session(&mut console, &cfg)?;
    Ok(())
}
