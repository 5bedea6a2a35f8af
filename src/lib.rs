//! bikeshare library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Cli;
use config::Config;
use errors::AppResult;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Stderr logging; `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // a second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Resolve the configuration from the config file and CLI overrides.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.to_string_lossy().to_string();
    }

    debug!(?cfg, "configuration resolved");
    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once
    let cfg = resolve_config(&cli)?;

    // 3️⃣ interactive loop on the terminal
    let stdin = io::stdin();
    let mut session = crate::core::Session::new(stdin.lock(), io::stdout().lock(), cfg);
    session.run()
}
