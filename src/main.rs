mod batch;
mod cli;
mod config;
mod formula;
mod model;
mod package;

use std::{env, process};

use tracing_subscriber::EnvFilter;

use config::Config;

fn main() {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so summaries on stdout stay clean.
///
/// The filter comes from `STRIDE_LOG`, then `RUST_LOG`, then the config file.
fn init_logging(config: &Config) {
    let filter = env::var("STRIDE_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .ok()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "warn".to_string());

    let env_filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!(%filter, "logging initialized");
}
