use std::process;

use clap::Parser;
use colored::Colorize;
use mfeindex::{bundle::IndexBundle, cli::Args, config::Config, orchestrator::IndexOutcome};
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let args = Args::parse();

    let config = Config::from_args(args).unwrap_or_else(|e| {
        eprintln!(
            "{}\n {}",
            "Problem parsing arguments:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    });

    init_tracing(&config);

    if config.status_only {
        if IndexBundle::new(&config.path).is_indexed() {
            println!("{}: {}", "indexed".bold(), config.path.display());
            return;
        }
        println!("{}: {}", "not indexed".bold(), config.path.display());
        process::exit(1);
    }

    match config.indexer().ensure(&config.path) {
        Ok(IndexOutcome::AlreadyIndexed) => {
            tracing::info!("Index already exists: {}", config.path.display());
        }
        Ok(IndexOutcome::Built(_)) => {}
        Err(e) => {
            eprintln!("{}\n {}", "Error:".red().bold(), e.to_string().red());
            process::exit(1);
        }
    }
}

/// Progress goes to stderr; `RUST_LOG` overrides the level picked by flags.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
