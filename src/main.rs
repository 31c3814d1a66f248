//! barista-configure - package skeleton configurator
//!
//! Run once inside a freshly cloned package skeleton: asks for the package
//! details, rewrites composer.json and README.md to replace the skeleton's
//! placeholder vendor and package names, then removes the bootstrap script.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod identity;
mod project;
mod prompt;
mod rewrite;
mod transaction;
mod ui;

use cli::{Cli, Commands, ConfigureArgs};

/// Route tracing output to stderr; `--verbose` turns on debug events
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "barista_configure=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => commands::configure::run(cli.dir, cli.config, ConfigureArgs::default()),
        Some(Commands::Configure(args)) => commands::configure::run(cli.dir, cli.config, args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
