use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod ean;
mod inventory;
mod staging;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_logging(wants_verbose(&args.command));
    match &args.command {
        Command::Fill(args) => workflow::run_fill(args),
        Command::Labels(args) => workflow::run_labels(args),
        Command::Check(args) => workflow::run_check(args),
        Command::Gen(args) => workflow::run_gen(args),
    }
}

fn wants_verbose(command: &Command) -> bool {
    match command {
        Command::Fill(args) => args.verbose,
        Command::Labels(args) => args.verbose,
        Command::Check(args) => args.verbose,
        Command::Gen(_) => false,
    }
}

/// Logs go to stderr so stdout stays parseable for `gen` and `check --json`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
