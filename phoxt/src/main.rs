//! Phoxt CLI - command-line driver for the Phox lexical front end.
//!
//! Lists tokens, prints compiled string literals, and checks files for
//! literal errors.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_strings, run_tokens, CheckArgs, StringsArgs, TokensArgs};
use config::Config;
use error::{PhoxtError, Result};

/// Phoxt - inspect PHP-style sources with the Phox front end
#[derive(Parser, Debug)]
#[command(name = "phoxt")]
#[command(author = "Phox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect PHP-style sources with the Phox front end", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PHOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PHOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PHOXT_NO_COLOR")]
    no_color: bool,

    /// Capacity of the scanner's token channel (default: from config)
    #[arg(long, global = true)]
    channel_capacity: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the phoxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every token of a file
    ///
    /// Prints `line:col KIND data` per token, or a JSON array with
    /// `--format json`.
    Tokens(TokensCommand),

    /// Compile every string literal of a file
    ///
    /// Prints each literal's expression tree, or its compile error, next to
    /// its location.
    Strings(StringsCommand),

    /// Check files for literal errors
    ///
    /// Exits non-zero if any file has problems.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the strings subcommand.
#[derive(Parser, Debug)]
struct StringsCommand {
    /// Source file to compile
    input: PathBuf,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref()).context("could not load configuration")?;

    execute_command(cli.command, cli.channel_capacity, config)?;
    Ok(())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PhoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command with flags layered over `config`.
fn execute_command(command: Commands, channel_capacity: Option<usize>, config: Config) -> Result<()> {
    let mut lexer = config.lexer.clone();
    if let Some(capacity) = channel_capacity {
        lexer.channel_capacity = capacity;
    }

    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            input: args.input,
            format: args.format.unwrap_or(config.output.format),
            lexer,
        }),
        Commands::Strings(args) => run_strings(StringsArgs {
            input: args.input,
            lexer,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            inputs: args.inputs,
            jobs: args.jobs.unwrap_or(config.check.jobs),
            lexer,
        }),
    }
}
