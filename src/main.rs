//! dynkey - Dynamic keyboard layout compiler
//!
//! Compiles keyboard definition files into placement grids and reports
//! problems in them.

use clap::{Parser, Subcommand};
use dynkey::cli::{CompileArgs, ExitCode, KeyboardsArgs, ValidateArgs};
use dynkey::config::Config;
use dynkey::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// dynkey - Dynamic keyboard layout compiler
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a keyboard definition and print the resulting grid
    Compile(CompileArgs),
    /// Validate a keyboard definition
    Validate(ValidateArgs),
    /// List named keyboard destinations
    Keyboards(KeyboardsArgs),
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    result.unwrap_or_else(|err| {
        eprintln!("Warning: ignoring configuration: {err:#}");
        Config::default()
    })
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());

    // Initialize tracing
    let filter = if cli.verbose || config.ui.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    let result = match &cli.command {
        Command::Compile(args) => args.execute(&config),
        Command::Validate(args) => args.execute(&config),
        Command::Keyboards(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
    std::process::exit(ExitCode::Success.code());
}
