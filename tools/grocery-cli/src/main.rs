//! Grocery CLI - inspect grocery orders loaded from a CSV data file.
//!
//! Commands:
//! - `grocery list` - List orders with their totals
//! - `grocery show <id>` - Show one order's products and pricing
//! - `grocery total <id>` - Print one order's tax-inclusive total
//! - `grocery config show` - Print the effective configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, ListArgs, ShowArgs, TotalArgs};

/// Grocery CLI - inspect grocery orders
#[derive(Parser)]
#[command(name = "grocery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Orders CSV file (overrides the config file)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List orders
    List(ListArgs),

    /// Show a single order
    Show(ShowArgs),

    /// Print an order's total
    Total(TotalArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.data, output)?;

    init_logging(&ctx.config.logging.level, ctx.output.is_verbose());
    tracing::debug!(data = %ctx.config.data.path.display(), "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Total(args) => commands::total::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the
/// configured level; `--verbose` raises the default to `debug`.
fn init_logging(level: &str, verbose: bool) {
    let default = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
