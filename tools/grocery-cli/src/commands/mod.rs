//! CLI command implementations.

pub mod config;
pub mod list;
pub mod show;
pub mod total;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show only the first N orders.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Order id.
    pub id: u32,
}

/// Arguments for the total command.
#[derive(Args)]
pub struct TotalArgs {
    /// Order id.
    pub id: u32,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
}
