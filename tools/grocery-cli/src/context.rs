//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use grocery_orders::OrderRepository;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one above
    /// the working directory. `data_override` replaces `data.path` as given.
    pub fn load(
        config_path: Option<&Path>,
        data_override: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                let mut config = CliConfig::load(path)?;
                if let Some(dir) = path.parent() {
                    config.resolve_paths(dir);
                }
                config
            }
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                CliConfig::discover(&cwd)?.unwrap_or_default()
            }
        };

        if let Some(path) = data_override {
            config.data.path = path;
        }

        Ok(Self { config, output })
    }

    /// Repository over the configured data file.
    pub fn repository(&self) -> OrderRepository {
        OrderRepository::from_path(&self.config.data.path)
    }
}
