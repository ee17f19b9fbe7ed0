//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config defaults are resolved in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override (pretty, table, json)
    pub format: Option<OutputFormat>,

    /// Organization ID override (bypasses config file)
    pub org: Option<String>,

    /// Custom config file path (defaults to ~/.folderop/config.yaml)
    pub config: Option<String>,

    /// Folder dataset file override (bypasses config file)
    pub dataset: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            config: cli.config.clone(),
            dataset: cli.dataset.clone(),
        }
    }

    /// Get organization override as `Option<&str>`.
    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
