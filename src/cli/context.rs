//! Command execution context
//!
//! Resolves config, dataset and output format once so folder commands only
//! deal with the fetch itself.

use std::path::PathBuf;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::folders::{DEFAULT_ORG_ID, FolderSource, dataset};

/// Context for command execution containing config, folder source and output format.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Folder dataset the command reads from
    pub source: Box<dyn FolderSource>,
    /// Dataset file, `None` for the built-in sample data
    pub dataset_path: Option<PathBuf>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (defaults when no file exists)
    /// - Applying the org_id override if provided
    /// - Loading the dataset from `--dataset`, the config file, or the built-in sample
    /// - Resolving the output format
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_or_default(opts.config_ref())?;

        if let Some(org) = opts.org_ref() {
            config.org_id = Some(org.to_string());
        }

        let dataset_path = opts
            .dataset
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.dataset.clone());

        let source: Box<dyn FolderSource> = match &dataset_path {
            Some(path) => Box::new(dataset::load(path)?),
            None => {
                debug!("Using built-in sample dataset");
                Box::new(dataset::sample()?)
            }
        };

        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            source,
            dataset_path,
            format,
        })
    }

    /// Get the organization to query.
    ///
    /// Falls back to the sample data's default organization when reading the
    /// built-in dataset with no organization configured.
    pub fn org_id(&self) -> Result<&str> {
        if self.config.org_id.is_none() && self.dataset_path.is_none() {
            return Ok(DEFAULT_ORG_ID);
        }
        self.config.require_org_id()
    }

    /// Borrow the folder source.
    pub fn source(&self) -> &dyn FolderSource {
        self.source.as_ref()
    }
}

/// Resolve the output format for commands that need no dataset.
pub fn output_format(opts: &GlobalOptions) -> Result<OutputFormat> {
    let config = Config::load_or_default(opts.config_ref())?;
    Ok(resolve_format(opts.format, &config))
}

/// CLI flag wins, then the configured preference, then the default.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_name)
    })
    .unwrap_or_default()
}
