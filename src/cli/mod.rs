//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod folder;
pub mod init;
pub mod org;
pub mod status;
pub mod token;

pub use args::{GlobalOptions, OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// folderop - browse organization folders, whole or a page at a time
#[derive(Parser, Debug)]
#[command(name = "folderop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "FOLDEROP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override default organization
    #[arg(long, global = true, env = "FOLDEROP_ORG_ID", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "FOLDEROP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Read folders from a JSON file instead of the built-in sample data
    #[arg(long, global = true, env = "FOLDEROP_DATASET", hide_env = true)]
    pub dataset: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FOLDEROP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize folderop configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage the default organization
    #[command(subcommand)]
    Org(OrgCommands),

    /// Fetch an organization's folders
    #[command(subcommand)]
    Folder(FolderCommands),

    /// Encode and decode pagination tokens
    #[command(subcommand)]
    Token(TokenCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   folderop completion bash > /etc/bash_completion.d/folderop
  zsh:    folderop completion zsh > \"${fpath[1]}/_folderop\"
  fish:   folderop completion fish > ~/.config/fish/completions/folderop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// Set default organization
    Set {
        /// Organization ID (version-4 UUID) to set as default
        org_id: String,
    },

    /// Show current default organization
    Get,
}

/// Folder subcommands
#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// List every folder in the organization
    List,

    /// Fetch one page of folders (or every page with --all)
    Page {
        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Token subcommands
#[derive(Subcommand, Debug)]
pub enum TokenCommands {
    /// Encode an offset as a pagination token
    Encode {
        /// Offset into the organization's folder list
        offset: u64,
    },

    /// Decode a pagination token back to its offset
    Decode {
        /// Token returned by a previous page
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_page_command() {
        let cli = Cli::parse_from(["folderop", "folder", "page", "--limit", "5", "--token", "NQ=="]);

        match cli.command {
            Commands::Folder(FolderCommands::Page { pagination }) => {
                assert_eq!(pagination.limit, Some(5));
                assert_eq!(pagination.token.as_deref(), Some("NQ=="));
                assert!(!pagination.all);
            }
            other => panic!("Expected folder page, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_limit() {
        let cli = Cli::parse_from(["folderop", "folder", "page", "--limit", "-1"]);

        match cli.command {
            Commands::Folder(FolderCommands::Page { pagination }) => {
                assert_eq!(pagination.limit, Some(-1));
            }
            other => panic!("Expected folder page, got {other:?}"),
        }
    }

    #[test]
    fn test_token_conflicts_with_all() {
        let result = Cli::try_parse_from(["folderop", "folder", "page", "--all", "--token", "MA=="]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["folderop", "folder", "list", "--format", "json", "--debug"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.debug);
    }
}
