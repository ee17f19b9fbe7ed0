//! folderop - fetch an organization's folders, whole or a page at a time

use clap::Parser;

mod cli;
mod config;
mod error;
mod folders;
mod models;
mod output;

use cli::{Cli, Commands, FolderCommands, GlobalOptions, OrgCommands, TokenCommands};
use error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("folderop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org(org_cmd) => match org_cmd {
            OrgCommands::Set { org_id } => cli::org::set(&opts, org_id),
            OrgCommands::Get => cli::org::get(&opts),
        },
        Commands::Folder(folder_cmd) => match folder_cmd {
            FolderCommands::List => cli::folder::list(&opts),
            FolderCommands::Page { pagination } => cli::folder::page(&opts, &pagination),
        },
        Commands::Token(token_cmd) => match token_cmd {
            TokenCommands::Encode { offset } => cli::token::encode(&opts, offset),
            TokenCommands::Decode { token } => cli::token::decode(&opts, &token),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
