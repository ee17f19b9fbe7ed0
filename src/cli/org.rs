//! Organization command implementations

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::{FolderError, Result};
use crate::folders::is_valid_uuid_v4;
use crate::folders::store::fetch_folders_by_org;
use crate::output::json;

/// Run the org set command
pub fn set(opts: &GlobalOptions, org_id: String) -> Result<()> {
    if !is_valid_uuid_v4(&org_id) {
        return Err(FolderError::InvalidOrgId(org_id).into());
    }

    let mut config = Config::load_or_default(opts.config_ref())?;
    config.org_id = Some(org_id.clone());
    config.save_at(opts.config_ref())?;

    println!(
        "{} Set default organization to: {}",
        "✓".green(),
        org_id.bold()
    );

    Ok(())
}

/// Run the org get command
pub fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.org_id()?;
    if !is_valid_uuid_v4(org_id) {
        return Err(FolderError::InvalidOrgId(org_id.to_string()).into());
    }

    // Counting may fail on malformed folder ids; still show the org.
    let folder_count = fetch_folders_by_org(ctx.source(), org_id)
        .map(|f| f.len())
        .ok();

    match ctx.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "orgId": org_id,
                "folderCount": folder_count,
            });
            println!("{}", json::format_json(&payload)?);
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("{}", "Current Default Organization".bold());
            println!();
            println!("  ID:      {}", org_id);
            match folder_count {
                Some(n) => println!("  Folders: {}", n),
                None => println!("  Folders: {}", "invalid folder data".red()),
            }
        }
    }

    Ok(())
}
