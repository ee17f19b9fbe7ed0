//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "folderop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            if let Some(ref org_id) = config.org_id {
                println!("{} Default organization: {}", "✓".green(), org_id);
            } else {
                println!("{} No default organization set", "○".dimmed());
                println!("  → Run 'folderop org set <ID>' to set one");
            }

            match config.dataset {
                Some(ref path) => println!("{} Dataset: {}", "○".dimmed(), path.display()),
                None => println!("{} Dataset: built-in sample", "○".dimmed()),
            }

            println!(
                "{} Page limit: {}",
                "○".dimmed(),
                config.preferences.page_limit
            );

            if let Some(ref format) = config.preferences.format {
                println!("{} Output format: {}", "○".dimmed(), format);
            }

            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "folderop init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
