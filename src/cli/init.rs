//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::folders::{DEFAULT_ORG_ID, MAX_PAGE_LIMIT, is_valid_uuid_v4};

/// Run the init command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to folderop!".bold().green());
    println!("Let's set up your folder configuration.\n");

    let mut config = Config::load_or_default(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let org_id: String = Input::with_theme(&theme)
        .with_prompt("Default organization ID")
        .default(
            config
                .org_id
                .clone()
                .unwrap_or_else(|| DEFAULT_ORG_ID.to_string()),
        )
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            if is_valid_uuid_v4(input) {
                Ok(())
            } else {
                Err("must be a lowercase version-4 UUID")
            }
        })
        .interact_text()?;

    let page_limit: i64 = Input::with_theme(&theme)
        .with_prompt("Default page limit")
        .default(config.preferences.page_limit)
        .validate_with(|input: &i64| -> std::result::Result<(), &'static str> {
            if *input > 0 && *input < MAX_PAGE_LIMIT {
                Ok(())
            } else {
                Err("must be between 1 and 999")
            }
        })
        .interact_text()?;

    config.org_id = Some(org_id);
    config.preferences.page_limit = page_limit;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "folderop status".cyan());
    println!("  {} - Fetch the first page", "folderop folder page".cyan());

    Ok(())
}
