//! Folder command implementations

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, PaginationArgs};
use crate::error::Result;
use crate::folders::{
    FetchFolderRequest, FetchFolderResponseWithPag, fetch_all_folders, fetch_all_pages,
    fetch_folders_paginated,
};
use crate::models::FolderDisplay;
use crate::output::{Formattable, json, table};

/// Run the folder list command
pub fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let req = FetchFolderRequest {
        org_id: ctx.org_id()?.to_string(),
    };

    debug!("Fetching all folders for org {}", req.org_id);
    let resp = fetch_all_folders(ctx.source(), &req)?;

    let rows: Vec<FolderDisplay> = resp.folders.into_iter().map(FolderDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the folder page command
pub fn page(opts: &GlobalOptions, pagination: &PaginationArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let req = pagination.to_request(ctx.org_id()?, ctx.config.preferences.page_limit);

    if pagination.all {
        debug!(
            "Fetching every page for org {} (limit {})",
            req.org_id, req.page_limit
        );
        let pages = fetch_all_pages(ctx.source(), &req.org_id, req.page_limit)?;
        return print_pages(&pages, ctx.format);
    }

    debug!(
        "Fetching page for org {} (limit {}, token '{}')",
        req.org_id, req.page_limit, req.token
    );
    let resp = fetch_folders_paginated(ctx.source(), &req)?;
    println!("{}", format_page(&resp, ctx.format)?);

    Ok(())
}

/// Render a single page with its navigation tokens.
fn format_page(resp: &FetchFolderResponseWithPag, format: OutputFormat) -> Result<String> {
    let rows: Vec<FolderDisplay> = resp.folders.iter().map(FolderDisplay::from).collect();

    match format {
        OutputFormat::Json => Ok(json::format_json(resp)?),
        OutputFormat::Table => Ok(format!(
            "{}\nnext_token: {}\nprev_token: {}",
            table::format_table(&rows),
            resp.next_token,
            resp.prev_token
        )),
        OutputFormat::Pretty => Ok(format!(
            "{}\n{} {}\n{} {}",
            table::format_table(&rows),
            "Next:".bold(),
            token_or_dash(&resp.next_token),
            "Prev:".bold(),
            token_or_dash(&resp.prev_token),
        )),
    }
}

fn token_or_dash(token: &str) -> String {
    if token.is_empty() {
        "-".dimmed().to_string()
    } else {
        token.cyan().to_string()
    }
}

fn print_pages(pages: &[FetchFolderResponseWithPag], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", json::format_json(pages)?);
        return Ok(());
    }

    let rows: Vec<FolderDisplay> = pages
        .iter()
        .flat_map(|p| p.folders.iter().map(FolderDisplay::from))
        .collect();
    rows.print(format)?;

    if format == OutputFormat::Pretty {
        println!(
            "{} folders across {} pages",
            rows.len().to_string().bold(),
            pages.len().to_string().bold()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folders::fixtures::{ORG_A, folders_for};

    fn sample_page() -> FetchFolderResponseWithPag {
        FetchFolderResponseWithPag {
            folders: folders_for(ORG_A, 2),
            next_token: "Mg==".to_string(),
            prev_token: String::new(),
        }
    }

    #[test]
    fn test_format_page_table_lists_tokens() {
        let out = format_page(&sample_page(), OutputFormat::Table).unwrap();
        assert!(out.contains("folder-1"));
        assert!(out.contains("next_token: Mg=="));
        assert!(out.ends_with("prev_token: "));
    }

    #[test]
    fn test_format_page_json() {
        let out = format_page(&sample_page(), OutputFormat::Json).unwrap();
        assert!(out.contains("\"nextToken\": \"Mg==\""));
        assert!(out.contains("\"folders\""));
    }

    #[test]
    fn test_format_empty_page() {
        let page = FetchFolderResponseWithPag::default();
        let out = format_page(&page, OutputFormat::Table).unwrap();
        assert!(out.starts_with("No results found."));
    }
}
