//! Pagination argument types for the folder page command

use clap::Args;

use crate::folders::FetchFolderRequestWithPag;

/// Pagination arguments for paginated folder fetches.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Folders per page (1-999, defaults to the configured page limit)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Token from a previous page's next/prev token
    #[arg(long, short = 't', conflicts_with = "all")]
    pub token: Option<String>,

    /// Follow next tokens and fetch every page
    #[arg(long)]
    pub all: bool,
}

impl PaginationArgs {
    /// Build a paginated request, using `default_limit` when no limit was given.
    pub fn to_request(&self, org_id: &str, default_limit: i64) -> FetchFolderRequestWithPag {
        FetchFolderRequestWithPag {
            org_id: org_id.to_string(),
            page_limit: self.limit.unwrap_or(default_limit),
            token: self.token.clone().unwrap_or_default(),
        }
    }
}
