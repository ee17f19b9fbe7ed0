//! Request handlers for the plain and paginated folder fetch flows

use log::debug;

use super::models::{
    FetchFolderRequest, FetchFolderRequestWithPag, FetchFolderResponse, FetchFolderResponseWithPag,
};
use super::pagination::paginate;
use super::store::{FolderSource, fetch_folders_by_org};
use super::uuid::is_valid_uuid_v4;
use crate::error::FolderError;

/// Exclusive upper bound for a page limit.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Fetch every folder of the requested organization.
pub fn fetch_all_folders(
    source: &dyn FolderSource,
    req: &FetchFolderRequest,
) -> Result<FetchFolderResponse, FolderError> {
    if !is_valid_uuid_v4(&req.org_id) {
        return Err(FolderError::InvalidOrgId(req.org_id.clone()));
    }

    let folders = fetch_folders_by_org(source, &req.org_id)?;
    if folders.is_empty() {
        return Err(FolderError::NotFound(req.org_id.clone()));
    }

    Ok(FetchFolderResponse { folders })
}

/// Fetch one page of the requested organization's folders.
///
/// `NotFound` is decided on the whole filtered set, so a token pointing past
/// the end of a non-empty org yields an empty page rather than an error.
pub fn fetch_folders_paginated(
    source: &dyn FolderSource,
    req: &FetchFolderRequestWithPag,
) -> Result<FetchFolderResponseWithPag, FolderError> {
    if !is_valid_uuid_v4(&req.org_id) {
        return Err(FolderError::InvalidOrgId(req.org_id.clone()));
    }

    if req.page_limit <= 0 || req.page_limit >= MAX_PAGE_LIMIT {
        return Err(FolderError::InvalidPageLimit(req.page_limit));
    }

    let folders = fetch_folders_by_org(source, &req.org_id)?;
    if folders.is_empty() {
        return Err(FolderError::NotFound(req.org_id.clone()));
    }

    // Bounds checked above, the limit fits in usize.
    let page = paginate(&folders, req.page_limit as usize, &req.token)?;

    Ok(FetchFolderResponseWithPag {
        folders: page.folders,
        next_token: page.next_token,
        prev_token: page.prev_token,
    })
}

/// Walk every page of an organization's folders by following `next_token`.
///
/// Returns the pages in order; the last one has an empty `next_token`.
pub fn fetch_all_pages(
    source: &dyn FolderSource,
    org_id: &str,
    page_limit: i64,
) -> Result<Vec<FetchFolderResponseWithPag>, FolderError> {
    let mut pages = Vec::new();
    let mut token = String::new();

    loop {
        let req = FetchFolderRequestWithPag {
            org_id: org_id.to_string(),
            page_limit,
            token,
        };
        let page = fetch_folders_paginated(source, &req)?;
        token = page.next_token.clone();
        pages.push(page);

        if token.is_empty() {
            break;
        }
    }

    debug!("Walked {} pages for org {}", pages.len(), org_id);

    Ok(pages)
}
