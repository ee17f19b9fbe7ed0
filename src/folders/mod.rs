//! Folder retrieval core
//!
//! Filters a read-only folder dataset by organization and serves it either
//! whole or in offset-token pages.

pub mod dataset;
#[cfg(test)]
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod store;
pub mod token;
pub mod uuid;

pub use dataset::DEFAULT_ORG_ID;
pub use handlers::{MAX_PAGE_LIMIT, fetch_all_folders, fetch_all_pages, fetch_folders_paginated};
pub use models::{
    FetchFolderRequest, FetchFolderRequestWithPag, FetchFolderResponseWithPag, Folder,
};
pub use store::FolderSource;
pub use token::{decode_token, encode_token};
pub use uuid::is_valid_uuid_v4;
