//! Folder records and the request/response shapes of the two fetch flows

use serde::{Deserialize, Serialize};

/// A single folder record.
///
/// `id` is kept in its textual form so that malformed identifiers in a dataset
/// survive loading and are reported by the fetch path instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Folder ID (version-4 UUID text)
    pub id: String,

    /// Display name
    pub name: String,

    /// Owning organization ID
    pub org_id: String,
}

/// Request for every folder of an organization
#[derive(Debug, Clone)]
pub struct FetchFolderRequest {
    pub org_id: String,
}

/// Response carrying every folder of an organization
#[derive(Debug, Clone, Serialize)]
pub struct FetchFolderResponse {
    pub folders: Vec<Folder>,
}

/// Request for one page of an organization's folders.
///
/// `page_limit` is signed so out-of-range input reaches validation intact.
/// An empty `token` asks for the first page.
#[derive(Debug, Clone)]
pub struct FetchFolderRequestWithPag {
    pub org_id: String,
    pub page_limit: i64,
    pub token: String,
}

/// One page of folders with navigation tokens.
///
/// An empty `next_token` means there is no further page; an empty
/// `prev_token` means this is the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchFolderResponseWithPag {
    pub folders: Vec<Folder>,
    pub next_token: String,
    pub prev_token: String,
}
