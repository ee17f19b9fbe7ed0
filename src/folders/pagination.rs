//! Offset-window pagination over an already filtered folder list
//!
//! Tokens carry a plain offset, so they are only stable while the underlying
//! dataset is unchanged.

use log::debug;

use super::models::Folder;
use super::token::{decode_token, encode_token};
use crate::error::FolderError;

/// One window of folders with navigation tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Folders in `[start, end)`
    pub folders: Vec<Folder>,
    /// Token for the following window, empty on the last page
    pub next_token: String,
    /// Token for the preceding window, empty on the first page
    pub prev_token: String,
}

/// Cut the window selected by `token` out of `folders`.
///
/// An empty token starts at offset 0. A window starting at or past the end is
/// an empty page, not an error.
///
/// The previous token steps back by *this* call's `page_limit`, clamped at 0.
/// If the limit changed since the current token was issued, following it does
/// not land on the page the caller actually came from.
pub fn paginate(folders: &[Folder], page_limit: usize, token: &str) -> Result<Page, FolderError> {
    let start = if token.is_empty() {
        0
    } else {
        let offset = decode_token(token)?;
        if offset < 0 {
            return Err(FolderError::InvalidToken(
                "token must be non-negative".to_string(),
            ));
        }
        usize::try_from(offset)
            .map_err(|_| FolderError::InvalidToken("offset out of range".to_string()))?
    };

    let total = folders.len();
    let end = start.saturating_add(page_limit).min(total);

    debug!(
        "Paginating {} folders: window [{}, {}) limit {}",
        total, start, end, page_limit
    );

    let window = if start < total {
        folders[start..end].to_vec()
    } else {
        Vec::new()
    };

    let next_token = if end < total {
        encode_token(end as u64)
    } else {
        String::new()
    };

    let prev_token = if start > 0 {
        encode_token(start.saturating_sub(page_limit) as u64)
    } else {
        String::new()
    };

    Ok(Page {
        folders: window,
        next_token,
        prev_token,
    })
}
