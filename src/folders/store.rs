//! Folder store access: org filtering over a read-only folder source

use log::{debug, warn};

use super::models::Folder;
use super::uuid::is_valid_uuid_v4;
use crate::error::FolderError;

/// Read-only provider of the full folder dataset.
///
/// Implementations must return folders in a fixed, deterministic order.
pub trait FolderSource {
    /// All folders, in dataset order
    fn folders(&self) -> &[Folder];
}

/// A folder source over an owned list of folders.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    folders: Vec<Folder>,
}

impl StaticSource {
    /// Create a source serving `folders` in the given order.
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }
}

impl FolderSource for StaticSource {
    fn folders(&self) -> &[Folder] {
        &self.folders
    }
}

/// Collect the folders belonging to `org_id`, preserving dataset order.
///
/// Every matching folder must carry a version-4 UUID id. The first one that
/// does not aborts the fetch with [`FolderError::Validation`].
pub fn fetch_folders_by_org(
    source: &dyn FolderSource,
    org_id: &str,
) -> Result<Vec<Folder>, FolderError> {
    let mut matched = Vec::new();

    for folder in source.folders().iter().filter(|f| f.org_id == org_id) {
        if !is_valid_uuid_v4(&folder.id) {
            warn!(
                "Folder '{}' in org {} has malformed id '{}'",
                folder.name, org_id, folder.id
            );
            return Err(FolderError::Validation {
                org_id: org_id.to_string(),
                folder_name: folder.name.clone(),
            });
        }
        matched.push(folder.clone());
    }

    debug!(
        "Matched {} of {} folders for org {}",
        matched.len(),
        source.folders().len(),
        org_id
    );

    Ok(matched)
}
