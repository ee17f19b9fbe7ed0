//! Test fixtures and builders for folder records
//!
//! Import via `use crate::folders::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::Folder;

/// An organization used across tests.
pub const ORG_A: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// A second organization used across tests.
pub const ORG_B: &str = "8f1b8f1e-2f4d-4b7e-9c3a-6d2e5f7a9b10";

/// An organization that owns nothing in any fixture.
pub const ORG_EMPTY: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

/// Deterministic version-4 UUID for the `n`th fixture folder.
pub fn fixture_id(n: usize) -> String {
    format!("{:08x}-0000-4000-8000-{:012x}", n, n)
}

/// Builder for creating test Folder instances.
///
/// # Example
/// ```ignore
/// let folder = FolderBuilder::new()
///     .id(fixture_id(7))
///     .name("reports")
///     .org_id(ORG_A)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct FolderBuilder {
    id: String,
    name: String,
    org_id: String,
}

impl Default for FolderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderBuilder {
    /// Create a new builder with a valid id, owned by [`ORG_A`].
    pub fn new() -> Self {
        Self {
            id: fixture_id(0),
            name: "Folder".to_string(),
            org_id: ORG_A.to_string(),
        }
    }

    /// Set the folder id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the folder name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the owning organization.
    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = org_id.into();
        self
    }

    /// Build the Folder.
    pub fn build(self) -> Folder {
        Folder {
            id: self.id,
            name: self.name,
            org_id: self.org_id,
        }
    }
}

/// `count` valid folders for `org_id`, named `folder-0`, `folder-1`, ...
pub fn folders_for(org_id: &str, count: usize) -> Vec<Folder> {
    (0..count)
        .map(|i| {
            FolderBuilder::new()
                .id(fixture_id(i + 1))
                .name(format!("folder-{i}"))
                .org_id(org_id)
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folders::uuid::is_valid_uuid_v4;

    #[test]
    fn test_fixture_ids_are_valid_v4() {
        for n in [0, 1, 25, 4096, usize::from(u16::MAX)] {
            assert!(is_valid_uuid_v4(&fixture_id(n)), "{}", fixture_id(n));
        }
    }

    #[test]
    fn test_folders_for_names_in_order() {
        let folders = folders_for(ORG_B, 3);
        let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["folder-0", "folder-1", "folder-2"]);
        assert!(folders.iter().all(|f| f.org_id == ORG_B));
    }
}
