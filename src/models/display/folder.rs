//! Folder display model

use serde::Serialize;
use tabled::Tabled;

use crate::folders::Folder;

/// Folder display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderDisplay {
    /// Folder name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Folder ID
    #[tabled(rename = "FOLDER ID")]
    pub id: String,

    /// Owning organization ID
    #[tabled(rename = "ORG ID")]
    pub org_id: String,
}

impl From<Folder> for FolderDisplay {
    fn from(folder: Folder) -> Self {
        Self {
            name: folder.name,
            id: folder.id,
            org_id: folder.org_id,
        }
    }
}

impl From<&Folder> for FolderDisplay {
    fn from(folder: &Folder) -> Self {
        Self {
            name: folder.name.clone(),
            id: folder.id.clone(),
            org_id: folder.org_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folders::fixtures::{FolderBuilder, ORG_B};

    #[test]
    fn test_folder_display_from_folder() {
        let folder = FolderBuilder::new().name("invoices").org_id(ORG_B).build();

        let display = FolderDisplay::from(folder.clone());

        assert_eq!(display.name, "invoices");
        assert_eq!(display.id, folder.id);
        assert_eq!(display.org_id, ORG_B);
    }

    #[test]
    fn test_folder_display_from_ref() {
        let folder = FolderBuilder::new().name("drafts").build();
        let display = FolderDisplay::from(&folder);
        assert_eq!(display.name, "drafts");
    }

    #[test]
    fn test_folder_display_serializes_camel_case() {
        let display = FolderDisplay::from(FolderBuilder::new().build());
        let json = serde_json::to_string(&display).unwrap();
        assert!(json.contains("\"orgId\""));
    }
}
