//! Folder datasets: the built-in sample fixture and JSON files on disk
//!
//! Seeding checks that every record's `orgId` is a version-4 UUID. Folder ids
//! are left alone here; malformed ones are reported when an org is fetched.

use std::path::Path;

use log::debug;

use super::models::Folder;
use super::store::StaticSource;
use super::uuid::is_valid_uuid_v4;
use crate::error::{DatasetError, Result};

/// Organization that owns most of the sample folders.
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

const SAMPLE_JSON: &str = include_str!("sample.json");

/// Load the built-in sample dataset.
pub fn sample() -> std::result::Result<StaticSource, DatasetError> {
    from_json_str(SAMPLE_JSON)
}

/// Load a dataset from a JSON file holding an array of folder records.
pub fn load(path: &Path) -> Result<StaticSource> {
    debug!("Loading dataset from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Ok(from_json_str(&contents)?)
}

/// Parse and seed a dataset from JSON text.
pub fn from_json_str(json: &str) -> std::result::Result<StaticSource, DatasetError> {
    let folders: Vec<Folder> = serde_json::from_str(json)?;
    seed(folders)
}

/// Seed a source from records, rejecting any with a malformed `orgId`.
pub fn seed(folders: Vec<Folder>) -> std::result::Result<StaticSource, DatasetError> {
    if let Some(bad) = folders.iter().find(|f| !is_valid_uuid_v4(&f.org_id)) {
        return Err(DatasetError::InvalidOrgId {
            name: bad.name.clone(),
            org_id: bad.org_id.clone(),
        });
    }

    debug!("Seeded dataset with {} folders", folders.len());
    Ok(StaticSource::new(folders))
}
