//! Error types for the folderop CLI

use thiserror::Error;

/// Result type alias for folderop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Folder(#[from] FolderError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised by the folder fetch flows.
///
/// Every variant aborts the whole request; no partial response is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolderError {
    #[error("Invalid OrgID '{0}': must be a valid version-4 UUID")]
    InvalidOrgId(String),

    #[error("Invalid page limit {0}: must be positive and below 1000 items")]
    InvalidPageLimit(i64),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Folder with non-valid ID found for OrgID: {org_id} on folder named {folder_name}")]
    Validation { org_id: String, folder_name: String },

    #[error("No folders found for OrgID: {0}")]
    NotFound(String),
}

impl From<TokenError> for FolderError {
    fn from(err: TokenError) -> Self {
        FolderError::InvalidToken(err.to_string())
    }
}

/// Pagination token codec errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token format: {0}")]
    InvalidFormat(String),
}

/// Errors raised while seeding a folder dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Folder '{name}' has an invalid OrgID '{org_id}': must be a valid version-4 UUID")]
    InvalidOrgId { name: String, org_id: String },

    #[error("Failed to parse dataset: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::Parse(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `folderop init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Organization not configured. Run `folderop org set <ORG_ID>` or pass --org to choose one."
    )]
    MissingOrgId,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
