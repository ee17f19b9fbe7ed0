//! Display model implementations for table and JSON output
//!
//! Display models turn core folder types into CLI-friendly rows with
//! appropriate column names and serialization.

mod folder;
mod token;

pub use folder::FolderDisplay;
pub use token::TokenDisplay;
