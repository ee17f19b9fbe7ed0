//! Pagination token display model

use serde::Serialize;
use tabled::Tabled;

/// An offset and the token that encodes it.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TokenDisplay {
    #[tabled(rename = "OFFSET")]
    pub offset: i128,

    #[tabled(rename = "TOKEN")]
    pub token: String,
}
