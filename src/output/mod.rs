//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Types that can be rendered in any of the CLI output formats
pub trait Formattable {
    /// Render according to the requested format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Render and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "NAME")]
        name: String,
    }

    #[test]
    fn test_vec_formats_as_table() {
        let rows = vec![Row {
            name: "reports".to_string(),
        }];
        let out = rows.format(OutputFormat::Table).unwrap();
        assert!(out.contains("NAME"));
        assert!(out.contains("reports"));
    }

    #[test]
    fn test_vec_formats_as_json() {
        let rows = vec![Row {
            name: "reports".to_string(),
        }];
        let out = rows.format(OutputFormat::Json).unwrap();
        assert!(out.contains("\"name\": \"reports\""));
    }
}
