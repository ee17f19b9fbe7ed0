//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with a centred header
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folders::fixtures::{ORG_A, folders_for};
    use crate::models::FolderDisplay;

    #[test]
    fn test_empty_rows() {
        let rows: Vec<FolderDisplay> = vec![];
        assert_eq!(format_table(&rows), "No results found.");
    }

    #[test]
    fn test_folder_rows() {
        let rows: Vec<FolderDisplay> = folders_for(ORG_A, 2)
            .into_iter()
            .map(FolderDisplay::from)
            .collect();

        let result = format_table(&rows);

        assert!(result.contains("NAME"));
        assert!(result.contains("FOLDER ID"));
        assert!(result.contains("folder-0"));
        assert!(result.contains("folder-1"));
        // Rounded style corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
