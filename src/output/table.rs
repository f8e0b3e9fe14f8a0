//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{
        Alignment, Modify, Style,
        object::{Columns, Rows, Segment},
    },
};

/// Render rows as an aligned table.
///
/// The header row is centered, the first (name) column left-aligned and
/// every figure column right-aligned.
pub fn format_table<T: Tabled>(rows: &[T]) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Segment::all()).with(Alignment::right()))
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "name")]
        name: String,
        #[tabled(rename = "memory")]
        memory: String,
    }

    fn row(name: &str, memory: &str) -> TestRow {
        TestRow {
            name: name.to_string(),
            memory: memory.to_string(),
        }
    }

    #[test]
    fn test_format_table_header_only() {
        let rows: Vec<TestRow> = vec![];
        let result = format_table(&rows);

        assert!(result.contains("name"));
        assert!(result.contains("memory"));
    }

    #[test]
    fn test_format_table_rows_in_order() {
        let rows = vec![row("alpha", "0M"), row("beta", "512M"), row("Total", "512M")];

        let result = format_table(&rows);

        let alpha = result.find("alpha").unwrap();
        let beta = result.find("beta").unwrap();
        let total = result.find("Total").unwrap();
        assert!(alpha < beta && beta < total);
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let rows = vec![row("a", "1G"), row("longer-name", "512M")];

        let result = format_table(&rows);
        let widths: Vec<usize> = result.lines().map(|l| l.chars().count()).collect();

        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&[row("a", "1G")]);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
