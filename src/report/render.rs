//! Text and JSON rendering of a computed report

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::UsageRowDisplay;
use crate::output::Formattable;
use crate::output::json::format_json;
use crate::output::table::format_table;

use super::{OrgReport, UsageReport};

impl OrgReport {
    /// Table rows: one per space, then `Total`.
    pub fn display_rows(&self) -> Vec<UsageRowDisplay> {
        self.rows().map(UsageRowDisplay::from).collect()
    }
}

impl UsageReport {
    /// Header line, then per org its summary line and table, then the totals line.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.orgs.len() * 2 + 2);
        lines.push(self.header_line());

        for org in &self.orgs {
            lines.push(org.summary_line());
            lines.push(format_table(&org.display_rows()));
        }

        lines.push(self.trailer_line());
        lines.join("\n")
    }
}

impl Formattable for UsageReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_text()),
            OutputFormat::Json => Ok(format_json(self)?),
        }
    }
}
