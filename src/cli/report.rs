//! Report command implementation

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::{Error, Result};
use crate::output;
use crate::report::{HierarchyFetcher, compute_report};

/// Run one fetch → aggregate → render cycle.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let progress = fetch_spinner(ctx.format)?;
    let fetched = HierarchyFetcher::new(&ctx.client)
        .with_progress(progress.clone())
        .fetch_orgs()
        .await;
    progress.finish_and_clear();
    let orgs = fetched?;

    let report = compute_report(&orgs);
    debug!(
        "Computed report for {} orgs, {} spaces",
        report.total_orgs, report.total_spaces
    );

    output::print(&report, ctx.format)
}

/// Spinner on stderr while fetching; hidden for JSON or non-terminal stderr.
fn fetch_spinner(format: OutputFormat) -> Result<ProgressBar> {
    if format == OutputFormat::Json || !std::io::stderr().is_terminal() {
        return Ok(ProgressBar::hidden());
    }

    let style = ProgressStyle::with_template("{spinner} {msg}")
        .map_err(|e| Error::Other(format!("Invalid progress template: {}", e)))?;
    let spinner = ProgressBar::new_spinner().with_style(style);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
