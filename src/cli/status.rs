//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::resolve_session;
use crate::config::Config;
use crate::error::Result;

/// Show which config file and session a report would use.
///
/// Makes no API requests. Fails like `report` would when no usable session
/// resolves.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Usage Report Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let exists = if config_path.exists() {
        "".normal()
    } else {
        " (not found)".yellow()
    };
    println!(
        "Config file: {}{}",
        config_path.display().to_string().cyan(),
        exists
    );

    let session = resolve_session(opts)?;
    println!("Session: {}", session.name.bold());
    println!("API endpoint: {}", session.api_endpoint);
    println!("Results per page: {}", session.results_per_page);
    println!("{} Access token configured", "✓".green());

    Ok(())
}
