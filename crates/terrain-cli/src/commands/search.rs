//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use terrain_api::Session;

use crate::output;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text search
    pub query: String,

    /// Print the raw listing as pretty JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs, session: Session) -> Result<()> {
    let listing = session
        .search_apps(&args.query)
        .await
        .context("Failed to search apps")?;

    if args.json {
        return output::json_pretty(&listing);
    }

    if listing.is_empty() {
        eprintln!("{}", "No apps found.".dimmed());
        return Ok(());
    }

    for app in &listing.apps {
        output::app_row(app);
    }

    Ok(())
}
