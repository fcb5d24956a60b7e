//! Walkthrough command implementation.
//!
//! The whole tutorial in one process: prompt, token, search, first match,
//! app description.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use terrain_api::{BaseUrl, walkthrough};

use crate::output;
use crate::prompt;
use crate::storage;

#[derive(Args, Debug)]
pub struct WalkthroughArgs {
    /// Free-text app search
    pub query: String,

    /// Username (prompted when omitted)
    #[arg(long, env = "TERRAIN_USERNAME")]
    pub username: Option<String>,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,

    /// Keep the session for later commands
    #[arg(long)]
    pub save: bool,
}

pub async fn run(args: WalkthroughArgs, base: BaseUrl) -> Result<()> {
    let credentials = prompt::credentials(args.username, args.password_stdin)?;

    output::step(&format!("Logging in and searching for '{}'", args.query));

    let result = walkthrough::run(&base, credentials, &args.query)
        .await
        .context("Walkthrough failed")?;

    if args.save {
        storage::save_session(&result.session).context("Failed to save session")?;
    }

    output::step(&format!("{} matching apps", result.listing.apps.len()));
    for app in &result.listing.apps {
        output::app_row(app);
    }

    output::step(&format!(
        "Description of {}/{}",
        result.selected.system_id, result.selected.id
    ));
    output::json_pretty(result.detail.as_value())?;

    if result.listing.apps.len() > 1 {
        eprintln!(
            "{}",
            "Several apps matched; the first one was described.".dimmed()
        );
    }

    Ok(())
}
