//! Subcommand implementations.

pub mod app;
pub mod login;
pub mod search;
pub mod submission;
pub mod walkthrough;

mod logout;
mod whoami;

use anyhow::{Context, Result};
use tracing::warn;

use terrain_api::{BaseUrl, Session};

use crate::cli::Commands;
use crate::storage;

/// `base_url` is the `--base-url`/`TERRAIN_BASE_URL` value, if one was given.
pub async fn handle(cmd: Commands, base_url: Option<&str>) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args, parse_base_url(base_url)?).await,
        Commands::Logout => logout::run(),
        Commands::Whoami => whoami::run(saved_session(base_url)?),
        Commands::Search(args) => search::run(args, saved_session(base_url)?).await,
        Commands::App(args) => app::run(args, saved_session(base_url)?).await,
        Commands::Submission(args) => submission::run(args, saved_session(base_url)?).await,
        Commands::Walkthrough(args) => walkthrough::run(args, parse_base_url(base_url)?).await,
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<BaseUrl> {
    BaseUrl::new(raw.unwrap_or(BaseUrl::DEFAULT)).context("Invalid base URL")
}

/// Load the saved session. A requested host other than the saved one is
/// reported and ignored.
fn saved_session(requested: Option<&str>) -> Result<Session> {
    let session = storage::require_session()?;

    if let Some(raw) = requested {
        let same_host = BaseUrl::new(raw).is_ok_and(|base| &base == session.base_url());
        if !same_host {
            warn!(
                requested = raw,
                saved = %session.base_url(),
                "Ignoring --base-url; using the host saved at login"
            );
        }
    }

    Ok(session)
}
