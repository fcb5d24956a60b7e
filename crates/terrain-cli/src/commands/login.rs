//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use terrain_api::{BaseUrl, Session};

use crate::output;
use crate::prompt;
use crate::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(long, env = "TERRAIN_USERNAME")]
    pub username: Option<String>,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    pub password_stdin: bool,
}

pub async fn run(args: LoginArgs, base: BaseUrl) -> Result<()> {
    let credentials = prompt::credentials(args.username, args.password_stdin)?;

    eprintln!("{}", "Requesting access token...".dimmed());

    let session = Session::login(&base, credentials)
        .await
        .context("Failed to login")?;

    storage::save_session(&session).context("Failed to save session")?;

    output::success("Logged in successfully");
    println!();
    output::field("User", session.username());
    output::field("Terrain", session.base_url().as_str());

    Ok(())
}
