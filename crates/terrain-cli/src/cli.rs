//! CLI argument definitions.

use clap::{Parser, Subcommand};
use crate::commands::{app, login, search, submission, walkthrough};

/// Walk through the Terrain REST API.
#[derive(Parser, Debug)]
#[command(name = "terrain")]
#[command(author, version = env!("TERRAIN_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Terrain host for login and walkthrough [default: https://de.cyverse.org].
    /// Other commands use the host saved at login.
    #[arg(long, global = true, env = "TERRAIN_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange a username and password for an access token
    Login(login::LoginArgs),

    /// Forget the saved session
    Logout,

    /// Display the saved session
    Whoami,

    /// Search the app catalog
    Search(search::SearchArgs),

    /// Print an app's full description
    App(app::AppArgs),

    /// Assemble (and optionally submit) an analysis for an app
    Submission(submission::SubmissionArgs),

    /// Log in, search, and describe the first matching app
    Walkthrough(walkthrough::WalkthroughArgs),
}
