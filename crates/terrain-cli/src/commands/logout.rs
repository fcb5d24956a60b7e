//! Logout command implementation.

use anyhow::Result;
use colored::Colorize;

use crate::output;
use crate::storage;

pub fn run() -> Result<()> {
    if storage::clear_session()? {
        output::success("Logged out");
    } else {
        eprintln!("{}", "No saved session.".dimmed());
    }
    Ok(())
}
