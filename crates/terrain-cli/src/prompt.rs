//! Credential prompt.
//!
//! The username is echoed, the password never is. Nothing is validated and
//! empty input is accepted as-is.

use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use dialoguer::{Input, Password};

use terrain_api::Credentials;

/// Collect credentials from flags, the terminal, or stdin.
pub fn credentials(username: Option<String>, password_stdin: bool) -> Result<Credentials> {
    let username = match username {
        Some(username) => username,
        None if password_stdin => bail!("--username is required with --password-stdin"),
        None => Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = if password_stdin {
        read_line(io::stdin().lock()).context("Failed to read password from stdin")?
    } else {
        Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read password")?
    };

    Ok(Credentials::new(username, password))
}

/// First line of `reader` without its line terminator.
fn read_line(mut reader: impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
