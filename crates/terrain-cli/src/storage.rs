//! Saved session for commands run after `terrain login`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use terrain_api::{AccessToken, BaseUrl, Session};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Stored session data. The token is kept exactly as issued.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    base_url: String,
    username: String,
    access_token: String,
}

fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "terrain").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk, readable by the owner only.
pub fn save_session(session: &Session) -> Result<PathBuf> {
    let stored = StoredSession {
        base_url: session.base_url().to_string(),
        username: session.username().to_string(),
        access_token: session.access_token().as_str().to_string(),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    write_private(&path, json.as_bytes()).context("Failed to write session file")?;
    debug!(path = %path.display(), "Session saved");

    Ok(path)
}

/// Write `contents` so that no other user can read them at any point.
///
/// A new file is created with mode 0600. An existing file is narrowed to
/// 0600 before it is truncated.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        options.mode(0o600);
        if path.exists() {
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

/// Load the saved session, if there is one.
pub fn load_session() -> Result<Option<Session>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let base = BaseUrl::new(&stored.base_url).context("Invalid base URL in session")?;
    let session = Session::from_persisted(base, stored.username, AccessToken::new(stored.access_token))?;

    Ok(Some(session))
}

/// Load the saved session or explain how to create one.
pub fn require_session() -> Result<Session> {
    load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'terrain login' first.")
}

/// Remove the saved session. Returns whether one existed.
pub fn clear_session() -> Result<bool> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(&path).context("Failed to remove session file")?;
    Ok(true)
}
