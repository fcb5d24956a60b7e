//! Whoami command implementation.

use anyhow::Result;

use terrain_api::Session;

use crate::output;

pub fn run(session: Session) -> Result<()> {
    output::field("User", session.username());
    output::field("Terrain", session.base_url().as_str());

    Ok(())
}
