//! App command implementation.

use anyhow::{Context, Result};
use clap::Args;

use terrain_api::{AppId, Session, SystemId};

use crate::output;

#[derive(Args, Debug)]
pub struct AppArgs {
    /// Backend managing the app (de or agave)
    pub system_id: SystemId,

    /// App identifier
    pub app_id: AppId,
}

pub async fn run(args: AppArgs, session: Session) -> Result<()> {
    let detail = session
        .get_app(args.system_id, &args.app_id)
        .await
        .context("Failed to get app")?;

    output::json_pretty(detail.as_value())
}
