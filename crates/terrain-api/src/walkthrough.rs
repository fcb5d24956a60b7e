//! The end-to-end tutorial flow.
//!
//! Token exchange, app search, selection of the first hit, detail fetch.
//! Every step waits for the previous one; the first failure ends the run.

use tracing::{info, instrument};

use crate::apps::{AppDetail, AppListing, AppSummary};
use crate::auth::{Credentials, Session};
use crate::error::Error;
use crate::types::BaseUrl;

/// Everything the walkthrough produced, in the order it was produced.
#[derive(Debug)]
pub struct Walkthrough {
    pub session: Session,
    pub listing: AppListing,
    pub selected: AppSummary,
    pub detail: AppDetail,
}

/// Run the walkthrough against `base`.
///
/// Fails with [`Error::NoAppsFound`] when the search is empty, before any
/// detail request is made.
#[instrument(skip(credentials), fields(base = %base, username = %credentials.username()))]
pub async fn run(base: &BaseUrl, credentials: Credentials, query: &str) -> Result<Walkthrough, Error> {
    let session = Session::login(base, credentials).await?;
    continue_with(session, query).await
}

/// Run the search and detail steps with an existing session.
pub async fn continue_with(session: Session, query: &str) -> Result<Walkthrough, Error> {
    let listing = session.search_apps(query).await?;
    let selected = listing.clone().into_first()?;

    info!(system_id = %selected.system_id, app_id = %selected.id, "Selected app");

    let detail = session.get_app(selected.system_id, &selected.id).await?;

    Ok(Walkthrough {
        session,
        listing,
        selected,
        detail,
    })
}
