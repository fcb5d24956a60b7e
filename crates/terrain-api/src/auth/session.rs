//! Session management for authenticated Terrain operations.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::analysis::{AnalysisResponse, Submission};
use crate::apps::{AppDetail, AppListing};
use crate::error::Error;
use crate::http::{ANALYSES, APPS, SearchQuery, TOKEN, TerrainClient, TokenResponse};
use crate::types::{AppId, BaseUrl, SystemId};

use super::credentials::Credentials;
use super::tokens::AccessToken;

/// An authenticated connection to a Terrain host.
///
/// Obtained via [`Session::login()`], or rebuilt from a saved token with
/// [`Session::from_persisted()`]. The access token is attached verbatim to
/// every request the session makes.
///
/// Sessions are cheap to clone (they use internal `Arc`).
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    username: String,
    client: TerrainClient,
    access_token: AccessToken,
}

impl Session {
    /// Exchange credentials for an access token.
    ///
    /// Issues `GET /terrain/token` with HTTP Basic authentication. Any
    /// non-success status fails immediately.
    #[instrument(skip(credentials), fields(base = %base, username = %credentials.username()))]
    pub async fn login(base: &BaseUrl, credentials: Credentials) -> Result<Self, Error> {
        info!("Requesting access token");

        let client = TerrainClient::new(base.clone())?;
        let response: TokenResponse = client.get_basic(&[TOKEN], &credentials).await?;

        debug!("Access token issued");

        Ok(Self {
            inner: Arc::new(SessionInner {
                username: credentials.username().to_string(),
                client,
                access_token: AccessToken::new(response.access_token),
            }),
        })
    }

    /// Create a session from a previously issued token.
    ///
    /// The token is not checked; an expired one fails on first use.
    pub fn from_persisted(
        base: BaseUrl,
        username: impl Into<String>,
        access_token: AccessToken,
    ) -> Result<Self, Error> {
        Ok(Self {
            inner: Arc::new(SessionInner {
                username: username.into(),
                client: TerrainClient::new(base)?,
                access_token,
            }),
        })
    }

    pub fn username(&self) -> &str {
        &self.inner.username
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.inner.client.base()
    }

    /// The token sent with every request.
    ///
    /// # Security
    ///
    /// Handle the returned token securely. It grants access to the account.
    pub fn access_token(&self) -> &AccessToken {
        &self.inner.access_token
    }

    /// Search the app catalog.
    ///
    /// Apps come back in server order.
    #[instrument(skip(self), fields(username = %self.inner.username))]
    pub async fn search_apps(&self, query: &str) -> Result<AppListing, Error> {
        debug!("Searching apps");

        let mut listing: AppListing = self
            .inner
            .client
            .query_authed(&[APPS], &SearchQuery { search: query }, &self.inner.access_token)
            .await?;
        listing.query = query.to_string();

        debug!(matches = listing.apps.len(), "Search complete");
        Ok(listing)
    }

    /// Fetch the full description of one app.
    #[instrument(skip(self), fields(username = %self.inner.username, %system_id, %app_id))]
    pub async fn get_app(&self, system_id: SystemId, app_id: &AppId) -> Result<AppDetail, Error> {
        debug!("Fetching app description");

        self.inner
            .client
            .get_authed(
                &[APPS, system_id.as_str(), app_id.as_str()],
                &self.inner.access_token,
            )
            .await
    }

    /// Submit an analysis.
    ///
    /// The submission is validated locally first; a missing required
    /// parameter never reaches the server.
    #[instrument(skip(self, submission), fields(username = %self.inner.username, app_id = %submission.app_id))]
    pub async fn submit_analysis(&self, submission: &Submission) -> Result<AnalysisResponse, Error> {
        submission.validate()?;

        info!(name = %submission.name, "Submitting analysis");

        let response: AnalysisResponse = self
            .inner
            .client
            .post_authed(&[ANALYSES], submission, &self.inner.access_token)
            .await?;

        debug!(id = ?response.id, status = ?response.status, "Analysis submitted");
        Ok(response)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.inner.username)
            .field("base", self.inner.client.base())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}
