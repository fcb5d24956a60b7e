//! Terrain HTTP client implementation.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::auth::{AccessToken, Credentials};
use crate::error::{Error, ProtocolError};
use crate::types::BaseUrl;

use super::endpoints::TerrainErrorResponse;

/// HTTP client for Terrain requests.
///
/// No timeout is configured; requests wait as long as reqwest's defaults
/// allow.
#[derive(Debug, Clone)]
pub struct TerrainClient {
    client: reqwest::Client,
    base: BaseUrl,
}

impl TerrainClient {
    /// Create a new client for the given Terrain host.
    pub fn new(base: BaseUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("terrain-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// GET with HTTP Basic authentication.
    #[instrument(skip(self, credentials), fields(base = %self.base, username = %credentials.username()))]
    pub async fn get_basic<R>(&self, segments: &[&str], credentials: &Credentials) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments);
        debug!(%url, "Terrain basic-auth GET");

        let response = self
            .client
            .get(url)
            .basic_auth(credentials.username(), Some(credentials.password()))
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// GET with a bearer token and no query string.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn get_authed<R>(&self, segments: &[&str], token: &AccessToken) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments);
        debug!(%url, "Terrain authenticated GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// GET with a bearer token and query parameters.
    #[instrument(skip(self, token), fields(base = %self.base))]
    pub async fn query_authed<Q, R>(
        &self,
        segments: &[&str],
        params: &Q,
        token: &AccessToken,
    ) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments);
        debug!(%url, "Terrain authenticated query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(url)
            .query(params)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// POST a JSON body with a bearer token.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub async fn post_authed<B, R>(
        &self,
        segments: &[&str],
        body: &B,
        token: &AccessToken,
    ) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(segments);
        debug!(%url, "Terrain authenticated POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Decode a success body, or turn any other status into a protocol error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "Terrain response");

        if !status.is_success() {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Protocol(ProtocolError::malformed(status.as_u16(), e)))
    }

    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<TerrainErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.error_code, body.reason.or(body.message)),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
