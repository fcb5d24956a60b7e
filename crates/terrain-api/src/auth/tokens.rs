//! Access token type.

use std::fmt;

/// A bearer token issued by `GET /terrain/token`.
///
/// The token is opaque and sent byte-for-byte as `Authorization: Bearer
/// <token>`. There is no refresh or expiry tracking; a rejected token
/// surfaces as an HTTP 401 on the next call.
///
/// # Security
///
/// Never logged or displayed in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    ///
    /// # Security
    ///
    /// Use only for authorization headers and the saved session file.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}
