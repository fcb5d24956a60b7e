//! Login credentials type.

use std::fmt;

/// Username and password exchanged once for an access token.
///
/// # Security
///
/// The password is never exposed in Debug output. Credentials are consumed
/// by [`Session::login`](crate::Session::login) and dropped afterwards.
///
/// # Example
///
/// ```
/// use terrain_api::Credentials;
///
/// let creds = Credentials::new("alice", "correct horse");
/// assert_eq!(creds.username(), "alice");
/// ```
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Use this only when constructing the Basic authorization header.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
