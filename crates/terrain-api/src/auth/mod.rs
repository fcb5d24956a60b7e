//! Authentication types and session management.
//!
//! A [`Session`] is the only way to make authenticated Terrain requests.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::Session;
pub use tokens::AccessToken;
