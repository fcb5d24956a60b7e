//! terrain-api - Terrain REST API walkthrough library
//!
//! Every authenticated call flows through a [`Session`], obtained by exchanging
//! a username and password for a bearer token.
//!
//! # Example
//!
//! ```no_run
//! use terrain_api::{BaseUrl, Credentials, Session};
//!
//! # async fn example() -> Result<(), terrain_api::Error> {
//! let base = BaseUrl::new("https://de.cyverse.org")?;
//! let session = Session::login(&base, Credentials::new("alice", "password")).await?;
//!
//! let listing = session.search_apps("word count").await?;
//! let app = listing.into_first()?;
//! let detail = session.get_app(app.system_id, &app.id).await?;
//!
//! println!("{}", serde_json::to_string_pretty(detail.as_value()).unwrap());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod apps;
pub mod auth;
pub mod error;
pub mod types;
pub mod walkthrough;

mod http;

pub use analysis::{AnalysisResponse, AppParameter, Submission};
pub use apps::{AppDetail, AppListing, AppSummary};
pub use auth::{AccessToken, Credentials, Session};
pub use error::Error;
pub use types::{AppId, BaseUrl, SystemId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
