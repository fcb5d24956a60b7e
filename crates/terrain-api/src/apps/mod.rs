//! App catalog documents.
//!
//! Terrain owns these schemas; only the fields the walkthrough needs are
//! typed and everything else is carried through untouched.

mod detail;
mod listing;

pub use detail::AppDetail;
pub use listing::{AppListing, AppSummary};
