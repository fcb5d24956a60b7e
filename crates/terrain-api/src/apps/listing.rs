//! Search results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::Error;
use crate::types::{AppId, SystemId};

/// One search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSummary {
    pub system_id: SystemId,
    pub id: AppId,
    /// Every other field of the summary, unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppSummary {
    /// The display name, when the server sent one.
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// Response of `GET /terrain/apps?search=...`, in server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppListing {
    pub apps: Vec<AppSummary>,
    /// Top-level fields besides `apps` (e.g. `total`).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip)]
    pub(crate) query: String,
}

impl AppListing {
    /// The query this listing answers.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Select the first app as returned by the server.
    ///
    /// No tie-break is applied when several apps match. An empty listing is
    /// an [`Error::NoAppsFound`].
    pub fn into_first(self) -> Result<AppSummary, Error> {
        let total = self.apps.len();
        let Some(first) = self.apps.into_iter().next() else {
            return Err(Error::NoAppsFound { query: self.query });
        };

        if total > 1 {
            info!(
                matches = total,
                selected = %first.id,
                "Search matched several apps, taking the first"
            );
        }

        Ok(first)
    }
}
