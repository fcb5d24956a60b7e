//! Analysis submission.
//!
//! An analysis is one run of an app. The payload is assembled from the app
//! description returned by the detail endpoint.

mod parameter;
mod submission;

pub use parameter::AppParameter;
pub use submission::Submission;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `POST /terrain/analyses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
