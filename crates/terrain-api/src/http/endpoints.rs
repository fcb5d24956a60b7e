//! Terrain endpoint paths and wire types.

use serde::{Deserialize, Serialize};

/// GET /terrain/token (Basic auth)
pub const TOKEN: &str = "token";

/// GET /terrain/apps?search=..., GET /terrain/apps/{system_id}/{app_id}
pub const APPS: &str = "apps";

/// POST /terrain/analyses
pub const ANALYSES: &str = "analyses";

/// Response from the token endpoint. Other fields (`expires_in`,
/// `token_type`, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Query parameters for app search.
#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    pub search: &'a str,
}

/// Terrain error body, e.g. `{"error_code": "ERR_NOT_FOUND", "reason": "..."}`.
#[derive(Debug, Deserialize)]
pub struct TerrainErrorResponse {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
