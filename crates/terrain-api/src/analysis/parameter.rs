//! App parameter definitions.

use serde::Deserialize;
use serde_json::Value;

/// One launchable parameter from an app description.
///
/// The `id` is the key the parameter's value is submitted under in the
/// analysis `config`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppParameter {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "visible_by_default")]
    pub is_visible: bool,
    #[serde(default)]
    pub default_value: Option<Value>,
}

fn visible_by_default() -> bool {
    true
}

impl AppParameter {
    /// Label, else name, else ID.
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.id)
    }
}
