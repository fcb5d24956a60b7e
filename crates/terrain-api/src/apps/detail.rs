//! Full app description.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, InvalidInputError};
use crate::analysis::AppParameter;

/// Response of `GET /terrain/apps/{system_id}/{app_id}`.
///
/// The document is kept exactly as received; accessors read from it without
/// reshaping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppDetail(Value);

impl AppDetail {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn system_id(&self) -> Option<&str> {
        self.0.get("system_id").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Launchable parameters from every entry of `groups[].parameters[]`,
    /// in document order.
    pub fn parameters(&self) -> Result<Vec<AppParameter>, Error> {
        let Some(groups) = self.0.get("groups") else {
            return Ok(Vec::new());
        };
        let groups = groups.as_array().ok_or_else(|| InvalidInputError::AppDetail {
            reason: "'groups' is not an array".to_string(),
        })?;

        let mut parameters = Vec::new();
        for group in groups {
            let Some(params) = group.get("parameters").and_then(Value::as_array) else {
                continue;
            };
            for param in params {
                let parsed = serde_json::from_value(param.clone()).map_err(|e| {
                    InvalidInputError::AppDetail {
                        reason: format!("bad parameter: {}", e),
                    }
                })?;
                parameters.push(parsed);
            }
        }

        Ok(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_unmodified() {
        let body = json!({
            "id": "wc",
            "nested": {"deeper": [1, 2, {"x": null}]},
            "flag": true
        });
        let detail: AppDetail = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(detail.as_value(), &body);
        assert_eq!(serde_json::to_value(&detail).unwrap(), body);
    }

    #[test]
    fn parameters_flatten_groups_in_order() {
        let detail = AppDetail::new(json!({
            "id": "wc",
            "groups": [
                {"label": "Inputs", "parameters": [
                    {"id": "s1_p1", "type": "FileInput", "required": true}
                ]},
                {"label": "Empty"},
                {"label": "Options", "parameters": [
                    {"id": "s1_p2", "type": "Integer", "defaultValue": 4}
                ]}
            ]
        }));

        let ids: Vec<_> = detail
            .parameters()
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["s1_p1", "s1_p2"]);
    }

    #[test]
    fn no_groups_means_no_parameters() {
        let detail = AppDetail::new(json!({"id": "wc"}));
        assert!(detail.parameters().unwrap().is_empty());
    }

    #[test]
    fn groups_must_be_an_array() {
        let detail = AppDetail::new(json!({"id": "wc", "groups": {}}));
        assert!(detail.parameters().is_err());
    }
}
