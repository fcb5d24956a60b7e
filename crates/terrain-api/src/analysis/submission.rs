//! Analysis submission payload.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::apps::AppDetail;
use crate::error::{Error, InvalidInputError};
use crate::types::{AppId, SystemId};

use super::AppParameter;

/// The body of `POST /terrain/analyses`.
///
/// `config` maps parameter IDs to values. It starts from each parameter's
/// `defaultValue` and is changed through [`Submission::set_param`], which
/// only accepts IDs the app defines.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use terrain_api::{AppDetail, Submission};
///
/// let detail = AppDetail::new(json!({
///     "id": "wc-1.00",
///     "system_id": "agave",
///     "groups": [{"parameters": [
///         {"id": "query1", "label": "Input", "required": true},
///         {"id": "opt1", "defaultValue": "-l"}
///     ]}]
/// }));
///
/// let mut submission = Submission::from_app(&detail, "wc run", "/iplant/home/alice/analyses")?;
/// assert!(submission.validate().is_err());
///
/// submission.set_param("query1", json!("/iplant/home/alice/words.txt"))?;
/// submission.validate()?;
/// assert_eq!(submission.config["opt1"], json!("-l"));
/// # Ok::<(), terrain_api::Error>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub name: String,
    pub app_id: AppId,
    pub system_id: SystemId,
    pub output_dir: String,
    pub debug: bool,
    pub notify: bool,
    pub config: Map<String, Value>,
    pub requirements: Vec<Value>,
    #[serde(skip)]
    parameters: Vec<AppParameter>,
}

impl Submission {
    /// Build a submission from an app description.
    ///
    /// The description must carry `id` and `system_id`.
    pub fn from_app(
        detail: &AppDetail,
        name: impl Into<String>,
        output_dir: impl Into<String>,
    ) -> Result<Self, Error> {
        let app_id = detail
            .id()
            .ok_or_else(|| InvalidInputError::AppDetail {
                reason: "missing 'id'".to_string(),
            })?
            .parse::<AppId>()?;
        let system_id = detail
            .system_id()
            .ok_or_else(|| InvalidInputError::AppDetail {
                reason: "missing 'system_id'".to_string(),
            })?
            .parse::<SystemId>()?;

        let parameters = detail.parameters()?;
        let config = parameters
            .iter()
            .filter_map(|p| p.default_value.clone().map(|v| (p.id.clone(), v)))
            .collect();

        Ok(Self {
            name: name.into(),
            app_id,
            system_id,
            output_dir: output_dir.into(),
            debug: false,
            notify: true,
            config,
            requirements: Vec::new(),
            parameters,
        })
    }

    /// The analyses folder in a user's home collection.
    pub fn default_output_dir(username: &str) -> String {
        format!("/iplant/home/{}/analyses", username)
    }

    /// `<app name>_<UTC timestamp>`, with whitespace in the app name
    /// replaced by underscores.
    pub fn default_name(detail: &AppDetail, now: DateTime<Utc>) -> String {
        let app = detail.name().or(detail.id()).unwrap_or("analysis");
        let app: String = app
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{}_{}", app, now.format("%Y-%m-%d-%H-%M-%S"))
    }

    /// The app's parameters, in document order.
    pub fn parameters(&self) -> &[AppParameter] {
        &self.parameters
    }

    /// Set the value submitted for a parameter.
    pub fn set_param(&mut self, id: &str, value: Value) -> Result<(), Error> {
        if !self.parameters.iter().any(|p| p.id == id) {
            return Err(InvalidInputError::UnknownParameter {
                app_id: self.app_id.to_string(),
                parameter: id.to_string(),
            }
            .into());
        }
        self.config.insert(id.to_string(), value);
        Ok(())
    }

    /// Required parameters whose value is absent, null or an empty string.
    pub fn missing_required(&self) -> Vec<&AppParameter> {
        self.parameters
            .iter()
            .filter(|p| p.required)
            .filter(|p| match self.config.get(&p.id) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            })
            .collect()
    }

    /// Fail if any required parameter still lacks a value.
    pub fn validate(&self) -> Result<(), Error> {
        let missing = self.missing_required();
        if missing.is_empty() {
            return Ok(());
        }
        Err(InvalidInputError::MissingParameters {
            parameters: missing
                .iter()
                .map(|p| p.display_name().to_string())
                .collect(),
        }
        .into())
    }
}
