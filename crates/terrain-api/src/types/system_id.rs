//! System identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Which backend manages an app definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemId {
    /// The Discovery Environment's own execution engine.
    De,
    /// The external Agave job-execution service.
    Agave,
}

impl SystemId {
    /// Returns the wire form used in URLs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemId::De => "de",
            SystemId::Agave => "agave",
        }
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de" => Ok(SystemId::De),
            "agave" => Ok(SystemId::Agave),
            other => Err(InvalidInputError::SystemId {
                value: other.to_string(),
            }
            .into()),
        }
    }
}
