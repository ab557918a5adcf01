//! Loading operator definitions from JSON.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use super::DeclarativeRules;
use super::definition::{LineDefinition, OperatorDefinition};

/// Errors that make the rule file unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a list of operator definitions
    #[error("malformed operator definitions: {0}")]
    Parse(#[from] serde_json::Error),

    /// A definition's regex does not compile
    #[error("operator {name:?} has an invalid regex: {source}")]
    InvalidRegex {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// On-disk shape of a definition.
#[derive(Debug, Deserialize)]
struct RawDefinition {
    name: String,
    types: Vec<String>,
    #[serde(default)]
    lines: Vec<LineDefinition>,
    #[serde(default, rename = "match-all-stations-containing")]
    station_substrings: Vec<String>,
    #[serde(default)]
    regex: Option<String>,
}

impl TryFrom<RawDefinition> for OperatorDefinition {
    type Error = ConfigError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let regex = raw
            .regex
            .map(|pattern| Regex::new(&format!("^(?:{pattern})$")))
            .transpose()
            .map_err(|source| ConfigError::InvalidRegex {
                name: raw.name.clone(),
                source,
            })?;

        Ok(Self {
            name: raw.name,
            types: raw.types,
            lines: raw.lines,
            station_substrings: raw.station_substrings,
            regex,
        })
    }
}

impl DeclarativeRules {
    /// Parse definitions from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: Vec<RawDefinition> = serde_json::from_str(json)?;
        let definitions = raw
            .into_iter()
            .map(OperatorDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(definitions))
    }

    /// Load definitions from `path`.
    ///
    /// A missing file is not an error: it yields an empty rule set.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "Operator definitions not found, continuing without"
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let rules = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            definitions = rules.len(),
            "Loaded operator definitions"
        );
        Ok(rules)
    }
}
