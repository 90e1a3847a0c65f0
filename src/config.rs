// Configuration module: holds the assignment key and the ordered list of
// gradable parts. The values are injected by the release build into
// `submission.toml`, embedded into the binary, and validated once at start.

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// The injection file as shipped with this build.
const INJECTED: &str = include_str!("../submission.toml");

/// Reasons the injected configuration cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("injection file is malformed: {0}")]
    Malformed(String),

    #[error("akey is empty string")]
    BlankAssignmentKey,

    #[error("partIds has 0 length")]
    NoParts,

    #[error("partId #{0} is blank")]
    BlankPartId(usize),

    #[error("part displayName #{0} is blank")]
    BlankPartName(usize),

    #[error("partIds and partNames have different lengths ({ids} vs {names})")]
    LengthMismatch { ids: usize, names: usize },

    #[error("partId {0:?} appears more than once")]
    DuplicatePartId(String),
}

/// Shape of `submission.toml` before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfiguration {
    pub assignment_key: String,
    pub part_ids: Vec<String>,
    pub part_names: Vec<String>,
}

/// One gradable part of the assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub id: String,
    pub name: String,
}

/// Validated, read-only submission configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    assignment_key: String,
    parts: Vec<Part>,
}

impl Configuration {
    /// Trim and validate raw injected values.
    ///
    /// Every check runs before the value exists, so a `Configuration` in hand
    /// always has a key, at least one part, and unique non-blank part ids.
    pub fn from_raw(raw: RawConfiguration) -> Result<Self, ConfigError> {
        let assignment_key = raw.assignment_key.trim().to_string();
        if assignment_key.is_empty() {
            return Err(ConfigError::BlankAssignmentKey);
        }
        if raw.part_ids.is_empty() {
            return Err(ConfigError::NoParts);
        }
        if raw.part_ids.len() != raw.part_names.len() {
            return Err(ConfigError::LengthMismatch {
                ids: raw.part_ids.len(),
                names: raw.part_names.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut parts = Vec::with_capacity(raw.part_ids.len());
        for (index, (id, name)) in raw.part_ids.iter().zip(&raw.part_names).enumerate() {
            let id = id.trim();
            let name = name.trim();
            if id.is_empty() {
                return Err(ConfigError::BlankPartId(index));
            }
            if name.is_empty() {
                return Err(ConfigError::BlankPartName(index));
            }
            if !seen.insert(id) {
                return Err(ConfigError::DuplicatePartId(id.to_string()));
            }
            parts.push(Part {
                id: id.to_string(),
                name: name.to_string(),
            });
        }

        Ok(Configuration { assignment_key, parts })
    }

    /// Parse and validate a TOML document in the `submission.toml` format.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration =
            toml::from_str(source).map_err(|e| ConfigError::Malformed(e.message().to_string()))?;
        Self::from_raw(raw)
    }

    pub fn assignment_key(&self) -> &str {
        &self.assignment_key
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

/// Load the configuration injected into this build.
pub fn load_configuration() -> Result<Configuration, ConfigError> {
    let config = Configuration::from_toml_str(INJECTED)?;
    debug!(parts = config.parts().len(), "loaded injected configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(key: &str, ids: &[&str], names: &[&str]) -> RawConfiguration {
        RawConfiguration {
            assignment_key: key.into(),
            part_ids: ids.iter().map(|s| s.to_string()).collect(),
            part_names: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn injected_configuration_is_valid() {
        let config = load_configuration().unwrap();
        assert_eq!(config.assignment_key(), "Lm64BvbLEeWEJw5JS44kjw");
        let ids: Vec<&str> = config.parts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["PH3Q7", "PIXym", "mUKdC", "peNB6"]);
        assert_eq!(config.parts()[3].name, "Update Test");
    }

    #[test]
    fn valid_input_keeps_every_part_in_order() {
        let config =
            Configuration::from_raw(raw("k", &["A", "B", "C"], &["a", "b", "c"])).unwrap();
        assert_eq!(config.parts().len(), 3);
        assert_eq!(config.parts()[1], Part { id: "B".into(), name: "b".into() });
    }

    #[test]
    fn values_are_trimmed() {
        let config = Configuration::from_raw(raw("  key \n", &[" P1 "], &["\tName "])).unwrap();
        assert_eq!(config.assignment_key(), "key");
        assert_eq!(config.parts()[0].id, "P1");
        assert_eq!(config.parts()[0].name, "Name");
    }

    #[test]
    fn blank_key_is_rejected() {
        let err = Configuration::from_raw(raw("   ", &["A"], &["a"])).unwrap_err();
        assert_eq!(err, ConfigError::BlankAssignmentKey);
    }

    #[test]
    fn empty_part_list_is_rejected() {
        let err = Configuration::from_raw(raw("k", &[], &[])).unwrap_err();
        assert_eq!(err, ConfigError::NoParts);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = Configuration::from_raw(raw("k", &["A", "B"], &["a"])).unwrap_err();
        assert_eq!(err, ConfigError::LengthMismatch { ids: 2, names: 1 });

        let err = Configuration::from_raw(raw("k", &["A"], &["a", "b", "c"])).unwrap_err();
        assert_eq!(err, ConfigError::LengthMismatch { ids: 1, names: 3 });
    }

    #[test]
    fn blank_id_or_name_reports_its_position() {
        let err = Configuration::from_raw(raw("k", &["A", " "], &["a", "b"])).unwrap_err();
        assert_eq!(err, ConfigError::BlankPartId(1));

        let err = Configuration::from_raw(raw("k", &["A", "B"], &["", "b"])).unwrap_err();
        assert_eq!(err, ConfigError::BlankPartName(0));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Configuration::from_raw(raw("k", &["A", "A "], &["a", "b"])).unwrap_err();
        assert_eq!(err, ConfigError::DuplicatePartId("A".into()));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = Configuration::from_toml_str("assignment_key = ").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));

        let err = Configuration::from_toml_str("assignment_key = \"k\"").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
