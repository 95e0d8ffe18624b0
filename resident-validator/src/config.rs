//! Validator configuration
//!
//! Loaded once at startup and shared read-only by every validation call.

use crate::types::Operation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or checking a [`ValidatorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {}: {source}\n💾 Check that the file exists and is readable", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid JSON or has wrongly typed keys
    #[error("Failed to parse config: {0}\n📝 Expected a JSON object with keys version, ids, auth_types, max_clock_skew_secs")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but violates an invariant
    #[error("Invalid validator config: {0}\n⚙️ Ensure version, every request id and the auth type list are non-empty")]
    Invalid(String),
}

/// Expected envelope `id` for each operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestIds {
    pub auth_lock: String,
    pub auth_unlock: String,
    pub euin: String,
    pub auth_history: String,
    pub reprint: String,
}

impl Default for RequestIds {
    fn default() -> Self {
        Self {
            auth_lock: "mosip.resident.authlock".to_string(),
            auth_unlock: "mosip.resident.authunlock".to_string(),
            euin: "mosip.resident.euin".to_string(),
            auth_history: "mosip.resident.authhistory".to_string(),
            reprint: "mosip.resident.print".to_string(),
        }
    }
}

impl RequestIds {
    pub fn for_operation(&self, operation: Operation) -> &str {
        match operation {
            Operation::AuthLock => &self.auth_lock,
            Operation::AuthUnlock => &self.auth_unlock,
            Operation::Euin => &self.euin,
            Operation::AuthHistory => &self.auth_history,
            Operation::Reprint => &self.reprint,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Envelope version shared by every operation
    pub version: String,
    pub ids: RequestIds,
    /// Comma separated list of auth types accepted by lock/unlock
    pub auth_types: String,
    /// Maximum distance between `requesttime` and now; unchecked when unset
    pub max_clock_skew_secs: Option<u64>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            ids: RequestIds::default(),
            auth_types: "bio-FIR,bio-IIR".to_string(),
            max_clock_skew_secs: None,
        }
    }
}

impl ValidatorConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parsed auth type tokens, trimmed, blanks dropped
    pub fn allowed_auth_types(&self) -> BTreeSet<String> {
        self.auth_types
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn max_clock_skew(&self) -> Option<chrono::Duration> {
        self.max_clock_skew_secs
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(chrono::Duration::try_seconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "version cannot be empty".to_string(),
            ));
        }

        for operation in Operation::ALL {
            if self.ids.for_operation(operation).trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "request id for '{}' cannot be empty",
                    operation
                )));
            }
        }

        if self.allowed_auth_types().is_empty() {
            return Err(ConfigError::Invalid(
                "auth_types must list at least one auth type".to_string(),
            ));
        }

        Ok(())
    }
}
