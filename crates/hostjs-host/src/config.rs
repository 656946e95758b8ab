use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HostError;

/// Configures how the host primitives render console lines.
///
/// All fields are optional in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Prefix for lines from `console.log`.
    pub print_prefix: String,
    /// Prefix for lines from `console.error`.
    pub error_prefix: String,
    /// Prefix for lines from `console.warn`.
    pub warn_prefix: String,
    /// When set, `error` and `warn` lines go to the diagnostics writer
    /// (standard error) instead of standard output.
    pub diagnostics_to_stderr: bool,
}

impl Default for HostConfig {
    fn default() -> HostConfig {
        HostConfig {
            print_prefix: String::new(),
            error_prefix: "ERROR: ".into(),
            warn_prefix: "WARNING: ".into(),
            diagnostics_to_stderr: false,
        }
    }
}

impl HostConfig {
    /// Parses a config from a JSON document.
    pub fn from_json(json: &str) -> Result<HostConfig, HostError> {
        serde_json::from_str(json).map_err(HostError::ConfigParse)
    }

    /// Loads a config from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<HostConfig, HostError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(HostError::ConfigIo)?;
        let config = HostConfig::from_json(&contents)?;
        debug!(path = %path.display(), "loaded host config");
        Ok(config)
    }
}
