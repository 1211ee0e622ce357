use std::{path::Path, time::Duration};

use crate::foundation::error::{MaskformError, MaskformResult};

/// Environment variable overriding [`Config::server_url`].
pub const SERVER_URL_ENV: &str = "MASKFORM_SERVER_URL";

/// Runtime settings for talking to the generation endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where submissions are posted. Empty means unconfigured; requests then fail and are
    /// swallowed like any other transport failure.
    pub server_url: String,
    /// Per-request timeout in seconds (> 0).
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            timeout_secs: 120,
        }
    }
}

impl Config {
    /// Parse a JSON config document.
    pub fn from_json_str(s: &str) -> MaskformResult<Self> {
        serde_json::from_str(s).map_err(|e| MaskformError::config(format!("parse config: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: &Path) -> MaskformResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MaskformError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(SERVER_URL_ENV) {
            self.server_url = url;
        }
        self
    }

    /// Check values that cannot be expressed in the type.
    pub fn validate(&self) -> MaskformResult<()> {
        if self.timeout_secs == 0 {
            return Err(MaskformError::validation("timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
