//! Global docketcal configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{DocketError, DocketResult};

static DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REFRESH_SECS: u64 = 30;

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn is_default_api_url(url: &String) -> bool {
    *url == DEFAULT_API_URL
}

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

fn is_default_refresh_secs(secs: &u64) -> bool {
    *secs == DEFAULT_REFRESH_SECS
}

/// Global configuration at ~/.config/docketcal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct DocketConfig {
    /// Base URL of the case-management backend.
    #[serde(default = "default_api_url", skip_serializing_if = "is_default_api_url")]
    pub api_url: String,

    /// Bearer token presented to the backend. Provisioned out of band;
    /// requests go unauthenticated when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Default judge name to build calendars for, when --judge is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge: Option<String>,

    /// Refresh period for `watch`, in seconds.
    #[serde(
        default = "default_refresh_secs",
        skip_serializing_if = "is_default_refresh_secs"
    )]
    pub refresh_secs: u64,
}

impl Default for DocketConfig {
    fn default() -> Self {
        DocketConfig {
            api_url: default_api_url(),
            api_token: None,
            judge: None,
            refresh_secs: DEFAULT_REFRESH_SECS,
        }
    }
}

impl DocketConfig {
    pub fn load() -> DocketResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: DocketConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| DocketError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DocketError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn config_path() -> DocketResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DocketError::Config("Could not determine config directory".into()))?
            .join("docketcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/docketcal/config.toml
    pub fn save(&self) -> DocketResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DocketError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| DocketError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> DocketResult<()> {
        let contents = format!(
            "\
# docketcal configuration

# Case-management backend to fetch cases from:
# api_url = \"{DEFAULT_API_URL}\"

# Bearer token for the backend API:
# api_token = \"...\"

# Judge name to build calendars for:
# judge = \"Maria Lee\"

# Refresh period for `docketcal watch`, in seconds:
# refresh_secs = {DEFAULT_REFRESH_SECS}
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DocketError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DocketError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_empty() {
        // A default config serializes to nothing: every field is either
        // defaulted-and-skipped or None.
        let rendered = toml::to_string_pretty(&DocketConfig::default()).unwrap();
        assert_eq!(rendered, "");

        let parsed: DocketConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.api_url, DEFAULT_API_URL);
        assert_eq!(parsed.refresh_secs, DEFAULT_REFRESH_SECS);
        assert!(parsed.api_token.is_none());
        assert!(parsed.judge.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let parsed: DocketConfig = toml::from_str(
            r#"
api_url = "https://court.example.org"
api_token = "secret"
judge = "Maria Lee"
refresh_secs = 60
"#,
        )
        .unwrap();

        assert_eq!(parsed.api_url, "https://court.example.org");
        assert_eq!(parsed.api_token.as_deref(), Some("secret"));
        assert_eq!(parsed.judge.as_deref(), Some("Maria Lee"));
        assert_eq!(parsed.refresh_secs, 60);
    }
}
