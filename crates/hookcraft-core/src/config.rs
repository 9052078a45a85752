//! Application configuration
//!
//! Resolution order, highest first: command-line flag, environment variable
//! (both handled by the CLI through clap), `config.toml`, built-in defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by the CLI and the web server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the actor endpoint; methods are appended as path segments
    pub actor_url: String,
    /// Public origin of the frontend, used for Stripe return URLs
    pub public_base_url: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub log_filter: String,
    /// Built frontend served by `hookcraft web`
    pub dist_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            actor_url: "http://127.0.0.1:4943/actor".to_string(),
            public_base_url: "http://localhost:3333".to_string(),
            port: 3333,
            request_timeout_secs: 30,
            log_filter: "hookcraft=info".to_string(),
            dist_dir: PathBuf::from("crates/hookcraft-web/dist"),
        }
    }
}

impl AppConfig {
    /// `$XDG_CONFIG_HOME/hookcraft/config.toml` (platform equivalent elsewhere)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hookcraft").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// defaults. Values are not validated here; overrides still apply, so
    /// call [`AppConfig::with_overrides`] (or [`AppConfig::validate`]) next.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply flag/env values on top of the file
    pub fn with_overrides(
        mut self,
        actor_url: Option<String>,
        public_base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = actor_url {
            self.actor_url = url;
        }
        if let Some(url) = public_base_url {
            self.public_base_url = url;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("actor_url", &self.actor_url)?;
        check_url("public_base_url", &self.public_base_url)?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "request_timeout_secs must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

fn check_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Invalid {
            message: format!("{} is empty", name),
        });
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            message: format!("{} must be an http(s) URL, got '{}'", name, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "actor_url = \"https://actor.example.com/v1\"\nport = 8080").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.actor_url, "https://actor.example.com/v1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/hookcraft.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "request_timeout_secs = 0").unwrap();
        let loaded = AppConfig::load(Some(file.path())).unwrap();
        assert!(matches!(
            loaded.with_overrides(None, None),
            Err(ConfigError::Invalid { .. })
        ));

        let err = AppConfig::default()
            .with_overrides(Some("ftp://actor".into()), None)
            .unwrap_err();
        assert!(err.to_string().contains("actor_url"));
    }

    #[test]
    fn test_override_replaces_invalid_file_value() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "actor_url = \"localhost:4943\"\nport = 4000").unwrap();

        let loaded = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(loaded.actor_url, "localhost:4943");

        let config = loaded
            .clone()
            .with_overrides(Some("http://127.0.0.1:4943/actor".into()), None)
            .unwrap();
        assert_eq!(config.actor_url, "http://127.0.0.1:4943/actor");
        assert_eq!(config.port, 4000);

        // Without an override the file value is still rejected
        assert!(matches!(
            loaded.with_overrides(None, None),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();
        assert!(matches!(
            AppConfig::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }
}
