//! # Configuration Persistence
//!
//! Save and load dashboard settings to/from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::auth::Credentials;

/// Deployment environment the dashboard runs in.
///
/// Production tightens the popup handshake to exact-origin delivery;
/// every other environment uses the wildcard target so local setups
/// with mismatched ports keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Deployed build serving real users.
    Production,
    /// Local or staging build.
    #[default]
    Development,
}

impl Environment {
    /// Parses a lowercase environment name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "production" => Some(Self::Production),
            "development" => Some(Self::Development),
            _ => None,
        }
    }

    /// Resolves the effective environment, letting `ROLODEX_ENV`
    /// override whatever the config file stores.
    #[must_use]
    pub fn detect(stored: Environment) -> Environment {
        match std::env::var("ROLODEX_ENV") {
            Ok(name) => match Self::from_name(&name) {
                Some(env) => env,
                None => {
                    tracing::warn!(
                        value = %name,
                        "Unrecognized ROLODEX_ENV value, keeping configured environment"
                    );
                    stored
                }
            },
            Err(_) => stored,
        }
    }

    /// Returns true for the production environment.
    #[must_use]
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the Rolodex API server to connect to.
    pub server_url: String,

    /// Environment the dashboard was configured for.
    #[serde(default)]
    pub environment: Environment,

    /// Currently active credentials (if signed in).
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".to_string(),
            environment: Environment::Development,
            credentials: None,
        }
    }
}

impl Config {
    /// Returns the config file path.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rolodex").join("config.json"))
    }

    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Saves configuration to disk.
    pub fn save(&self) -> Result<(), String> {
        let Some(path) = Self::config_path() else {
            return Err("Could not determine config directory".to_string());
        };

        // Create config directory if needed
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                return Err(format!("Failed to create config directory: {}", e));
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&path, contents).map_err(|e| format!("Failed to write config: {}", e))?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }

    /// The environment the dashboard should actually run in, after
    /// applying the `ROLODEX_ENV` override.
    #[must_use]
    pub fn effective_environment(&self) -> Environment {
        Environment::detect(self.environment)
    }
}
