use std::path::Path;

use crate::error::ConfigError;
use crate::game::ActivePlayer;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Session configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Who moves first. Drawn at random when unset.
    pub starting_player: Option<ActivePlayer>,
    /// Seed for the starting-player draw, for reproducible sessions.
    pub seed: Option<u64>,
    /// Rejected entries allowed per move prompt. Unset means unlimited.
    pub max_prompt_attempts: Option<usize>,
    /// Log filter for stderr output, e.g. `warn` or `connect_four=debug`.
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            starting_player: None,
            seed: None,
            max_prompt_attempts: None,
            log_level: "warn".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SessionConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_prompt_attempts == Some(0) {
            return Err(ConfigError::Validation(
                "max_prompt_attempts must be > 0".into(),
            ));
        }

        // Accept bare levels and `target=level` directives.
        for directive in self.log_level.split(',') {
            let level = directive.rsplit('=').next().unwrap_or("").trim();
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::Validation(format!(
                    "log_level has unknown level '{level}'"
                )));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&SessionConfig::default()).expect("default config serializes")
    }
}
