//! Configuration management for puppybowl

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Public Puppy Bowl API host
pub const DEFAULT_HOST: &str = "https://fsa-puppy-bowl.herokuapp.com";

/// Cohort path segment scoping the roster
pub const DEFAULT_COHORT: &str = "2302-acc-pt-web-pt-e";

/// Team every newly added player joins
pub const DEFAULT_TEAM_ID: i64 = 520;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// API host, scheme included
    #[serde(default = "default_host")]
    pub host: String,

    /// Cohort path segment
    #[serde(default = "default_cohort")]
    pub cohort: String,

    /// Team id attached to created players
    #[serde(default = "default_team_id")]
    pub team_id: i64,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format (pretty, table, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_cohort() -> String {
    DEFAULT_COHORT.to_string()
}

fn default_team_id() -> i64 {
    DEFAULT_TEAM_ID
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            cohort: default_cohort(),
            team_id: default_team_id(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".puppybowl").join("config.yaml"))
    }

    /// Resolve an optional explicit path against the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path, or the default one.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;
        if path.is_none() && !resolved.exists() {
            log::debug!("No config at {}, using defaults", resolved.display());
            return Ok(Self::default());
        }
        Self::load_from(&resolved)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path, or the default one
    pub fn save_at(&self, path: Option<&str>) -> Result<PathBuf> {
        let resolved = Self::resolve_path(path)?;
        self.save_to(&resolved)?;
        Ok(resolved)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Apply runtime overrides (CLI flags or environment) on top of the file values
    pub fn apply_overrides(
        &mut self,
        host: Option<&str>,
        cohort: Option<&str>,
        team_id: Option<i64>,
    ) {
        if let Some(host) = host {
            self.host = host.to_string();
        }
        if let Some(cohort) = cohort {
            self.cohort = cohort.to_string();
        }
        if let Some(team_id) = team_id {
            self.team_id = team_id;
        }
    }

    /// Check that the endpoint pieces can form a usable URL
    pub fn validate(&self) -> Result<()> {
        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "host must start with http:// or https:// (got \"{}\")",
                self.host
            ))
            .into());
        }

        let cohort = self.cohort.trim();
        if cohort.is_empty() || cohort.contains('/') {
            return Err(ConfigError::Invalid(format!(
                "cohort must be a single non-empty path segment (got \"{}\")",
                self.cohort
            ))
            .into());
        }

        Ok(())
    }

    /// The players collection endpoint: `<host>/api/<cohort>/players`
    pub fn players_url(&self) -> String {
        format!(
            "{}/api/{}/players",
            self.host.trim_end_matches('/'),
            self.cohort.trim()
        )
    }
}
