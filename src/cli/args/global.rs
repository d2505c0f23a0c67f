//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single argument.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct holds
/// the flag/env layer; the config file is merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.puppybowl/config.yaml)
    pub config: Option<String>,

    /// API host override
    pub host: Option<String>,

    /// Cohort override
    pub cohort: Option<String>,

    /// Team id override for new players
    pub team_id: Option<i64>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            host: cli.host.clone(),
            cohort: cli.cohort.clone(),
            team_id: cli.team_id,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get host override as `Option<&str>`.
    pub fn host_ref(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Get cohort override as `Option<&str>`.
    pub fn cohort_ref(&self) -> Option<&str> {
        self.cohort.as_deref()
    }
}
