//! Command execution context
//!
//! Resolves configuration from file, environment and flags, then wires the
//! HTTP client and terminal surface into a roster controller.

use std::process::ExitCode;

use clap::ValueEnum;
use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::PuppyBowlClient;
use crate::config::Config;
use crate::display::TerminalSurface;
use crate::error::{ConfigError, Result};
use crate::roster::RosterController;

/// Controller type used by every command
pub type Controller = RosterController<PuppyBowlClient, TerminalSurface>;

/// Context for command execution: resolved config plus a ready controller
pub struct CommandContext {
    /// Configuration with runtime overrides applied
    pub config: Config,
    /// Roster controller bound to the configured endpoint
    pub controller: Controller,
}

impl CommandContext {
    /// Build the context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be read or the endpoint is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        Self::build(opts, TerminalSurface::new)
    }

    /// Build the context for an interactive session, where each render
    /// replaces the previous one on screen.
    pub fn interactive(opts: &GlobalOptions) -> Result<Self> {
        Self::build(opts, TerminalSurface::interactive)
    }

    fn build(opts: &GlobalOptions, surface: fn(OutputFormat) -> TerminalSurface) -> Result<Self> {
        let config = load_config(opts)?;
        config.validate()?;

        let format = resolve_format(opts.format, &config)?;
        let client = PuppyBowlClient::new(&config.players_url())?;
        debug!("Using endpoint {}", client.base_url());

        let controller = RosterController::new(client, surface(format), config.team_id);

        Ok(Self { config, controller })
    }

    /// Failure if anything reached the error line during the command
    pub fn exit_code(&self) -> ExitCode {
        if self.controller.surface().has_error() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Load the config file and apply flag/env overrides
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;
    config.apply_overrides(opts.host_ref(), opts.cohort_ref(), opts.team_id);
    Ok(config)
}

/// Flag/env format, else the config preference, else pretty
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }

    match config.preferences.format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true).map_err(|_| {
            ConfigError::Invalid(format!("unknown output format \"{}\"", name)).into()
        }),
        None => Ok(OutputFormat::default()),
    }
}
