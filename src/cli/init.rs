//! Init command implementation

use clap::ValueEnum;
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::cli::context::load_config;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the init command
///
/// Starts from the existing file (or defaults) with flag/env overrides applied.
/// Unless `yes` is set, each value is offered for editing before saving.
pub fn run(opts: &GlobalOptions, yes: bool) -> Result<()> {
    let mut config = match load_config(opts) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound(_))) => {
            let mut config = Config::default();
            config.apply_overrides(opts.host_ref(), opts.cohort_ref(), opts.team_id);
            config
        }
        Err(e) => return Err(e),
    };

    if let Some(format) = opts.format.and_then(|f| f.to_possible_value()) {
        config.preferences.format = Some(format.get_name().to_string());
    }

    if !yes {
        println!("{}", "Welcome to puppybowl!".bold().green());
        println!("Let's set up your roster connection.\n");

        let theme = ColorfulTheme::default();

        config.host = Input::<String>::with_theme(&theme)
            .with_prompt("API host")
            .with_initial_text(config.host.clone())
            .interact_text()?;

        config.cohort = Input::<String>::with_theme(&theme)
            .with_prompt("Cohort")
            .with_initial_text(config.cohort.clone())
            .interact_text()?;

        config.team_id = Input::<i64>::with_theme(&theme)
            .with_prompt("Team ID for new players")
            .with_initial_text(config.team_id.to_string())
            .interact_text()?;
    }

    config.validate()?;
    let path = config.save_at(opts.config_ref())?;

    println!("{} Configuration saved to: {}", "✓".green(), path.display());
    println!("  Roster: {}", config.players_url().cyan());

    if !yes {
        println!("\n{}", "You're all set! Try running:".bold());
        println!("  {} - Show the full roster", "puppybowl list".cyan());
        println!("  {} - Browse interactively", "puppybowl play".cyan());
    }

    Ok(())
}
