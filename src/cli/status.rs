//! Status command implementation

use colored::Colorize;

use crate::cli::context::{load_config, resolve_format};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let config_found = config_path.exists();
    let config = load_config(opts)?;
    let format = resolve_format(opts.format, &config)?;

    if format == OutputFormat::Json {
        let output = serde_json::json!({
            "data": {
                "config_path": config_path.display().to_string(),
                "config_found": config_found,
                "host": config.host,
                "cohort": config.cohort,
                "team_id": config.team_id,
                "players_url": config.players_url(),
            },
            "meta": {
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "puppybowl Configuration Status".bold());

    if config_found {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "{} No config file at {} (using defaults)",
            "○".dimmed(),
            config_path.display()
        );
        println!("  → Run 'puppybowl init' to create one");
    }

    println!();
    println!("Host:    {}", config.host);
    println!("Cohort:  {}", config.cohort);
    println!("Team ID: {}", config.team_id);
    println!("Roster:  {}", config.players_url().cyan());

    match config.validate() {
        Ok(()) => println!("\n{} Endpoint looks valid", "✓".green()),
        Err(e) => println!("\n{} {}", "✗".red(), e),
    }

    Ok(())
}
