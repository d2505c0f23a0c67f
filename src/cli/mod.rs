//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod play;
pub mod prompt;
pub mod roster;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, StatusChoice};
pub use context::CommandContext;

use crate::roster::StatusFilter;

/// puppybowl - view and manage the Puppy Bowl roster from your terminal
#[derive(Parser, Debug)]
#[command(name = "puppybowl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "PUPPYBOWL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "PUPPYBOWL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override API host (e.g. http://localhost:3000)
    #[arg(long, global = true, env = "PUPPYBOWL_HOST", hide_env = true)]
    pub host: Option<String>,

    /// Override cohort path segment
    #[arg(long, global = true, env = "PUPPYBOWL_COHORT", hide_env = true)]
    pub cohort: Option<String>,

    /// Override the team id given to new players
    #[arg(long, global = true, env = "PUPPYBOWL_TEAM_ID", hide_env = true)]
    pub team_id: Option<i64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PUPPYBOWL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration file
    Init {
        /// Accept the current values without prompting
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the resolved configuration
    Status,

    /// Show the full roster
    List,

    /// Show one player picked at random
    Random,

    /// Show the roster filtered by status
    Roster {
        /// Which players to show
        #[arg(long, short = 's', value_enum, default_value = "all")]
        status: StatusFilter,
    },

    /// Add a player (prompts for anything not given)
    Add(AddArgs),

    /// Remove a player, then show a random one
    Remove {
        /// Player ID (prompted for when omitted)
        id: Option<String>,
    },

    /// Interactive roster browser
    Play,
}

/// Values for a new player
#[derive(Debug, Clone, Args, Default)]
pub struct AddArgs {
    /// Player name
    #[arg(long)]
    pub name: Option<String>,

    /// Breed
    #[arg(long)]
    pub breed: Option<String>,

    /// Field or bench
    #[arg(long, value_enum)]
    pub status: Option<StatusChoice>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_roster_defaults_to_all() {
        let cli = Cli::try_parse_from(["puppybowl", "roster"]).unwrap();
        match cli.command {
            Commands::Roster { status } => assert_eq!(status, StatusFilter::All),
            other => panic!("Expected Roster, got {:?}", other),
        }
    }

    #[test]
    fn test_add_flags() {
        let cli = Cli::try_parse_from([
            "puppybowl",
            "add",
            "--name",
            "Rex",
            "--breed",
            "Lab",
            "--status",
            "field",
            "--image-url",
            "http://x/img.png",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.name.as_deref(), Some("Rex"));
                assert_eq!(args.status, Some(StatusChoice::Field));
                assert_eq!(args.image_url.as_deref(), Some("http://x/img.png"));
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_id_is_optional() {
        let cli = Cli::try_parse_from(["puppybowl", "remove"]).unwrap();
        assert!(matches!(cli.command, Commands::Remove { id: None }));

        let cli = Cli::try_parse_from(["puppybowl", "remove", "7"]).unwrap();
        match cli.command {
            Commands::Remove { id } => assert_eq!(id.as_deref(), Some("7")),
            other => panic!("Expected Remove, got {:?}", other),
        }
    }
}
