//! Common CLI types shared across commands

use crate::client::PlayerStatus;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one boxed card per player (default)
    #[default]
    Pretty,
    /// Table format - one row per player
    Table,
    /// JSON format - structured for scripts
    Json,
}

/// Status selectable when adding a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusChoice {
    /// On the field
    Field,
    /// On the bench
    Bench,
}

impl From<StatusChoice> for PlayerStatus {
    fn from(choice: StatusChoice) -> Self {
        match choice {
            StatusChoice::Field => PlayerStatus::Field,
            StatusChoice::Bench => PlayerStatus::Bench,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_output_format_parses_case_insensitively() {
        assert_eq!(
            OutputFormat::from_str("JSON", true).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_status_choice_maps_to_player_status() {
        assert_eq!(PlayerStatus::from(StatusChoice::Field), PlayerStatus::Field);
        assert_eq!(PlayerStatus::from(StatusChoice::Bench), PlayerStatus::Bench);
    }
}
