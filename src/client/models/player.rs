//! Player models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a player currently is: on the field or on the bench.
///
/// The API stores status as a free string; values other than `field` and
/// `bench` are kept verbatim so they round-trip and display unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerStatus {
    Field,
    #[default]
    Bench,
    Other(String),
}

impl PlayerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PlayerStatus::Field => "field",
            PlayerStatus::Bench => "bench",
            PlayerStatus::Other(s) => s,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, PlayerStatus::Field)
    }
}

impl From<String> for PlayerStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "field" => PlayerStatus::Field,
            "bench" => PlayerStatus::Bench,
            _ => PlayerStatus::Other(value),
        }
    }
}

impl From<PlayerStatus> for String {
    fn from(status: PlayerStatus) -> Self {
        match status {
            PlayerStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player resource as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Player ID, assigned by the API
    pub id: i64,

    /// Display name
    pub name: String,

    /// Breed (free text)
    #[serde(default)]
    pub breed: String,

    /// Field or bench
    #[serde(default)]
    pub status: PlayerStatus,

    /// Image source URL
    #[serde(default)]
    pub image_url: String,

    /// Owning team, if assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

/// Request body for creating a player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
    pub team_id: i64,
}
