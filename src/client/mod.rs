//! Puppy Bowl players API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod puppybowl;

#[cfg(test)]
pub use mock::MockRosterClient;
pub use models::{ApiResponse, NewPlayer, NewPlayerData, Player, PlayerStatus, PlayersData};
pub use puppybowl::PuppyBowlClient;

/// Players API operations.
///
/// Implementations return the raw envelope; deciding what an unsuccessful
/// reply means is left to the caller, which knows the fallback message.
#[async_trait]
pub trait RosterApi: Send + Sync {
    /// `GET <base>`
    async fn list_players(&self) -> Result<ApiResponse<PlayersData>>;

    /// `POST <base>`
    async fn create_player(&self, player: &NewPlayer) -> Result<ApiResponse<NewPlayerData>>;

    /// `DELETE <base>/<id>`
    async fn delete_player(&self, player_id: &str) -> Result<ApiResponse<serde_json::Value>>;
}
