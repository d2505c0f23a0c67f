//! Puppy Bowl API data models

mod envelope;
mod player;

pub use envelope::{ApiResponse, NewPlayerData, PlayersData};
pub use player::{NewPlayer, Player, PlayerStatus};
