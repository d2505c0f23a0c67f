//! Roster controller
//!
//! Every operation issues one request against the players API and then either
//! mounts cards or reports an error. Nothing is cached between operations:
//! each one re-reads the roster from the API.

use log::{debug, error, info};

use crate::client::{Player, RosterApi};
use crate::display::{Card, Surface};
use crate::error::{ApiError, Error, Result};

mod filter;
mod form;

pub use filter::{StatusFilter, pick_index};
pub use form::PlayerForm;

const RANDOM_FAILED: &str = "Failed to fetch random player.";
const ROSTER_FAILED: &str = "Failed to fetch roster.";
const ADD_FAILED: &str = "Failed to add player.";
const REMOVE_FAILED: &str = "Failed to remove player.";

/// Source of the id for the remove operation
pub trait IdPrompt {
    /// Ask for a player id; `None` when the user cancels or enters nothing
    fn ask_player_id(&self) -> Option<String>;
}

/// Drives the five roster operations against one API and one surface
pub struct RosterController<A, S> {
    api: A,
    surface: S,
    team_id: i64,
}

impl<A: RosterApi, S: Surface> RosterController<A, S> {
    pub fn new(api: A, surface: S, team_id: i64) -> Self {
        Self {
            api,
            surface,
            team_id,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the whole roster and mount it.
    ///
    /// Failures go to the log only; the mounted cards and the error line are
    /// left as they were.
    pub async fn load_roster(&mut self) {
        let loaded = match self.api.list_players().await {
            Ok(response) => response
                .into_data("API reported failure")
                .map_err(Error::from),
            Err(err) => Err(err),
        };

        match loaded {
            Ok(data) => {
                debug!("Loaded {} players", data.players.len());
                self.render(&data.players);
            }
            Err(err) => error!("Failed to load roster: {}", err),
        }
    }

    /// Mount one player chosen uniformly at random
    pub async fn show_random(&mut self) {
        if let Err(err) = self.try_show_random().await {
            self.report(err);
        }
    }

    async fn try_show_random(&mut self) -> Result<()> {
        let players = self.fetch_nonempty(RANDOM_FAILED).await?;
        let index = pick_index(players.len(), &mut rand::rng());
        debug!("Picked player {} of {}", index + 1, players.len());
        self.render(std::slice::from_ref(&players[index]));
        Ok(())
    }

    /// Mount the players matching `filter`.
    ///
    /// An empty roster is an error; an empty match is not, and leaves the
    /// mounting point empty.
    pub async fn show_filtered(&mut self, filter: StatusFilter) {
        if let Err(err) = self.try_show_filtered(filter).await {
            self.report(err);
        }
    }

    async fn try_show_filtered(&mut self, filter: StatusFilter) -> Result<()> {
        let players = self.fetch_nonempty(ROSTER_FAILED).await?;
        let kept = filter.apply(players);
        debug!("{} players match {:?}", kept.len(), filter);
        self.render(&kept);
        Ok(())
    }

    /// Submit the form as a new player.
    ///
    /// On success the new player is mounted alone, the full roster is
    /// reloaded, and the form is reset. On failure the form keeps its values.
    pub async fn add_player(&mut self, form: &mut PlayerForm) {
        let request = form.to_request(self.team_id);

        let created = match self.api.create_player(&request).await {
            Ok(response) => response
                .into_data(ADD_FAILED)
                .map(|d| d.new_player)
                .map_err(Error::from),
            Err(err) => Err(err),
        };

        match created {
            Ok(player) => {
                info!("Added player {} ({})", player.name, player.id);
                self.render(std::slice::from_ref(&player));
                self.load_roster().await;
                form.reset();
            }
            Err(err) => self.report(err),
        }
    }

    /// Ask for an id and remove that player. Cancelling does nothing.
    pub async fn remove_player<P: IdPrompt + ?Sized>(&mut self, prompt: &P) {
        match prompt.ask_player_id() {
            Some(id) if !id.trim().is_empty() => self.remove_player_by_id(id.trim()).await,
            _ => debug!("Remove cancelled"),
        }
    }

    /// Remove a player, then show a new random one
    pub async fn remove_player_by_id(&mut self, player_id: &str) {
        let removed = match self.api.delete_player(player_id).await {
            Ok(response) => response.ensure_success(REMOVE_FAILED).map_err(Error::from),
            Err(err) => Err(err),
        };

        match removed {
            Ok(()) => {
                info!("Player successfully deleted.");
                self.show_random().await;
            }
            Err(err) => self.report(err),
        }
    }

    /// Fetch the roster, treating rejection and emptiness as errors
    async fn fetch_nonempty(&self, fallback: &str) -> Result<Vec<Player>> {
        let players = self.api.list_players().await?.into_data(fallback)?.players;
        if players.is_empty() {
            return Err(ApiError::Empty.into());
        }
        Ok(players)
    }

    fn render(&mut self, players: &[Player]) {
        let cards: Vec<Card> = players.iter().map(Card::from).collect();
        self.surface.mount(&cards);
    }

    fn report(&mut self, err: Error) {
        error!("{}", err);
        self.surface.show_error(&err.to_string());
    }
}
