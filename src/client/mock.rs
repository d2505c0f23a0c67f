//! Mock players API client for testing
//!
//! Keeps an in-memory roster so create/delete behave like the real API, and
//! can be told to reject or fail the next call.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::models::{ApiResponse, NewPlayer, NewPlayerData, Player, PlayerStatus, PlayersData};
use super::RosterApi;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockRosterClient::new()
///     .with_players(vec![player(1, "Ace", PlayerStatus::Field)])
///     .await;
///
/// let reply = mock.list_players().await?;
/// assert_eq!(reply.into_data("")?.players.len(), 1);
/// ```
pub struct MockRosterClient {
    /// Current roster, returned from list_players
    players: Arc<Mutex<Vec<Player>>>,
    /// Next id handed out by create_player
    next_id: Arc<Mutex<i64>>,
    /// Transport error for the next call - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// `success: false` reply (with optional message) for the next call
    rejection: Arc<Mutex<Option<Option<String>>>>,
    /// Answer the next list_players with `success: true` but no `data`
    omit_data: Arc<Mutex<bool>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl Default for MockRosterClient {
    fn default() -> Self {
        Self {
            players: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            error: Arc::new(Mutex::new(None)),
            rejection: Arc::new(Mutex::new(None)),
            omit_data: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub list_players: usize,
    pub create_player: usize,
    pub delete_player: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.list_players + self.create_player + self.delete_player
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "create_player")
    pub method: String,
    /// Player id for deletions
    pub player_id: Option<String>,
    /// Body for creations
    pub body: Option<NewPlayer>,
}

/// Build a player fixture
pub fn player(id: i64, name: &str, status: PlayerStatus) -> Player {
    Player {
        id,
        name: name.to_string(),
        breed: format!("{} breed", name),
        status,
        image_url: format!("http://img.test/{}.png", id),
        team_id: None,
    }
}

impl MockRosterClient {
    /// Create a new mock client with an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the roster. Created players get ids above the highest seeded one.
    pub async fn with_players(self, players: Vec<Player>) -> Self {
        let max_id = players.iter().map(|p| p.id).max().unwrap_or(0);
        *self.next_id.lock().await = max_id + 1;
        *self.players.lock().await = players;
        self
    }

    /// Set the id the next created player receives.
    pub async fn with_next_id(self, id: i64) -> Self {
        *self.next_id.lock().await = id;
        self
    }

    /// Configure a transport error for the next API call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make the next API call fail with a transport error.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Configure a `success: false` reply for the next API call.
    pub async fn with_rejection(self, message: Option<&str>) -> Self {
        *self.rejection.lock().await = Some(message.map(str::to_string));
        self
    }

    /// Make the next list_players reply succeed without a `data` field.
    pub async fn omit_data_next(&self) {
        *self.omit_data.lock().await = true;
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Current roster contents.
    pub async fn players(&self) -> Vec<Player> {
        self.players.lock().await.clone()
    }

    /// Consume a pending transport error, if any.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Consume a pending rejection, if any.
    async fn take_rejection<T>(&self) -> Option<ApiResponse<T>> {
        self.rejection
            .lock()
            .await
            .take()
            .map(|message| ApiResponse::rejected(message.as_deref()))
    }

    async fn capture_request(
        &self,
        method: &str,
        player_id: Option<&str>,
        body: Option<&NewPlayer>,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            player_id: player_id.map(str::to_string),
            body: body.cloned(),
        });
    }
}

#[async_trait]
impl RosterApi for MockRosterClient {
    async fn list_players(&self) -> Result<ApiResponse<PlayersData>> {
        self.capture_request("list_players", None, None).await;
        self.call_count.lock().await.list_players += 1;
        self.check_error().await?;

        if let Some(rejected) = self.take_rejection().await {
            return Ok(rejected);
        }

        if std::mem::take(&mut *self.omit_data.lock().await) {
            return Ok(ApiResponse {
                success: true,
                error: None,
                data: None,
            });
        }

        let players = self.players.lock().await.clone();
        Ok(ApiResponse::ok(PlayersData { players }))
    }

    async fn create_player(&self, request: &NewPlayer) -> Result<ApiResponse<NewPlayerData>> {
        self.capture_request("create_player", None, Some(request)).await;
        self.call_count.lock().await.create_player += 1;
        self.check_error().await?;

        if let Some(rejected) = self.take_rejection().await {
            return Ok(rejected);
        }

        let id = {
            let mut next_id = self.next_id.lock().await;
            let id = *next_id;
            *next_id += 1;
            id
        };

        let new_player = Player {
            id,
            name: request.name.clone(),
            breed: request.breed.clone(),
            status: request.status.clone(),
            image_url: request.image_url.clone(),
            team_id: Some(request.team_id),
        };
        self.players.lock().await.push(new_player.clone());

        Ok(ApiResponse::ok(NewPlayerData { new_player }))
    }

    async fn delete_player(&self, player_id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.capture_request("delete_player", Some(player_id), None).await;
        self.call_count.lock().await.delete_player += 1;
        self.check_error().await?;

        if let Some(rejected) = self.take_rejection().await {
            return Ok(rejected);
        }

        let mut players = self.players.lock().await;
        let before = players.len();
        players.retain(|p| p.id.to_string() != player_id);

        if players.len() == before {
            return Ok(ApiResponse::rejected(Some(&format!(
                "No player found with id {}",
                player_id
            ))));
        }

        Ok(ApiResponse::ok(serde_json::Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lists_seeded_players() {
        let mock = MockRosterClient::new()
            .with_players(vec![
                player(1, "Ace", PlayerStatus::Field),
                player(2, "Bo", PlayerStatus::Bench),
            ])
            .await;

        let players = mock.list_players().await.unwrap().into_data("").unwrap().players;

        assert_eq!(players.len(), 2);
        assert_eq!(mock.call_counts().await.list_players, 1);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockRosterClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.list_players().await.is_err());
        assert!(mock.list_players().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_rejection_consumed_once() {
        let mock = MockRosterClient::new().with_rejection(Some("nope")).await;

        let first = mock.list_players().await.unwrap();
        assert!(!first.success);
        assert_eq!(first.error_message(), Some("nope"));

        assert!(mock.list_players().await.unwrap().success);
    }

    #[tokio::test]
    async fn test_mock_create_then_delete() {
        let mock = MockRosterClient::new().with_next_id(42).await;
        let request = NewPlayer {
            name: "Rex".to_string(),
            breed: "Lab".to_string(),
            status: PlayerStatus::Field,
            image_url: "http://x/img.png".to_string(),
            team_id: 520,
        };

        let created = mock
            .create_player(&request)
            .await
            .unwrap()
            .into_data("")
            .unwrap()
            .new_player;
        assert_eq!(created.id, 42);
        assert_eq!(created.team_id, Some(520));
        assert_eq!(mock.players().await.len(), 1);

        assert!(mock.delete_player("42").await.unwrap().success);
        assert!(mock.players().await.is_empty());
        assert!(!mock.delete_player("42").await.unwrap().success);

        let counts = mock.call_counts().await;
        assert_eq!(counts.total(), 3);
    }
}
