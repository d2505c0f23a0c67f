//! Puppy Bowl API client implementation

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::{ApiResponse, NewPlayer, NewPlayerData, PlayersData, RosterApi};
use crate::error::{ApiError, ConfigError, Result};

/// Players API client over HTTP.
///
/// No timeout is configured: a request that never completes leaves the caller
/// waiting, and the last rendered view stays on screen.
pub struct PuppyBowlClient {
    http: HttpClient,
    base_url: Url,
}

impl PuppyBowlClient {
    /// Create a client for a players collection URL (`<host>/api/<cohort>/players`)
    pub fn new(players_url: &str) -> Result<Self> {
        let base_url = Url::parse(players_url).map_err(|e| {
            ConfigError::Invalid(format!("invalid API URL \"{}\": {}", players_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("invalid API URL \"{}\"", players_url)).into());
        }

        let http = HttpClient::builder()
            .user_agent(concat!("puppybowl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// The players collection URL this client talks to
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// URL of a single player, with the id escaped as one path segment
    fn player_url(&self, player_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(player_id);
        }
        url
    }

    /// Send a request and decode the reply envelope
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>> {
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        let url = response.url().clone();
        debug!("{} -> {}", url, status);

        let body = response.text().await.map_err(ApiError::from)?;

        let envelope = serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response (HTTP {}): {}", status, e))
        })?;

        if let (false, Some(error)) = (envelope.success, &envelope.error) {
            debug!(
                "API reported {}: {}",
                error.name.as_deref().unwrap_or("failure"),
                error.message.as_deref().unwrap_or("<no message>")
            );
        }

        Ok(envelope)
    }
}

#[async_trait]
impl RosterApi for PuppyBowlClient {
    async fn list_players(&self) -> Result<ApiResponse<PlayersData>> {
        debug!("GET {}", self.base_url);
        self.send(self.http.get(self.base_url.clone())).await
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<ApiResponse<NewPlayerData>> {
        debug!("POST {} ({})", self.base_url, player.name);
        self.send(self.http.post(self.base_url.clone()).json(player)).await
    }

    async fn delete_player(&self, player_id: &str) -> Result<ApiResponse<serde_json::Value>> {
        let url = self.player_url(player_id);
        debug!("DELETE {}", url);
        self.send(self.http.delete(url)).await
    }
}
