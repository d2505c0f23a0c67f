//! The `{ success, error, data }` envelope wrapping every API reply

use serde::Deserialize;

use super::player::Player;
use crate::error::ApiError;

/// Error detail reported by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope.
///
/// The API reports failures in-band via `success: false`, so the envelope is
/// inspected regardless of the HTTP status code.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default)]
    pub error: Option<ApiErrorBody>,

    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// `data` of a player collection reply
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayersData {
    #[serde(default)]
    pub players: Vec<Player>,
}

/// `data` of a create-player reply
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerData {
    pub new_player: Player,
}

impl<T> ApiResponse<T> {
    /// The API's own error message, if it sent one
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }

    /// Turn `success: false` into [`ApiError::Rejected`], using `fallback`
    /// when the API gave no message.
    pub fn ensure_success(&self, fallback: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            let message = self.error_message().unwrap_or(fallback);
            Err(ApiError::Rejected(message.to_string()))
        }
    }

    /// Unwrap `data` from a successful reply
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        self.ensure_success(fallback)?;
        self.data.ok_or_else(|| {
            ApiError::InvalidResponse("successful reply without a data field".to_string())
        })
    }

    #[cfg(test)]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    #[cfg(test)]
    pub fn rejected(message: Option<&str>) -> Self {
        Self {
            success: false,
            error: message.map(|m| ApiErrorBody {
                name: Some("ApiError".to_string()),
                message: Some(m.to_string()),
            }),
            data: None,
        }
    }
}
