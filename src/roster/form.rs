//! Add-player form state

use crate::client::{NewPlayer, PlayerStatus};

/// Values of the add-player inputs.
///
/// Survives a failed submission unchanged and is reset after a successful one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub breed: String,
    pub status: PlayerStatus,
    pub image_url: String,
}

impl PlayerForm {
    /// Build the creation request; text inputs are trimmed
    pub fn to_request(&self, team_id: i64) -> NewPlayer {
        NewPlayer {
            name: self.name.trim().to_string(),
            breed: self.breed.trim().to_string(),
            status: self.status.clone(),
            image_url: self.image_url.trim().to_string(),
            team_id,
        }
    }

    /// Back to empty inputs with status `bench`
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_text_fields() {
        let form = PlayerForm {
            name: "  Rex ".to_string(),
            breed: "\tLab\n".to_string(),
            status: PlayerStatus::Field,
            image_url: " http://x/img.png ".to_string(),
        };

        let request = form.to_request(520);

        assert_eq!(request.name, "Rex");
        assert_eq!(request.breed, "Lab");
        assert_eq!(request.image_url, "http://x/img.png");
        assert_eq!(request.status, PlayerStatus::Field);
        assert_eq!(request.team_id, 520);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = PlayerForm {
            name: "Rex".to_string(),
            breed: "Lab".to_string(),
            status: PlayerStatus::Field,
            image_url: "http://x/img.png".to_string(),
        };

        form.reset();

        assert!(form.name.is_empty());
        assert!(form.breed.is_empty());
        assert!(form.image_url.is_empty());
        assert_eq!(form.status, PlayerStatus::Bench);
    }
}
