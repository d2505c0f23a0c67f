//! Player cards and the surface they are mounted on
//!
//! A [`Surface`] has one mounting point, fully replaced by every render, and
//! one error line holding the latest error message.

use serde::Serialize;

use crate::client::Player;

pub mod terminal;

pub use terminal::TerminalSurface;

/// Visual category of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStyle {
    OnField,
    Benched,
}

impl CardStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            CardStyle::OnField => "on-field",
            CardStyle::Benched => "benched",
        }
    }
}

/// Rendered unit representing one player
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
    pub breed: String,
    pub id: i64,
    pub status: String,
    pub style: CardStyle,
}

impl Card {
    /// The four text lines of the card, in display order
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Name: {}", self.name),
            format!("Breed: {}", self.breed),
            format!("ID: {}", self.id),
            format!("Status: {}", self.status),
        ]
    }
}

impl From<&Player> for Card {
    fn from(player: &Player) -> Self {
        let style = if player.status.is_field() {
            CardStyle::OnField
        } else {
            CardStyle::Benched
        };

        Self {
            image_src: player.image_url.clone(),
            image_alt: player.name.clone(),
            name: player.name.clone(),
            breed: player.breed.clone(),
            id: player.id,
            status: player.status.to_string(),
            style,
        }
    }
}

/// Where the roster is shown
pub trait Surface {
    /// Replace everything at the mounting point with `cards`
    fn mount(&mut self, cards: &[Card]);

    /// Overwrite the error line with `message`
    fn show_error(&mut self, message: &str);
}

/// In-memory surface that records every render, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// What is currently mounted
    pub mounted: Option<Vec<Card>>,
    /// Every mount, oldest first
    pub history: Vec<Vec<Card>>,
    /// Current error line
    pub error: Option<String>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn mount(&mut self, cards: &[Card]) {
        self.mounted = Some(cards.to_vec());
        self.history.push(cards.to_vec());
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}
