//! Status filtering and random selection

use rand::Rng;

use crate::client::{Player, PlayerStatus};

/// Roster filter selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFilter {
    /// Players on the field
    Field,
    /// Players on the bench
    Bench,
    /// Everyone
    #[default]
    All,
}

impl StatusFilter {
    pub fn matches(self, status: &PlayerStatus) -> bool {
        match self {
            StatusFilter::Field => *status == PlayerStatus::Field,
            StatusFilter::Bench => *status == PlayerStatus::Bench,
            StatusFilter::All => true,
        }
    }

    /// Keep matching players, preserving order
    pub fn apply(self, players: Vec<Player>) -> Vec<Player> {
        players
            .into_iter()
            .filter(|p| self.matches(&p.status))
            .collect()
    }
}

/// Uniform index in `[0, len)`. `len` must be non-zero.
pub fn pick_index<R: Rng + ?Sized>(len: usize, rng: &mut R) -> usize {
    rng.random_range(0..len)
}
