//! Player identification.
//!
//! ## ParticipantId
//!
//! Stable identity of someone added on the setup screen. Ids are handed out
//! monotonically and never reused within a session, so removing "Player 2"
//! does not make a later participant inherit its id.
//!
//! ## PlayerRole
//!
//! The secret role dealt to one seat of a round. Seats are numbered from 1.

use serde::{Deserialize, Serialize};

/// Identity of a participant on the setup screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant({})", self.0)
    }
}

/// Role of one player in a round.
///
/// `player_number` is 1-based and the numbers of a round are exactly
/// `1..=participant_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRole {
    pub player_number: u8,
    pub is_impostor: bool,
}

impl PlayerRole {
    #[must_use]
    pub const fn crew(player_number: u8) -> Self {
        Self {
            player_number,
            is_impostor: false,
        }
    }

    #[must_use]
    pub const fn impostor(player_number: u8) -> Self {
        Self {
            player_number,
            is_impostor: true,
        }
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.player_number)
    }
}
