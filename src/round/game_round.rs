//! One dealt round: roles, secret word, and the reveal cursor.
//!
//! Roles and word are fixed when the round is dealt. The only thing that
//! changes afterwards is the index of the player holding the device, which
//! moves forward one seat per acknowledgment and never skips or goes back.

use serde::Serialize;

use crate::core::{GameRng, PlayerRole};
use crate::error::GameError;
use crate::roles::{assign_roles, validate_counts, Roles};
use crate::words::WordBank;

/// What the player holding the device gets to see.
///
/// `word` is `None` for impostors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerReveal<'a> {
    pub player_number: u8,
    pub is_impostor: bool,
    pub word: Option<&'a str>,
    pub is_last_player: bool,
}

/// Result of acknowledging the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundProgress {
    /// The device passes to the player at this index.
    Next(usize),
    /// The last player acknowledged; the round is over.
    Finished,
}

/// A dealt round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameRound {
    roles: Roles,
    word: String,
    topic_id: String,
    current_index: usize,
}

impl GameRound {
    /// Deal a round: pick the word, then the impostors.
    ///
    /// `exclude` is the word served last time; it is skipped whenever the
    /// topic has something else to offer. Fails if the counts break the
    /// role-assignment contract or the topic has no words.
    pub fn deal(
        bank: &WordBank,
        topic_id: &str,
        participant_count: usize,
        impostor_count: usize,
        exclude: Option<&str>,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        validate_counts(participant_count, impostor_count)?;

        let word = bank.select_word(topic_id, exclude, rng);
        if word.is_empty() {
            return Err(GameError::EmptyTopic {
                topic: topic_id.to_string(),
            });
        }
        let word = word.to_string();

        let roles = assign_roles(participant_count, impostor_count, rng)?;

        Ok(Self {
            roles,
            word,
            topic_id: topic_id.to_string(),
            current_index: 0,
        })
    }

    /// Roles in player-number order.
    #[must_use]
    pub fn roles(&self) -> &[PlayerRole] {
        &self.roles
    }

    /// The secret word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn impostor_count(&self) -> usize {
        self.roles.iter().filter(|r| r.is_impostor).count()
    }

    /// 0-based index of the player currently holding the device.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_role(&self) -> PlayerRole {
        self.roles[self.current_index]
    }

    #[must_use]
    pub fn is_last_player(&self) -> bool {
        self.current_index + 1 == self.roles.len()
    }

    /// The reveal screen for the current player.
    #[must_use]
    pub fn current_reveal(&self) -> PlayerReveal<'_> {
        let role = self.current_role();
        PlayerReveal {
            player_number: role.player_number,
            is_impostor: role.is_impostor,
            word: (!role.is_impostor).then_some(self.word.as_str()),
            is_last_player: self.is_last_player(),
        }
    }

    /// Acknowledge the current player.
    ///
    /// Moves to the next seat, or reports `Finished` on the last one. The
    /// cursor stays on the last seat once finished.
    pub fn advance(&mut self) -> RoundProgress {
        if self.is_last_player() {
            return RoundProgress::Finished;
        }
        self.current_index += 1;
        RoundProgress::Next(self.current_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Topic;

    fn bank() -> WordBank {
        let mut bank = WordBank::new();
        bank.insert(
            Topic::new("food", "Food"),
            vec!["pan".to_string(), "queso".to_string()],
        );
        bank.insert(Topic::new("blank", "Blank"), Vec::new());
        bank
    }

    #[test]
    fn test_deal() {
        let mut rng = GameRng::new(42);
        let round = GameRound::deal(&bank(), "food", 6, 2, None, &mut rng).unwrap();

        assert_eq!(round.participant_count(), 6);
        assert_eq!(round.impostor_count(), 2);
        assert_eq!(round.current_index(), 0);
        assert_eq!(round.topic_id(), "food");
        assert!(["pan", "queso"].contains(&round.word()));
    }

    #[test]
    fn test_deal_excludes_previous_word() {
        let bank = bank();
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let round = GameRound::deal(&bank, "food", 3, 1, Some("pan"), &mut rng).unwrap();
            assert_eq!(round.word(), "queso");
        }
    }

    #[test]
    fn test_deal_rejects_empty_topic() {
        let mut rng = GameRng::new(42);
        let err = GameRound::deal(&bank(), "blank", 3, 1, None, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::EmptyTopic {
                topic: "blank".to_string()
            }
        );

        let err = GameRound::deal(&bank(), "missing", 3, 1, None, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::EmptyTopic { .. }));
    }

    #[test]
    fn test_deal_rejects_bad_counts() {
        let mut rng = GameRng::new(42);
        let err = GameRound::deal(&bank(), "food", 2, 2, None, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::InvalidImpostorCount { .. }));
    }

    #[test]
    fn test_reveal_hides_word_from_impostors() {
        let mut rng = GameRng::new(42);
        let mut round = GameRound::deal(&bank(), "food", 5, 2, None, &mut rng).unwrap();

        loop {
            let reveal = round.current_reveal();
            let role = round.current_role();
            assert_eq!(reveal.player_number, role.player_number);
            if role.is_impostor {
                assert_eq!(reveal.word, None);
            } else {
                assert_eq!(reveal.word, Some(round.word()));
            }
            if round.advance() == RoundProgress::Finished {
                break;
            }
        }
    }

    #[test]
    fn test_advance_walks_every_seat_once() {
        let mut rng = GameRng::new(7);
        let mut round = GameRound::deal(&bank(), "food", 4, 1, None, &mut rng).unwrap();

        assert!(!round.is_last_player());
        assert_eq!(round.advance(), RoundProgress::Next(1));
        assert_eq!(round.advance(), RoundProgress::Next(2));
        assert_eq!(round.advance(), RoundProgress::Next(3));
        assert!(round.is_last_player());
        assert!(round.current_reveal().is_last_player);
        assert_eq!(round.advance(), RoundProgress::Finished);
        assert_eq!(round.current_index(), 3);
    }

    #[test]
    fn test_round_serializes_for_display() {
        let mut rng = GameRng::new(42);
        let round = GameRound::deal(&bank(), "food", 3, 1, None, &mut rng).unwrap();

        let value = serde_json::to_value(&round).unwrap();
        assert_eq!(value["topic_id"], "food");
        assert_eq!(value["current_index"], 0);
        assert_eq!(value["roles"].as_array().unwrap().len(), 3);
    }
}
