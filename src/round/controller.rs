//! Session controller: `Loading → Setup → Revealing → Setup`.
//!
//! The controller owns everything that changes during a session: the setup
//! being composed, the round being revealed, the RNG, and the word served
//! last so the next round can avoid it. Actions are processed one at a time
//! and each completes (clamping included) before returning.
//!
//! ```
//! use impostor_game::core::{GameRng, SetupRules};
//! use impostor_game::round::{GameController, RoundProgress};
//! use impostor_game::words::WordBank;
//!
//! let mut game = GameController::new(SetupRules::default(), GameRng::new(3));
//! game.finish_loading(WordBank::bundled()).unwrap();
//!
//! game.add_participant().unwrap();
//! game.add_participant().unwrap();
//! game.add_participant().unwrap();
//! game.start().unwrap();
//!
//! assert_eq!(game.acknowledge().unwrap(), RoundProgress::Next(1));
//! assert_eq!(game.acknowledge().unwrap(), RoundProgress::Next(2));
//! assert_eq!(game.acknowledge().unwrap(), RoundProgress::Finished);
//! assert!(game.is_in_setup());
//! ```

use tracing::{info, warn};

use super::game_round::{GameRound, PlayerReveal, RoundProgress};
use crate::core::{GameRng, ParticipantId, SetupRules};
use crate::error::{CatalogError, GameError};
use crate::setup::SetupState;
use crate::words::{Topic, WordBank};

/// Where the session currently is.
#[derive(Debug)]
pub enum Phase {
    /// Waiting for the word catalog.
    Loading,
    /// The catalog could not be loaded.
    LoadFailed(CatalogError),
    /// Composing participants, impostors and topic.
    Setup,
    /// Passing the device around.
    Revealing(GameRound),
}

impl Phase {
    /// Short description used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::LoadFailed(_) => "load failed",
            Phase::Setup => "in setup",
            Phase::Revealing(_) => "revealing",
        }
    }
}

/// Drives one session of the game.
#[derive(Debug)]
pub struct GameController {
    rules: SetupRules,
    rng: GameRng,
    bank: WordBank,
    setup: SetupState,
    phase: Phase,
    last_word: Option<String>,
}

impl GameController {
    /// New session waiting for its catalog.
    #[must_use]
    pub fn new(rules: SetupRules, rng: GameRng) -> Self {
        Self {
            rules,
            rng,
            bank: WordBank::new(),
            setup: SetupState::new(rules),
            phase: Phase::Loading,
            last_word: None,
        }
    }

    /// Session with the catalog already loaded.
    #[must_use]
    pub fn with_bank(rules: SetupRules, bank: WordBank, rng: GameRng) -> Self {
        let mut controller = Self::new(rules, rng);
        controller.install_bank(bank);
        controller
    }

    /// Hand over the loader's result. Only accepted while loading.
    ///
    /// Success moves to `Setup` with the first topic selected; failure moves
    /// to `LoadFailed`, which no action leaves.
    pub fn finish_loading(
        &mut self,
        result: Result<WordBank, CatalogError>,
    ) -> Result<(), GameError> {
        self.expect_loading("finish_loading")?;

        match result {
            Ok(bank) => self.install_bank(bank),
            Err(err) => {
                warn!(error = %err, "Word catalog failed to load");
                self.phase = Phase::LoadFailed(err);
            }
        }
        Ok(())
    }

    fn install_bank(&mut self, bank: WordBank) {
        info!(topics = bank.len(), "Session ready");
        self.setup = SetupState::for_bank(self.rules, &bank);
        self.bank = bank;
        self.phase = Phase::Setup;
    }

    // === Views ===

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_in_setup(&self) -> bool {
        matches!(self.phase, Phase::Setup)
    }

    #[must_use]
    pub fn setup(&self) -> &SetupState {
        &self.setup
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        self.bank.list_topics()
    }

    /// The round being revealed, if any.
    #[must_use]
    pub fn round(&self) -> Option<&GameRound> {
        match &self.phase {
            Phase::Revealing(round) => Some(round),
            _ => None,
        }
    }

    /// The reveal screen for the player holding the device.
    #[must_use]
    pub fn current_reveal(&self) -> Option<PlayerReveal<'_>> {
        self.round().map(GameRound::current_reveal)
    }

    /// The word dealt in the most recent round.
    #[must_use]
    pub fn last_word(&self) -> Option<&str> {
        self.last_word.as_deref()
    }

    /// Start is offered only in setup, with enough participants and a topic
    /// that has words.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.is_in_setup()
            && self.setup.can_start()
            && self
                .setup
                .topic_id()
                .is_some_and(|topic| !self.bank.words_for_topic(topic).is_empty())
    }

    // === Setup actions ===

    pub fn add_participant(&mut self) -> Result<Option<ParticipantId>, GameError> {
        self.expect_setup("add_participant")?;
        Ok(self.setup.add_participant())
    }

    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), GameError> {
        self.expect_setup("remove_participant")?;
        self.setup.remove_participant(id)
    }

    pub fn increase_impostors(&mut self) -> Result<bool, GameError> {
        self.expect_setup("increase_impostors")?;
        Ok(self.setup.increase_impostors())
    }

    pub fn decrease_impostors(&mut self) -> Result<bool, GameError> {
        self.expect_setup("decrease_impostors")?;
        Ok(self.setup.decrease_impostors())
    }

    pub fn select_topic(&mut self, topic_id: &str) -> Result<(), GameError> {
        self.expect_setup("select_topic")?;
        self.setup.select_topic(topic_id, &self.bank)
    }

    // === Round actions ===

    /// Deal a round from the current setup and start revealing.
    pub fn start(&mut self) -> Result<&GameRound, GameError> {
        self.expect_setup("start")?;

        let participants = self.setup.participant_count();
        if !self.setup.can_start() {
            return Err(GameError::CannotStart {
                participants,
                required: self.setup.policy().min_to_start(),
            });
        }

        let topic = self.setup.topic_id().unwrap_or_default();
        let impostors = self.setup.impostor_count();
        let round = GameRound::deal(
            &self.bank,
            topic,
            participants,
            impostors,
            self.last_word.as_deref(),
            &mut self.rng,
        )?;

        info!(participants, impostors, topic, "Round started");
        self.last_word = Some(round.word().to_string());
        self.phase = Phase::Revealing(round);

        self.round().ok_or_else(|| GameError::WrongPhase {
            action: "start",
            phase: self.phase.name(),
        })
    }

    /// The current player has seen their role. On the last player the round
    /// ends and the session returns to setup with its settings intact.
    pub fn acknowledge(&mut self) -> Result<RoundProgress, GameError> {
        let phase = self.phase.name();
        let Phase::Revealing(round) = &mut self.phase else {
            return Err(GameError::WrongPhase {
                action: "acknowledge",
                phase,
            });
        };

        let progress = round.advance();
        if progress == RoundProgress::Finished {
            info!(participants = round.participant_count(), "Round finished");
            self.phase = Phase::Setup;
        }
        Ok(progress)
    }

    // === Phase checks ===

    fn expect_setup(&self, action: &'static str) -> Result<(), GameError> {
        match self.phase {
            Phase::Setup => Ok(()),
            _ => Err(GameError::WrongPhase {
                action,
                phase: self.phase.name(),
            }),
        }
    }

    fn expect_loading(&self, action: &'static str) -> Result<(), GameError> {
        match self.phase {
            Phase::Loading => Ok(()),
            _ => Err(GameError::WrongPhase {
                action,
                phase: self.phase.name(),
            }),
        }
    }
}
