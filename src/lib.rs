//! # impostor-game
//!
//! Rule engine for a pass-the-device party game: everyone but the impostors
//! sees a secret word, and the group has to find out who is bluffing.
//!
//! ## Design Principles
//!
//! 1. **Invalid setups are unrepresentable**: the impostor count is clamped
//!    after every setup change instead of being rejected at start.
//!
//! 2. **Injected randomness**: every random choice takes a `GameRng`, so a
//!    seeded session replays exactly.
//!
//! 3. **No hidden state**: the word bank is a value loaded once and owned by
//!    the session; the last served word lives in the controller.
//!
//! ## Modules
//!
//! - `core`: player identity, RNG, setup rules
//! - `words`: topics, word bank, catalog loading
//! - `roles`: impostor selection
//! - `setup`: impostor bounds and the composing state
//! - `round`: dealt rounds and the session controller
//! - `error`: error types

pub mod core;
pub mod error;
pub mod roles;
pub mod round;
pub mod setup;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameRng, ImpostorFormula, ParticipantId, PlayerRole, SetupRules};

pub use crate::error::{CatalogError, GameError};

pub use crate::words::{Topic, WordBank};

pub use crate::roles::{assign_roles, Roles};

pub use crate::setup::{SetupPolicy, SetupState};

pub use crate::round::{GameController, GameRound, Phase, PlayerReveal, RoundProgress};
