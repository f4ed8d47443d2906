//! Core types: player identity, RNG, configuration.
//!
//! Everything above this module (word bank, role assignment, setup, rounds)
//! builds on these.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ImpostorFormula, SetupRules, DEFAULT_MAX_PARTICIPANTS, DEFAULT_MIN_TO_START};
pub use player::{ParticipantId, PlayerRole};
pub use rng::GameRng;
