//! Rounds and the session controller.
//!
//! ## Key Types
//!
//! - `GameRound`: dealt roles + secret word, walked seat by seat
//! - `PlayerReveal`: what the current player is shown
//! - `GameController`: owns setup, the current round and the last word

pub mod controller;
pub mod game_round;

pub use controller::{GameController, Phase};
pub use game_round::{GameRound, PlayerReveal, RoundProgress};
