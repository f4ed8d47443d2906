//! Error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::ParticipantId;

/// Errors raised by game operations.
///
/// Setup mistakes are prevented by clamping and never show up here; these
/// variants cover caller contract violations and actions sent in the wrong
/// phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A round needs at least one participant.
    #[error("Cannot assign roles to zero participants")]
    NoParticipants,

    /// Player numbers are stored as `u8`.
    #[error("Too many participants: {count} (at most {max})")]
    TooManyParticipants { count: usize, max: usize },

    /// Impostors must leave at least one crew member.
    #[error("Invalid impostor count {impostors} for {participants} participants")]
    InvalidImpostorCount { participants: usize, impostors: usize },

    /// The action is not accepted in the current phase.
    #[error("Action `{action}` not allowed while {phase}")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },

    /// Not enough participants to start.
    #[error("Cannot start with {participants} participants (need {required})")]
    CannotStart { participants: usize, required: usize },

    /// The selected topic has no words to deal.
    #[error("Topic `{topic}` has no words")]
    EmptyTopic { topic: String },

    /// The topic is not in the word bank.
    #[error("Unknown topic `{topic}`")]
    UnknownTopic { topic: String },

    /// No participant with this id is in the setup.
    #[error("Unknown participant {0}")]
    UnknownParticipant(ParticipantId),
}

/// Errors raised while loading a word catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate topic id `{0}`")]
    DuplicateTopic(String),

    #[error("Topic `{0}` has an empty title")]
    EmptyTitle(String),

    #[error("Catalog contains no topics")]
    NoTopics,
}
