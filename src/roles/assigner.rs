//! Random impostor selection.
//!
//! Seats are shuffled with a uniform Fisher-Yates permutation and the first
//! `impostor_count` shuffled seats become impostors. The permutation only
//! picks *who* is an impostor: the returned roles are always listed as
//! players `1..=participant_count` in order.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{GameRng, PlayerRole, DEFAULT_MAX_PARTICIPANTS};
use crate::error::GameError;

/// Roles of a round, one per seat in player-number order.
///
/// Inline capacity covers the standard participant cap.
pub type Roles = SmallVec<[PlayerRole; DEFAULT_MAX_PARTICIPANTS]>;

/// Check the role-assignment contract without drawing any randomness.
pub fn validate_counts(participant_count: usize, impostor_count: usize) -> Result<(), GameError> {
    if participant_count == 0 {
        return Err(GameError::NoParticipants);
    }
    if participant_count > u8::MAX as usize {
        return Err(GameError::TooManyParticipants {
            count: participant_count,
            max: u8::MAX as usize,
        });
    }
    if impostor_count >= participant_count {
        return Err(GameError::InvalidImpostorCount {
            participants: participant_count,
            impostors: impostor_count,
        });
    }
    Ok(())
}

/// Deal roles to `participant_count` players, `impostor_count` of them impostors.
///
/// Requires `participant_count >= 1` and `impostor_count < participant_count`;
/// anything else is rejected before the RNG is touched.
///
/// ```
/// use impostor_game::core::GameRng;
/// use impostor_game::roles::assign_roles;
///
/// let mut rng = GameRng::new(5);
/// let roles = assign_roles(5, 2, &mut rng).unwrap();
///
/// assert_eq!(roles.len(), 5);
/// assert_eq!(roles.iter().filter(|r| r.is_impostor).count(), 2);
/// assert!(roles.iter().map(|r| r.player_number).eq(1..=5));
/// ```
pub fn assign_roles(
    participant_count: usize,
    impostor_count: usize,
    rng: &mut GameRng,
) -> Result<Roles, GameError> {
    validate_counts(participant_count, impostor_count)?;

    let mut seats: SmallVec<[usize; DEFAULT_MAX_PARTICIPANTS]> = (0..participant_count).collect();
    rng.shuffle(&mut seats);

    let mut is_impostor: SmallVec<[bool; DEFAULT_MAX_PARTICIPANTS]> =
        SmallVec::from_elem(false, participant_count);
    for &seat in &seats[..impostor_count] {
        is_impostor[seat] = true;
    }

    let roles: Roles = is_impostor
        .iter()
        .enumerate()
        .map(|(seat, &impostor)| PlayerRole {
            player_number: (seat + 1) as u8,
            is_impostor: impostor,
        })
        .collect();

    debug!(
        participants = participant_count,
        impostors = impostor_count,
        "Assigned roles"
    );

    Ok(roles)
}
