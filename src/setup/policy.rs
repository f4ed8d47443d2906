//! Impostor-count bounds and setup gating.
//!
//! The policy keeps the impostor count satisfiable no matter in which order
//! participants are added and removed: callers clamp after every change and
//! an out-of-range count is silently pulled back into range, never reported.
//!
//! With the standard rules:
//!
//! | participants | max impostors |
//! |--------------|---------------|
//! | 0..=5        | 1             |
//! | 6, 7         | 2             |
//! | 8, 9         | 3             |
//! | 10           | 4             |

use crate::core::SetupRules;

/// Lowest impostor count a round may use.
pub const MIN_IMPOSTORS: usize = 1;

/// Setup bounds derived from `SetupRules`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetupPolicy {
    rules: SetupRules,
}

impl SetupPolicy {
    #[must_use]
    pub fn new(rules: SetupRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &SetupRules {
        &self.rules
    }

    /// Always 1.
    #[must_use]
    pub const fn min_impostors(&self) -> usize {
        MIN_IMPOSTORS
    }

    /// Largest impostor count allowed for `participant_count`.
    ///
    /// Never below `min_impostors()`, so at two participants both bounds are
    /// 1 and the counter simply cannot move.
    #[must_use]
    pub fn max_impostors(&self, participant_count: usize) -> usize {
        self.rules.impostor_formula.max_impostors(participant_count)
    }

    /// Pull `requested` into `[min_impostors, max_impostors(participant_count)]`.
    #[must_use]
    pub fn clamp(&self, requested: usize, participant_count: usize) -> usize {
        requested
            .max(self.min_impostors())
            .min(self.max_impostors(participant_count))
    }

    /// Participants needed before a round can start.
    #[must_use]
    pub fn min_to_start(&self) -> usize {
        self.rules.min_participants_to_start.max(2)
    }

    #[must_use]
    pub fn can_start(&self, participant_count: usize) -> bool {
        participant_count >= self.min_to_start()
    }

    #[must_use]
    pub fn can_add(&self, participant_count: usize) -> bool {
        participant_count < self.rules.max_participants
    }
}

/// `max_impostors` under the standard rules.
#[must_use]
pub fn max_impostors(participant_count: usize) -> usize {
    SetupPolicy::default().max_impostors(participant_count)
}

/// `min_impostors` under the standard rules.
#[must_use]
pub const fn min_impostors() -> usize {
    MIN_IMPOSTORS
}

/// `clamp` under the standard rules.
#[must_use]
pub fn clamp(requested: usize, participant_count: usize) -> usize {
    SetupPolicy::default().clamp(requested, participant_count)
}

/// `can_start` under the standard rules.
#[must_use]
pub fn can_start(participant_count: usize) -> bool {
    SetupPolicy::default().can_start(participant_count)
}

/// `can_add` under the standard rules.
#[must_use]
pub fn can_add(participant_count: usize) -> bool {
    SetupPolicy::default().can_add(participant_count)
}
