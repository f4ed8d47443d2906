//! Composing-screen state.
//!
//! `SetupState` is what the host edits before a round: the participant list,
//! the requested impostor count, and the topic. Every mutation re-applies the
//! `SetupPolicy` before returning, so the impostor count read back is always
//! valid for the current participant count.

use tracing::debug;

use super::policy::SetupPolicy;
use crate::core::{ParticipantId, SetupRules};
use crate::error::GameError;
use crate::words::WordBank;

/// Participants, impostor count and topic chosen before a round.
#[derive(Clone, Debug)]
pub struct SetupState {
    policy: SetupPolicy,
    participants: Vec<ParticipantId>,
    next_id: u32,
    impostor_count: usize,
    topic_id: Option<String>,
}

impl Default for SetupState {
    fn default() -> Self {
        Self::new(SetupRules::default())
    }
}

impl SetupState {
    /// Empty setup with one impostor requested and no topic.
    #[must_use]
    pub fn new(rules: SetupRules) -> Self {
        let policy = SetupPolicy::new(rules);
        Self {
            policy,
            participants: Vec::new(),
            next_id: 1,
            impostor_count: policy.min_impostors(),
            topic_id: None,
        }
    }

    /// Empty setup with the first topic of `bank` selected.
    #[must_use]
    pub fn for_bank(rules: SetupRules, bank: &WordBank) -> Self {
        let mut state = Self::new(rules);
        state.topic_id = bank.list_topics().first().map(|t| t.id.clone());
        state
    }

    #[must_use]
    pub fn policy(&self) -> &SetupPolicy {
        &self.policy
    }

    // === Participants ===

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Participants in the order they were added.
    #[must_use]
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Display label for a participant: its 1-based position in the list.
    #[must_use]
    pub fn label(&self, id: ParticipantId) -> Option<String> {
        self.participants
            .iter()
            .position(|&p| p == id)
            .map(|index| format!("Player {}", index + 1))
    }

    #[must_use]
    pub fn can_add(&self) -> bool {
        self.policy.can_add(self.participant_count())
    }

    /// Add a participant. Returns `None` once the cap is reached.
    pub fn add_participant(&mut self) -> Option<ParticipantId> {
        if !self.can_add() {
            return None;
        }

        let id = ParticipantId::new(self.next_id);
        self.next_id += 1;
        self.participants.push(id);
        self.reclamp();
        Some(id)
    }

    /// Remove a participant by id, clamping the impostor count down if needed.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), GameError> {
        let index = self
            .participants
            .iter()
            .position(|&p| p == id)
            .ok_or(GameError::UnknownParticipant(id))?;

        self.participants.remove(index);
        self.reclamp();
        Ok(())
    }

    /// Remove the most recently added participant, if any.
    pub fn remove_last(&mut self) -> Option<ParticipantId> {
        let id = self.participants.pop()?;
        self.reclamp();
        Some(id)
    }

    // === Impostors ===

    /// Current impostor count, always within the policy bounds.
    #[must_use]
    pub fn impostor_count(&self) -> usize {
        self.impostor_count
    }

    /// The impostor counter only matters once there are two participants.
    #[must_use]
    pub fn impostor_counter_visible(&self) -> bool {
        self.participant_count() >= 2
    }

    #[must_use]
    pub fn max_impostors(&self) -> usize {
        self.policy.max_impostors(self.participant_count())
    }

    #[must_use]
    pub fn can_increase_impostors(&self) -> bool {
        self.impostor_count < self.max_impostors()
    }

    #[must_use]
    pub fn can_decrease_impostors(&self) -> bool {
        self.impostor_count > self.policy.min_impostors()
    }

    /// Add one impostor. No-op at the upper bound; returns whether it moved.
    pub fn increase_impostors(&mut self) -> bool {
        if !self.can_increase_impostors() {
            return false;
        }
        self.impostor_count += 1;
        true
    }

    /// Remove one impostor. No-op at the lower bound; returns whether it moved.
    pub fn decrease_impostors(&mut self) -> bool {
        if !self.can_decrease_impostors() {
            return false;
        }
        self.impostor_count -= 1;
        true
    }

    /// Request an impostor count directly. The stored value is clamped.
    pub fn set_impostor_count(&mut self, requested: usize) -> usize {
        self.impostor_count = self.policy.clamp(requested, self.participant_count());
        self.impostor_count
    }

    fn reclamp(&mut self) {
        let clamped = self
            .policy
            .clamp(self.impostor_count, self.participant_count());
        if clamped != self.impostor_count {
            debug!(
                participants = self.participant_count(),
                from = self.impostor_count,
                to = clamped,
                "Clamped impostor count"
            );
            self.impostor_count = clamped;
        }
    }

    // === Topic ===

    #[must_use]
    pub fn topic_id(&self) -> Option<&str> {
        self.topic_id.as_deref()
    }

    /// Select a topic present in `bank`.
    pub fn select_topic(&mut self, topic_id: &str, bank: &WordBank) -> Result<(), GameError> {
        if !bank.contains_topic(topic_id) {
            return Err(GameError::UnknownTopic {
                topic: topic_id.to_string(),
            });
        }
        self.topic_id = Some(topic_id.to_string());
        Ok(())
    }

    // === Start ===

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.policy.can_start(self.participant_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::Topic;

    fn state_with(count: usize) -> SetupState {
        let mut state = SetupState::default();
        for _ in 0..count {
            state.add_participant();
        }
        state
    }

    #[test]
    fn test_new_state() {
        let state = SetupState::default();
        assert_eq!(state.participant_count(), 0);
        assert_eq!(state.impostor_count(), 1);
        assert!(state.can_add());
        assert!(!state.can_start());
        assert!(!state.impostor_counter_visible());
        assert!(state.topic_id().is_none());
    }

    #[test]
    fn test_add_respects_cap() {
        let mut state = state_with(10);
        assert_eq!(state.participant_count(), 10);
        assert!(!state.can_add());
        assert_eq!(state.add_participant(), None);
        assert_eq!(state.participant_count(), 10);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut state = state_with(2);
        let last = state.remove_last().unwrap();
        let next = state.add_participant().unwrap();
        assert!(next > last);
    }

    #[test]
    fn test_labels_follow_position() {
        let mut state = SetupState::default();
        let a = state.add_participant().unwrap();
        let b = state.add_participant().unwrap();
        let c = state.add_participant().unwrap();

        assert_eq!(state.label(c).as_deref(), Some("Player 3"));
        state.remove_participant(a).unwrap();
        assert_eq!(state.label(b).as_deref(), Some("Player 1"));
        assert_eq!(state.label(c).as_deref(), Some("Player 2"));
        assert_eq!(state.label(a), None);
    }

    #[test]
    fn test_remove_unknown_participant() {
        let mut state = state_with(2);
        let missing = ParticipantId::new(99);
        assert_eq!(
            state.remove_participant(missing),
            Err(GameError::UnknownParticipant(missing))
        );
        assert_eq!(state.participant_count(), 2);
    }

    #[test]
    fn test_remove_last_on_empty() {
        let mut state = SetupState::default();
        assert_eq!(state.remove_last(), None);
    }

    #[test]
    fn test_counter_bounds_at_two() {
        let mut state = state_with(2);
        assert!(state.impostor_counter_visible());
        assert!(!state.can_increase_impostors());
        assert!(!state.can_decrease_impostors());
        assert!(!state.increase_impostors());
        assert!(!state.decrease_impostors());
        assert_eq!(state.impostor_count(), 1);
    }

    #[test]
    fn test_increase_stops_at_max() {
        let mut state = state_with(8);
        assert!(state.increase_impostors());
        assert!(state.increase_impostors());
        assert!(!state.increase_impostors());
        assert_eq!(state.impostor_count(), 3);
        assert!(state.decrease_impostors());
        assert_eq!(state.impostor_count(), 2);
    }

    #[test]
    fn test_removal_clamps_down() {
        let mut state = state_with(10);
        assert_eq!(state.set_impostor_count(4), 4);

        state.remove_last();
        state.remove_last();
        assert_eq!(state.impostor_count(), 3);

        while state.participant_count() > 2 {
            state.remove_last();
        }
        assert_eq!(state.impostor_count(), 1);
    }

    #[test]
    fn test_adding_does_not_raise_count() {
        let mut state = state_with(4);
        state.add_participant();
        state.add_participant();
        assert_eq!(state.impostor_count(), 1);
    }

    #[test]
    fn test_set_impostor_count_clamps() {
        let mut state = state_with(6);
        assert_eq!(state.set_impostor_count(0), 1);
        assert_eq!(state.set_impostor_count(7), 2);
    }

    #[test]
    fn test_topic_selection() {
        let mut bank = WordBank::new();
        bank.insert(Topic::new("food", "Food"), vec!["pan".to_string()]);
        bank.insert(Topic::new("cars", "Cars"), vec!["taxi".to_string()]);

        let mut state = SetupState::for_bank(SetupRules::default(), &bank);
        assert_eq!(state.topic_id(), Some("food"));

        state.select_topic("cars", &bank).unwrap();
        assert_eq!(state.topic_id(), Some("cars"));

        let err = state.select_topic("boats", &bank).unwrap_err();
        assert!(matches!(err, GameError::UnknownTopic { .. }));
        assert_eq!(state.topic_id(), Some("cars"));
    }

    #[test]
    fn test_strict_rules_gate_start() {
        let mut state = SetupState::new(SetupRules::strict());
        state.add_participant();
        state.add_participant();
        assert!(!state.can_start());
        state.add_participant();
        assert!(state.can_start());
    }
}
