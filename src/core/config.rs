//! Setup rule configuration.
//!
//! Sessions configure the setup screen by providing `SetupRules`:
//! - how many participants may join,
//! - how many are needed before a round can start,
//! - which formula bounds the impostor count.
//!
//! The defaults describe the standard game. Rules are plain data and can be
//! read from JSON, so a host can ship a different variant without rebuilding.

use serde::{Deserialize, Serialize};

/// Participant cap of the standard game.
pub const DEFAULT_MAX_PARTICIPANTS: usize = 10;

/// Participants needed to start in the standard game.
pub const DEFAULT_MIN_TO_START: usize = 2;

/// Upper bound on the impostor count for a given number of participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpostorFormula {
    /// `max(1, floor(n / 2) - 1)`: crew always keeps a clear majority.
    #[default]
    HalfMinusOne,
    /// `max(1, floor(n / 2))`.
    Half,
}

impl ImpostorFormula {
    /// Evaluate the formula. Total for every participant count.
    #[must_use]
    pub fn max_impostors(self, participant_count: usize) -> usize {
        let half = participant_count / 2;
        let raw = match self {
            ImpostorFormula::HalfMinusOne => half.saturating_sub(1),
            ImpostorFormula::Half => half,
        };
        raw.max(1)
    }
}

/// Rules for the setup screen.
///
/// Deserialized rules go through the same start-threshold floor as
/// [`SetupRules::with_min_to_start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RulesDocument")]
pub struct SetupRules {
    /// Participants allowed while composing (inclusive).
    pub max_participants: usize,

    /// Participants required before "start" is offered.
    pub min_participants_to_start: usize,

    /// Bound on the impostor count.
    pub impostor_formula: ImpostorFormula,
}

impl Default for SetupRules {
    fn default() -> Self {
        Self {
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            min_participants_to_start: DEFAULT_MIN_TO_START,
            impostor_formula: ImpostorFormula::default(),
        }
    }
}

/// On-disk shape of [`SetupRules`]; missing fields fall back to the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RulesDocument {
    max_participants: usize,
    min_participants_to_start: usize,
    impostor_formula: ImpostorFormula,
}

impl Default for RulesDocument {
    fn default() -> Self {
        let rules = SetupRules::default();
        Self {
            max_participants: rules.max_participants,
            min_participants_to_start: rules.min_participants_to_start,
            impostor_formula: rules.impostor_formula,
        }
    }
}

impl From<RulesDocument> for SetupRules {
    fn from(doc: RulesDocument) -> Self {
        SetupRules::new()
            .with_max_participants(doc.max_participants)
            .with_min_to_start(doc.min_participants_to_start)
            .with_formula(doc.impostor_formula)
    }
}

impl SetupRules {
    /// Standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant that needs three participants to start.
    #[must_use]
    pub fn strict() -> Self {
        Self::default().with_min_to_start(3)
    }

    /// Parse rules from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the participant cap.
    #[must_use]
    pub fn with_max_participants(mut self, max: usize) -> Self {
        self.max_participants = max;
        self
    }

    /// Set the start threshold.
    ///
    /// Values below 2 are raised to 2: a round needs at least one crew member
    /// next to the impostor.
    #[must_use]
    pub fn with_min_to_start(mut self, min: usize) -> Self {
        self.min_participants_to_start = min.max(2);
        self
    }

    /// Set the impostor formula.
    #[must_use]
    pub fn with_formula(mut self, formula: ImpostorFormula) -> Self {
        self.impostor_formula = formula;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = SetupRules::default();
        assert_eq!(rules.max_participants, 10);
        assert_eq!(rules.min_participants_to_start, 2);
        assert_eq!(rules.impostor_formula, ImpostorFormula::HalfMinusOne);
    }

    #[test]
    fn test_rules_builder() {
        let rules = SetupRules::new()
            .with_max_participants(12)
            .with_min_to_start(4)
            .with_formula(ImpostorFormula::Half);

        assert_eq!(rules.max_participants, 12);
        assert_eq!(rules.min_participants_to_start, 4);
        assert_eq!(rules.impostor_formula, ImpostorFormula::Half);
    }

    #[test]
    fn test_strict_rules() {
        assert_eq!(SetupRules::strict().min_participants_to_start, 3);
    }

    #[test]
    fn test_start_threshold_floor() {
        assert_eq!(SetupRules::new().with_min_to_start(0).min_participants_to_start, 2);
    }

    #[test]
    fn test_formulas() {
        let f = ImpostorFormula::HalfMinusOne;
        assert_eq!(f.max_impostors(0), 1);
        assert_eq!(f.max_impostors(2), 1);
        assert_eq!(f.max_impostors(4), 1);
        assert_eq!(f.max_impostors(6), 2);
        assert_eq!(f.max_impostors(7), 2);
        assert_eq!(f.max_impostors(10), 4);

        let f = ImpostorFormula::Half;
        assert_eq!(f.max_impostors(0), 1);
        assert_eq!(f.max_impostors(3), 1);
        assert_eq!(f.max_impostors(6), 3);
        assert_eq!(f.max_impostors(10), 5);
    }

    #[test]
    fn test_rules_from_json() {
        let rules = SetupRules::from_json(
            r#"{"min_participants_to_start": 3, "impostor_formula": "half"}"#,
        )
        .unwrap();

        assert_eq!(rules.max_participants, 10);
        assert_eq!(rules.min_participants_to_start, 3);
        assert_eq!(rules.impostor_formula, ImpostorFormula::Half);
    }

    #[test]
    fn test_rules_from_json_keep_start_floor() {
        let rules = SetupRules::from_json(r#"{"min_participants_to_start": 1}"#).unwrap();
        assert_eq!(rules.min_participants_to_start, 2);

        let rules: SetupRules = serde_json::from_str(r#"{"min_participants_to_start": 0}"#).unwrap();
        assert_eq!(rules, SetupRules::default());
    }

    #[test]
    fn test_rules_serde_roundtrip() {
        let rules = SetupRules::strict();
        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(SetupRules::from_json(&json).unwrap(), rules);
    }
}
