//! Event rule definitions.
//!
//! An event rule says who pays whom when a player triggers the event:
//! the target type picks the counterparty, the score is the amount per
//! counterparty, and `advances_round` marks events that end a round.

use serde::{Deserialize, Serialize};

/// Event rule identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Direction and counterparty of a score transfer.
///
/// `Give*` moves points from the acting player to the counterparty,
/// `Take*` moves them the other way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Pay the previous player.
    GivePrev,
    /// Collect from the previous player.
    TakePrev,
    /// Pay every other player.
    GiveAll,
    /// Collect from every other player.
    TakeAll,
    /// Pay a chosen player.
    GiveCustom,
    /// Collect from a chosen player.
    TakeCustom,
}

impl TargetType {
    /// All target types.
    pub const ALL: [TargetType; 6] = [
        TargetType::GivePrev,
        TargetType::TakePrev,
        TargetType::GiveAll,
        TargetType::TakeAll,
        TargetType::GiveCustom,
        TargetType::TakeCustom,
    ];

    /// Whether the acting player collects points.
    #[must_use]
    pub const fn is_take(self) -> bool {
        matches!(self, Self::TakePrev | Self::TakeAll | Self::TakeCustom)
    }

    /// Whether the counterparty is chosen by the caller.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, Self::GiveCustom | Self::TakeCustom)
    }

    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GivePrev => "give_prev",
            Self::TakePrev => "take_prev",
            Self::GiveAll => "give_all",
            Self::TakeAll => "take_all",
            Self::GiveCustom => "give_custom",
            Self::TakeCustom => "take_custom",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scoring rule.
///
/// Only `score` may change after creation (see
/// [`EventCatalog::set_score`](super::EventCatalog::set_score)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRule {
    pub id: EventId,

    /// Display name.
    pub name: String,

    pub target_type: TargetType,

    /// Points moved per counterparty. Always positive.
    pub score: u32,

    /// Whether triggering ends the round and reseats the table.
    pub advances_round: bool,

    /// Protected rules cannot be deleted while builtins are enforced.
    pub is_protected: bool,
}

impl EventRule {
    /// Create a non-advancing, unprotected rule.
    pub fn new(id: impl Into<String>, name: impl Into<String>, target_type: TargetType, score: u32) -> Self {
        Self {
            id: EventId::new(id),
            name: name.into(),
            target_type,
            score,
            advances_round: false,
            is_protected: false,
        }
    }

    /// Mark the rule as round-advancing (builder pattern).
    #[must_use]
    pub fn advancing(mut self) -> Self {
        self.advances_round = true;
        self
    }

    /// Mark the rule as protected (builder pattern).
    #[must_use]
    pub fn protected(mut self) -> Self {
        self.is_protected = true;
        self
    }

    /// Score as a signed amount.
    #[must_use]
    pub fn amount(&self) -> i64 {
        i64::from(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_and_target_flags() {
        assert!(TargetType::TakePrev.is_take());
        assert!(TargetType::TakeAll.is_take());
        assert!(TargetType::TakeCustom.is_take());
        assert!(!TargetType::GivePrev.is_take());
        assert!(!TargetType::GiveAll.is_take());
        assert!(!TargetType::GiveCustom.is_take());

        let custom: Vec<_> = TargetType::ALL.iter().filter(|t| t.needs_target()).collect();
        assert_eq!(custom, vec![&TargetType::GiveCustom, &TargetType::TakeCustom]);
    }

    #[test]
    fn test_rule_builder() {
        let rule = EventRule::new("x", "Big", TargetType::TakeAll, 10).advancing().protected();

        assert_eq!(rule.id, EventId::new("x"));
        assert!(rule.advances_round);
        assert!(rule.is_protected);
        assert_eq!(rule.amount(), 10);
    }

    #[test]
    fn test_target_type_serde_names() {
        for target in TargetType::ALL {
            let json = serde_json::to_string(&target).unwrap();
            assert_eq!(json, format!("\"{}\"", target.as_str()));
            let back: TargetType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, target);
        }
    }
}
