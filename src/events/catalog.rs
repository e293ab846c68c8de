//! Event catalog with mode-dependent builtin rules.
//!
//! The catalog maps [`EventId`] to [`EventRule`] and keeps the insertion
//! order used for display. How builtins are treated depends on the
//! [`CatalogMode`]:
//!
//! - `Personal`: the ten builtins are always present and protected.
//!   Their name, target type and round flag are reset from the table on
//!   every load; a user-edited score survives.
//! - `Public`: builtins are stripped; only user rules remain.
//!
//! ## Example
//!
//! ```
//! use bilscore::core::CatalogMode;
//! use bilscore::events::{EventCatalog, EventId};
//!
//! let catalog = EventCatalog::new(CatalogMode::Personal);
//! assert_eq!(catalog.len(), 10);
//!
//! let foul = catalog.get(&EventId::new("b_foul")).unwrap();
//! assert_eq!(foul.score, 1);
//! assert!(!foul.advances_round);
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::rule::{EventId, EventRule, TargetType};
use crate::core::CatalogMode;

/// Catalog editing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("event `{0}` already exists")]
    DuplicateId(EventId),
    #[error("unknown event `{0}`")]
    UnknownEvent(EventId),
    #[error("event `{0}` is protected")]
    Protected(EventId),
    #[error("event score must be positive")]
    ZeroScore,
}

/// Builtin table: id, name, target type, score, advances round.
const BUILTINS: [(&str, &str, TargetType, u32, bool); 10] = [
    ("b_dajin", "大金", TargetType::TakeAll, 10, true),
    ("b_dajinfoul", "大金犯规", TargetType::GiveAll, 10, true),
    ("b_xiaojin", "小金", TargetType::TakeAll, 7, true),
    ("b_xiaojinfoul", "小金犯规", TargetType::GiveAll, 7, true),
    ("b_huangjin9", "黄金9", TargetType::TakeAll, 4, true),
    ("b_huangjin9foul", "黄金9犯规", TargetType::GiveAll, 4, true),
    ("b_pusheng", "普胜", TargetType::TakePrev, 4, true),
    ("b_pushengfoul", "普胜犯规", TargetType::GivePrev, 4, true),
    ("b_foul", "犯规", TargetType::GivePrev, 1, false),
    ("b_ranggan", "让杆", TargetType::GiveCustom, 1, false),
];

/// The ten builtin rules, protected.
#[must_use]
pub fn builtin_rules() -> Vec<EventRule> {
    BUILTINS
        .iter()
        .map(|&(id, name, target, score, advances)| EventRule {
            id: EventId::new(id),
            name: name.to_string(),
            target_type: target,
            score,
            advances_round: advances,
            is_protected: true,
        })
        .collect()
}

/// Ordered, id-indexed set of event rules.
#[derive(Clone, Debug)]
pub struct EventCatalog {
    mode: CatalogMode,
    rules: FxHashMap<EventId, EventRule>,
    order: Vec<EventId>,
}

impl EventCatalog {
    /// Create a catalog with no stored rules.
    ///
    /// In `Personal` mode this still holds the builtins.
    #[must_use]
    pub fn new(mode: CatalogMode) -> Self {
        Self::load(mode, Vec::new())
    }

    /// Build a catalog from stored rules, applying `mode`.
    #[must_use]
    pub fn load(mode: CatalogMode, saved: Vec<EventRule>) -> Self {
        let mut catalog = Self {
            mode,
            rules: FxHashMap::default(),
            order: Vec::new(),
        };

        for rule in saved {
            if catalog.rules.contains_key(&rule.id) {
                continue;
            }
            catalog.order.push(rule.id.clone());
            catalog.rules.insert(rule.id.clone(), rule);
        }

        catalog.apply_mode();
        catalog
    }

    /// Current operating mode.
    #[must_use]
    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    /// Switch mode, injecting or stripping builtins.
    pub fn switch_mode(&mut self, mode: CatalogMode) {
        self.mode = mode;
        self.apply_mode();
    }

    fn apply_mode(&mut self) {
        match self.mode {
            CatalogMode::Personal => {
                for builtin in builtin_rules() {
                    match self.rules.get_mut(&builtin.id) {
                        Some(existing) => {
                            existing.name = builtin.name;
                            existing.target_type = builtin.target_type;
                            existing.advances_round = builtin.advances_round;
                            existing.is_protected = true;
                        }
                        None => {
                            self.order.push(builtin.id.clone());
                            self.rules.insert(builtin.id.clone(), builtin);
                        }
                    }
                }
            }
            CatalogMode::Public => {
                let rules = &mut self.rules;
                rules.retain(|_, rule| !rule.is_protected);
                self.order.retain(|id| rules.contains_key(id));
            }
        }
    }

    // === Lookup ===

    /// Get a rule by id.
    #[must_use]
    pub fn get(&self, id: &EventId) -> Option<&EventRule> {
        self.rules.get(id)
    }

    /// Check if a rule exists.
    #[must_use]
    pub fn contains(&self, id: &EventId) -> bool {
        self.rules.contains_key(id)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EventRule> {
        self.order.iter().filter_map(move |id| self.rules.get(id))
    }

    /// Rules in insertion order, for persistence.
    #[must_use]
    pub fn to_saved(&self) -> Vec<EventRule> {
        self.iter().cloned().collect()
    }

    // === Editing ===

    /// Add a user rule. User rules are never protected.
    pub fn add(&mut self, mut rule: EventRule) -> Result<(), CatalogError> {
        if rule.score == 0 {
            return Err(CatalogError::ZeroScore);
        }
        if self.rules.contains_key(&rule.id) {
            return Err(CatalogError::DuplicateId(rule.id));
        }

        rule.is_protected = false;
        self.order.push(rule.id.clone());
        self.rules.insert(rule.id.clone(), rule);
        Ok(())
    }

    /// Delete a rule.
    ///
    /// Protected rules can only be removed when the mode does not
    /// enforce protection.
    pub fn remove(&mut self, id: &EventId) -> Result<EventRule, CatalogError> {
        let rule = self
            .rules
            .get(id)
            .ok_or_else(|| CatalogError::UnknownEvent(id.clone()))?;
        if rule.is_protected && self.mode.protects_builtins() {
            return Err(CatalogError::Protected(id.clone()));
        }

        self.order.retain(|existing| existing != id);
        self.rules
            .remove(id)
            .ok_or_else(|| CatalogError::UnknownEvent(id.clone()))
    }

    /// Change the score of a rule. Allowed on protected rules.
    pub fn set_score(&mut self, id: &EventId, score: u32) -> Result<(), CatalogError> {
        if score == 0 {
            return Err(CatalogError::ZeroScore);
        }
        let rule = self
            .rules
            .get_mut(id)
            .ok_or_else(|| CatalogError::UnknownEvent(id.clone()))?;
        rule.score = score;
        Ok(())
    }
}
