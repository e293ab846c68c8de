//! Session configuration.
//!
//! The host picks an operating mode and history size at startup.
//! `SessionConfig::from_env()` is the usual entry point; tests build
//! configs directly with the builder methods.

use serde::{Deserialize, Serialize};

/// Environment variable selecting the catalog mode.
pub const MODE_ENV: &str = "BILSCORE_MODE";

/// Environment variable fixing the reordering seed.
pub const SEED_ENV: &str = "BILSCORE_SEED";

/// Number of sessions kept in the persisted history by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// How the event catalog treats the builtin rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogMode {
    /// Builtins are force-injected and protected from deletion.
    Personal,
    /// Builtins are stripped; only user-defined rules are kept.
    #[default]
    Public,
}

impl CatalogMode {
    /// Parse a mode name. Only `personal` (any case) selects
    /// [`CatalogMode::Personal`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("personal") {
            Self::Personal
        } else {
            Self::Public
        }
    }

    /// Whether builtins are injected and protected.
    #[must_use]
    pub const fn protects_builtins(self) -> bool {
        matches!(self, Self::Personal)
    }
}

/// Configuration for a [`GameSession`](crate::session::GameSession).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Catalog operating mode.
    pub mode: CatalogMode,

    /// Most sessions kept in the persisted history.
    pub history_limit: usize,

    /// Reordering seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: CatalogMode::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `BILSCORE_MODE` and `BILSCORE_SEED`.
    ///
    /// Unset or unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mode = lookup(MODE_ENV)
            .map(|m| CatalogMode::parse(&m))
            .unwrap_or_default();
        let seed = lookup(SEED_ENV).and_then(|s| s.trim().parse().ok());

        Self {
            mode,
            seed,
            ..Self::default()
        }
    }

    /// Set the catalog mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CatalogMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the history cap.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Fix the reordering seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(CatalogMode::parse("personal"), CatalogMode::Personal);
        assert_eq!(CatalogMode::parse(" Personal "), CatalogMode::Personal);
        assert_eq!(CatalogMode::parse("public"), CatalogMode::Public);
        assert_eq!(CatalogMode::parse(""), CatalogMode::Public);
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::new();
        assert_eq!(config.mode, CatalogMode::Public);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_mode(CatalogMode::Personal)
            .with_history_limit(3)
            .with_seed(42);

        assert!(config.mode.protects_builtins());
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_from_lookup() {
        let config = SessionConfig::from_lookup(|key| match key {
            MODE_ENV => Some("personal".to_string()),
            SEED_ENV => Some("1234".to_string()),
            _ => None,
        });
        assert_eq!(config.mode, CatalogMode::Personal);
        assert_eq!(config.seed, Some(1234));

        let config = SessionConfig::from_lookup(|key| match key {
            SEED_ENV => Some("not a number".to_string()),
            _ => None,
        });
        assert_eq!(config, SessionConfig::default());
    }
}
