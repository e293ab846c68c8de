//! Event rules and the event catalog.
//!
//! An event is a named scoring rule. The catalog resolves event ids to
//! rules and enforces builtin protection according to the operating mode.

pub mod rule;
pub mod catalog;

pub use rule::{EventId, EventRule, TargetType};
pub use catalog::{builtin_rules, CatalogError, EventCatalog};
