//! Operator rules loaded from a JSON file.
//!
//! These are consulted after the built-in rules and let users teach the
//! classifier about operators without touching code. Each definition filters
//! by line type first, then claims trips by station substring, by explicit
//! line entries, or unconditionally. Definitions are tried in file order.

mod config;
mod definition;

pub use config::ConfigError;
pub use definition::{LineDefinition, OperatorDefinition};

use crate::domain::TripIdentity;

/// Ordered operator definitions.
#[derive(Debug, Clone, Default)]
pub struct DeclarativeRules {
    definitions: Vec<OperatorDefinition>,
}

impl DeclarativeRules {
    /// Create a rule set evaluated in the given order.
    pub fn new(definitions: Vec<OperatorDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[OperatorDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Name of the first definition that claims `trip`.
    pub fn classify(&self, trip: &TripIdentity) -> Option<&str> {
        self.definitions
            .iter()
            .filter(|def| def.accepts_line(trip.line()))
            .find(|def| def.claims(trip))
            .map(|def| def.name.as_str())
    }
}
