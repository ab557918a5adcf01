//! Run configuration.

use std::path::PathBuf;

use crate::classify::CacheConfig;
use crate::report::Step;

/// Default location of the user's operator definitions.
pub const DEFAULT_OPERATORS_FILE: &str = "operators.json";

/// Everything a single run needs besides the input files.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum rows for ranked tables, `None` for all.
    pub top_limit: Option<usize>,

    /// Path to the declarative operator definitions.
    pub operators_file: PathBuf,

    /// Reports to print.
    pub steps: Vec<Step>,

    /// Classification cache settings.
    pub cache: CacheConfig,
}

impl RunConfig {
    /// Set the row limit for ranked tables.
    pub fn with_top_limit(mut self, top_limit: Option<usize>) -> Self {
        self.top_limit = top_limit;
        self
    }

    /// Set the reports to print.
    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            top_limit: None,
            operators_file: PathBuf::from(DEFAULT_OPERATORS_FILE),
            steps: Vec::new(),
            cache: CacheConfig::default(),
        }
    }
}
