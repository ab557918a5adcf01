//! Operator classification.
//!
//! Combines the sources of operator names in priority order:
//!
//! 1. the operator reported by the logging service, used verbatim
//! 2. the built-in rules, first match wins
//! 3. the user's declarative rules
//! 4. otherwise unknown
//!
//! Classification is pure, so results for the same trip can be cached.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::{debug, warn};

use crate::declarative::DeclarativeRules;
use crate::domain::TripIdentity;
use crate::operators::RuleSet;

/// Label used when no source knows the operator.
pub const UNKNOWN_OPERATOR: &str = "<unknown operator>";

/// The outcome of classifying one trip, with the source that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Reported by the logging service.
    Upstream(String),
    /// Matched by a built-in rule.
    Rule(&'static str),
    /// Matched by a user-supplied definition.
    Declarative(String),
    /// No source recognised the trip.
    Unknown,
}

impl Classification {
    /// The operator name, or [`UNKNOWN_OPERATOR`].
    pub fn label(&self) -> &str {
        match self {
            Self::Upstream(name) | Self::Declarative(name) => name.as_str(),
            Self::Rule(name) => *name,
            Self::Unknown => UNKNOWN_OPERATOR,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies trips against the built-in and declarative rules.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: &'static RuleSet,
    declarative: Arc<DeclarativeRules>,
}

impl Classifier {
    /// Create a classifier using the built-in rules.
    pub fn new(declarative: DeclarativeRules) -> Self {
        Self::with_rules(RuleSet::builtin(), declarative)
    }

    /// Create a classifier with a custom rule set.
    pub fn with_rules(rules: &'static RuleSet, declarative: DeclarativeRules) -> Self {
        Self {
            rules,
            declarative: Arc::new(declarative),
        }
    }

    /// Classify `trip`, preferring `upstream` when the logging service
    /// already named the operator.
    ///
    /// An empty upstream name counts as absent.
    pub fn classify(&self, trip: &TripIdentity, upstream: Option<&str>) -> Classification {
        match upstream {
            Some(name) if !name.is_empty() => Classification::Upstream(name.to_owned()),
            _ => self.classify_unreported(trip),
        }
    }

    /// Classify `trip` from the rules alone.
    pub fn classify_unreported(&self, trip: &TripIdentity) -> Classification {
        match self.rules.first_match(trip) {
            Ok(Some(name)) => return Classification::Rule(name),
            Ok(None) => {}
            Err(e) => {
                warn!(trip = %trip, error = %e, "Operator rule rejected trip");
                return Classification::Unknown;
            }
        }

        match self.declarative.classify(trip) {
            // An empty name would render as a blank label
            Some(name) if !name.is_empty() => Classification::Declarative(name.to_owned()),
            _ => {
                debug!(trip = %trip, "No operator found");
                Classification::Unknown
            }
        }
    }
}

/// Configuration for the classification cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached trips.
    pub max_capacity: u64,

    /// How long an idle entry is kept.
    pub time_to_idle: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            time_to_idle: Duration::from_secs(10 * 60),
        }
    }
}

/// A [`Classifier`] that remembers rule results per trip.
///
/// Exports repeat the same commute many times, so most lookups hit.
/// Upstream names are not cached since they cost nothing to compute.
pub struct CachedClassifier {
    inner: Classifier,
    cache: MokaCache<TripIdentity, Classification>,
}

impl CachedClassifier {
    /// Wrap `inner` with a cache built from `config`.
    pub fn new(inner: Classifier, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .time_to_idle(config.time_to_idle)
            .build();

        Self { inner, cache }
    }

    /// Same as [`Classifier::classify`], cached.
    pub fn classify(&self, trip: &TripIdentity, upstream: Option<&str>) -> Classification {
        match upstream {
            Some(name) if !name.is_empty() => Classification::Upstream(name.to_owned()),
            _ => self
                .cache
                .get_with_by_ref(trip, || self.inner.classify_unreported(trip)),
        }
    }

    /// Number of cached trips, after pending writes are applied.
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
