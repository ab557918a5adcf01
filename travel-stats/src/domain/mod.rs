//! Domain types for operator classification.
//!
//! These are the small value types every matcher works with: the trip
//! triple, line-label primitives and direction-insensitive station pairs.

mod direction;
mod error;
mod line;
mod trip;

pub use direction::{DirectionalPair, matches_any};
pub use error::RuleViolation;
pub use line::{leading_token, matches_types, simple_line_number, trailing_number};
pub use trip::TripIdentity;
