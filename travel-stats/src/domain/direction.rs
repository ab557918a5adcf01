//! Direction-insensitive line/station pairs.
//!
//! Curated operator tables list a line together with the stations it runs
//! between. A trip matches an entry regardless of the direction it was
//! travelled in.

/// A line label with optional endpoint stations.
///
/// A `None` endpoint never equals a named station, so an entry such as
/// `("RB 20", None, Some("Leipzig Hbf"))` is matched through its destination
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionalPair<'a> {
    /// Public line label, e.g. `"RE 30"`.
    pub line: &'a str,
    /// Station at one end.
    pub origin: Option<&'a str>,
    /// Station at the other end.
    pub destination: Option<&'a str>,
}

impl<'a> DirectionalPair<'a> {
    /// Create a pair with both endpoints named.
    pub const fn between(line: &'a str, origin: &'a str, destination: &'a str) -> Self {
        Self {
            line,
            origin: Some(origin),
            destination: Some(destination),
        }
    }

    /// Create a pair that only names its origin.
    pub const fn from_origin(line: &'a str, origin: &'a str) -> Self {
        Self {
            line,
            origin: Some(origin),
            destination: None,
        }
    }

    /// Create a pair that only names its destination.
    pub const fn to_destination(line: &'a str, destination: &'a str) -> Self {
        Self {
            line,
            origin: None,
            destination: Some(destination),
        }
    }

    /// The same pair travelled the other way.
    pub const fn reversed(self) -> Self {
        Self {
            line: self.line,
            origin: self.destination,
            destination: self.origin,
        }
    }

    /// Same line and at least one endpoint in the same position.
    fn loosely_matches(&self, entry: &DirectionalPair<'_>) -> bool {
        entry.line == self.line
            && (entry.origin == self.origin || entry.destination == self.destination)
    }
}

/// Returns true if `candidate` (in either direction) appears in `table`.
///
/// Matching is loose: the line must be equal, and either the origin or the
/// destination must agree. The line label is the dominant discriminator.
///
/// # Examples
///
/// ```
/// use travel_stats::domain::{DirectionalPair, matches_any};
///
/// let table = [DirectionalPair::between("RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf")];
///
/// let forward = DirectionalPair::between("RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf");
/// assert!(matches_any(&forward, &table));
/// assert!(matches_any(&forward.reversed(), &table));
///
/// let other_line = DirectionalPair::between("RE 31", "Magdeburg Hbf", "Halle(Saale)Hbf");
/// assert!(!matches_any(&other_line, &table));
/// ```
pub fn matches_any(candidate: &DirectionalPair<'_>, table: &[DirectionalPair<'_>]) -> bool {
    let reversed = candidate.reversed();
    table.iter().any(|entry| candidate.loosely_matches(entry))
        || table.iter().any(|entry| reversed.loosely_matches(entry))
}
