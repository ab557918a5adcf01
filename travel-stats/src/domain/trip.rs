//! Trip identity, the input to operator classification.

use std::fmt;

use super::direction::DirectionalPair;
use super::line::{leading_token, matches_types};

/// The identifying triple of a trip: line label and terminal stations.
///
/// Origin and destination are the termini of the whole trip, not the
/// stations the traveller boarded or alighted at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripIdentity {
    line: String,
    origin: String,
    destination: String,
}

impl TripIdentity {
    /// Create a new trip identity.
    pub fn new(
        line: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Public line label, e.g. `"RE 30"`.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Origin station name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Destination station name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Category prefix of the line label.
    pub fn leading_token(&self) -> &str {
        leading_token(&self.line)
    }

    /// Returns true if the category prefix is one of `types`.
    pub fn has_type(&self, types: &[&str]) -> bool {
        matches_types(&self.line, types)
    }

    /// Returns true if the line label starts with `prefix`.
    pub fn line_starts_with(&self, prefix: &str) -> bool {
        self.line.starts_with(prefix)
    }

    /// Returns true if either station name contains `needle`.
    pub fn any_station_contains(&self, needle: &str) -> bool {
        self.origin.contains(needle) || self.destination.contains(needle)
    }

    /// Returns true if both station names contain `needle`.
    pub fn both_stations_contain(&self, needle: &str) -> bool {
        self.origin.contains(needle) && self.destination.contains(needle)
    }

    /// Returns true if either station is exactly `station`.
    pub fn touches_station(&self, station: &str) -> bool {
        self.origin == station || self.destination == station
    }

    /// View this trip as a fully specified directional pair.
    pub fn as_pair(&self) -> DirectionalPair<'_> {
        DirectionalPair::between(&self.line, &self.origin, &self.destination)
    }
}

impl fmt::Display for TripIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.line, self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> TripIdentity {
        TripIdentity::new("STR 4", "Leipzig, Hauptbahnhof", "Schkeuditz, Rathausplatz")
    }

    #[test]
    fn accessors() {
        let t = trip();
        assert_eq!(t.line(), "STR 4");
        assert_eq!(t.origin(), "Leipzig, Hauptbahnhof");
        assert_eq!(t.destination(), "Schkeuditz, Rathausplatz");
        assert_eq!(t.leading_token(), "STR");
    }

    #[test]
    fn station_containment() {
        let t = trip();
        assert!(t.any_station_contains("Leipzig"));
        assert!(t.any_station_contains("Schkeuditz"));
        assert!(!t.both_stations_contain("Leipzig"));
        assert!(!t.any_station_contains("Dresden"));

        let inner = TripIdentity::new("Bus 24", "Bremen Hbf", "Bremen-Vegesack");
        assert!(inner.both_stations_contain("Bremen"));
    }

    #[test]
    fn touches_station_is_exact() {
        let t = TripIdentity::new("EC 171", "Praha hl.n.", "Berlin Hbf");
        assert!(t.touches_station("Praha hl.n."));
        assert!(t.touches_station("Berlin Hbf"));
        assert!(!t.touches_station("Praha"));
    }

    #[test]
    fn display() {
        let t = TripIdentity::new("RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf");
        assert_eq!(t.to_string(), "RE 30 Magdeburg Hbf -> Halle(Saale)Hbf");
    }

    #[test]
    fn as_pair() {
        let t = trip();
        let pair = t.as_pair();
        assert_eq!(pair.line, "STR 4");
        assert_eq!(pair.origin, Some("Leipzig, Hauptbahnhof"));
        assert_eq!(pair.destination, Some("Schkeuditz, Rathausplatz"));
    }
}
