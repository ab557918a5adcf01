//! Reusable rule shapes.
//!
//! Most operators are recognised by one of a few recurring patterns. Each
//! shape here is a plain record over static data; operators with their own
//! quirks get bespoke types in [`super::rail`] and [`super::local`].

use crate::domain::{DirectionalPair, RuleViolation, TripIdentity, matches_any};

use super::OperatorRule;

/// Matches when the category prefix is one of a fixed set of operator codes.
#[derive(Debug, Clone, Copy)]
pub struct PrefixRule {
    pub name: &'static str,
    pub types: &'static [&'static str],
}

impl OperatorRule for PrefixRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        Ok(trip.has_type(self.types))
    }
}

/// Matches when the raw line label starts with a fixed string.
///
/// Unlike [`PrefixRule`] this does not split on spaces, so `"NBE"` also
/// matches labels such as `"NBE80"`.
#[derive(Debug, Clone, Copy)]
pub struct LabelPrefixRule {
    pub name: &'static str,
    pub prefix: &'static str,
}

impl OperatorRule for LabelPrefixRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        Ok(trip.line_starts_with(self.prefix))
    }
}

/// Matches a curated table of lines within a set of service categories.
///
/// `overrides` are operator codes that always belong to this operator; they
/// are checked before the category and table tests.
#[derive(Debug, Clone, Copy)]
pub struct TableRule {
    pub name: &'static str,
    pub overrides: &'static [&'static str],
    pub types: &'static [&'static str],
    pub routes: &'static [DirectionalPair<'static>],
}

impl OperatorRule for TableRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if trip.has_type(self.overrides) {
            return Ok(true);
        }
        if !trip.has_type(self.types) {
            return Ok(false);
        }
        Ok(matches_any(&trip.as_pair(), self.routes))
    }
}

/// Which endpoints must name one of a [`CityRule`]'s towns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoints {
    /// Either origin or destination.
    Either,
    /// Both origin and destination.
    Both,
}

/// Matches local transport categories serving a named town.
#[derive(Debug, Clone, Copy)]
pub struct CityRule {
    pub name: &'static str,
    pub towns: &'static [&'static str],
    pub endpoints: Endpoints,
    pub types: &'static [&'static str],
}

impl CityRule {
    fn serves_town(&self, trip: &TripIdentity) -> bool {
        self.towns.iter().any(|town| match self.endpoints {
            Endpoints::Either => trip.any_station_contains(town),
            Endpoints::Both => trip.both_stations_contain(town),
        })
    }
}

impl OperatorRule for CityRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        Ok(self.serves_town(trip) && trip.has_type(self.types))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(line: &str, origin: &str, destination: &str) -> TripIdentity {
        TripIdentity::new(line, origin, destination)
    }

    #[test]
    fn prefix_rule() {
        let rule = PrefixRule {
            name: "trilex",
            types: &["TLX", "TL"],
        };
        assert_eq!(rule.name(), "trilex");
        assert_eq!(rule.matches(&trip("TL 60", "Görlitz", "Zittau")), Ok(true));
        assert_eq!(rule.matches(&trip("TLX 1", "A", "B")), Ok(true));
        assert_eq!(rule.matches(&trip("TLXX 1", "A", "B")), Ok(false));
    }

    #[test]
    fn label_prefix_rule() {
        let rule = LabelPrefixRule {
            name: "Nordbahn",
            prefix: "NBE",
        };
        assert_eq!(rule.matches(&trip("NBE80", "A", "B")), Ok(true));
        assert_eq!(rule.matches(&trip("NBE 80", "A", "B")), Ok(true));
        assert_eq!(rule.matches(&trip("RB 80", "A", "B")), Ok(false));
    }

    #[test]
    fn table_rule_override_wins() {
        let rule = TableRule {
            name: "Abellio",
            overrides: &["HBX"],
            types: &["RE"],
            routes: &[],
        };
        assert_eq!(rule.matches(&trip("HBX 1", "X", "Y")), Ok(true));
        assert_eq!(rule.matches(&trip("RE 1", "X", "Y")), Ok(false));
    }

    #[test]
    fn table_rule_requires_category() {
        const ROUTES: &[DirectionalPair<'static>] =
            &[DirectionalPair::between("RE 9", "Aachen Hbf", "Siegen")];
        let rule = TableRule {
            name: "NRW",
            overrides: &[],
            types: &["RB"],
            routes: ROUTES,
        };
        // In the table, but "RE" is not one of the rule's categories
        assert_eq!(rule.matches(&trip("RE 9", "Aachen Hbf", "Siegen")), Ok(false));
    }

    #[test]
    fn city_rule_both_endpoints() {
        let rule = CityRule {
            name: "GVB",
            towns: &["Amsterdam"],
            endpoints: Endpoints::Both,
            types: &["U"],
        };
        assert_eq!(
            rule.matches(&trip("U 52", "Amsterdam Noord", "Amsterdam Zuid")),
            Ok(true)
        );
        assert_eq!(
            rule.matches(&trip("U 52", "Amsterdam Noord", "Amstelveen")),
            Ok(false)
        );
        assert_eq!(
            rule.matches(&trip("STR 2", "Amsterdam Noord", "Amsterdam Zuid")),
            Ok(false)
        );
    }

    #[test]
    fn city_rule_any_town_either_endpoint() {
        let rule = CityRule {
            name: "S-Bahn Hamburg",
            towns: &["Hamburg", "Stade"],
            endpoints: Endpoints::Either,
            types: &["S"],
        };
        assert_eq!(rule.matches(&trip("S 5", "Stade", "Buxtehude")), Ok(true));
        assert_eq!(
            rule.matches(&trip("S 1", "Wedel(Holst)", "Hamburg Airport")),
            Ok(true)
        );
        assert_eq!(rule.matches(&trip("S 1", "Kiel", "Lübeck")), Ok(false));
    }
}
