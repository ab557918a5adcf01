//! Local transport operators that share line labels within a city.
//!
//! Trams and buses are labelled `"STR 4"` or `"Bus 166"` everywhere, so
//! these rules combine a town check with the line number. Where city and
//! regional bus companies overlap, a number threshold splits them; each rule
//! picks its own default when the suffix is not a number.

use crate::domain::{RuleViolation, TripIdentity, simple_line_number, trailing_number};

use super::OperatorRule;

const TRAM_OR_BUS: &[&str] = &["STR", "Bus"];

/// Bremer Straßenbahn AG: city lines up to 100 within Bremen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bsag;

impl OperatorRule for Bsag {
    fn name(&self) -> &'static str {
        "Bremer Straßenbahn AG"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if !trip.both_stations_contain("Bremen") || !trip.has_type(TRAM_OR_BUS) {
            return Ok(false);
        }
        Ok(simple_line_number(trip.line()).is_some_and(|n| n <= 100))
    }
}

/// Dresdner Verkehrsbetriebe: all trams around Dresden and Radebeul, buses
/// below 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dvb;

impl OperatorRule for Dvb {
    fn name(&self) -> &'static str {
        "Dresdner Verkehrsbetriebe"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        // Rail replacement buses
        if trip.has_type(&["BusEV"]) {
            return Ok(true);
        }
        if !trip.has_type(TRAM_OR_BUS) {
            return Ok(false);
        }
        if trip.has_type(&["STR"])
            && (trip.any_station_contains("Radebeul") || trip.any_station_contains("Dresden"))
        {
            return Ok(true);
        }
        if !trip.any_station_contains("Dresden") {
            return Ok(false);
        }
        // No number: assume a regional line
        Ok(trailing_number(trip.line()).unwrap_or(100) < 100)
    }
}

/// Verkehrsgesellschaft Hoyerswerda: city buses 1 to 5.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vgh;

impl OperatorRule for Vgh {
    fn name(&self) -> &'static str {
        "Verkehrsgesellschaft Hoyerswerda mbH"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if !trip.has_type(&["Bus"]) || !trip.any_station_contains("Hoyerswerda") {
            return Ok(false);
        }
        Ok(simple_line_number(trip.line()).is_some_and(|n| n <= 5))
    }
}

/// Regionalverkehr Sächsische Schweiz-Osterzgebirge: buses from 100 upwards
/// touching Dresden.
// TODO: RVSOE lines also run without touching Dresden; needs a list of its
// termini in the Sächsische Schweiz.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rvsoe;

impl OperatorRule for Rvsoe {
    fn name(&self) -> &'static str {
        "Regionalverkehr Sächsische Schweiz-Osterzgebirge GmbH"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if !trip.any_station_contains("Dresden") || !trip.has_type(&["Bus"]) {
            return Ok(false);
        }
        Ok(trailing_number(trip.line()).unwrap_or(0) >= 100)
    }
}

/// Hallesche Verkehrs-AG: trams and buses in Halle below 300, plus the
/// `E` special services.
#[derive(Debug, Clone, Copy, Default)]
pub struct Havag;

impl OperatorRule for Havag {
    fn name(&self) -> &'static str {
        "Hallesche Verkehrs-AG"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if !trip.any_station_contains("Halle") || !trip.has_type(TRAM_OR_BUS) {
            return Ok(false);
        }
        let suffix = trip.line().rsplit(' ').next().unwrap_or_default();
        if suffix == "E" {
            return Ok(true);
        }
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RuleViolation::new(
                self.name(),
                "a numeric line suffix or \"E\"",
                trip.line(),
            ));
        }
        let number: u32 = suffix.parse().map_err(|_| {
            RuleViolation::new(self.name(), "a line number that fits in 32 bits", trip.line())
        })?;
        Ok(number < 300)
    }
}

/// Omnibusbetrieb Saalekreis: buses from 300 upwards within Halle.
#[derive(Debug, Clone, Copy, Default)]
pub struct Obs;

impl OperatorRule for Obs {
    fn name(&self) -> &'static str {
        "Omnibusbetrieb Saalekreis"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if !trip.both_stations_contain("Halle") || !trip.has_type(&["Bus"]) {
            return Ok(false);
        }
        Ok(trailing_number(trip.line()).unwrap_or(0) >= 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(line: &str, origin: &str, destination: &str) -> TripIdentity {
        TripIdentity::new(line, origin, destination)
    }

    #[test]
    fn bsag_threshold() {
        let rule = Bsag;
        assert_eq!(rule.matches(&trip("Bus 50", "Bremen Hbf", "Bremen-Vegesack")), Ok(true));
        assert_eq!(rule.matches(&trip("STR 100", "Bremen Hbf", "Bremen Weserwehr")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 150", "Bremen Hbf", "Bremen-Vegesack")), Ok(false));
    }

    #[test]
    fn bsag_needs_bremen_at_both_ends() {
        let rule = Bsag;
        assert_eq!(rule.matches(&trip("Bus 50", "Bremen Hbf", "Delmenhorst")), Ok(false));
    }

    #[test]
    fn bsag_rejects_unusual_labels() {
        let rule = Bsag;
        assert_eq!(rule.matches(&trip("Bus N5", "Bremen Hbf", "Bremen Nord")), Ok(false));
        assert_eq!(rule.matches(&trip("Bus 5 E", "Bremen Hbf", "Bremen Nord")), Ok(false));
    }

    #[test]
    fn dvb_trams_and_city_buses() {
        let rule = Dvb;
        assert_eq!(rule.matches(&trip("STR 4", "Radebeul West", "Laubegast")), Ok(true));
        assert_eq!(rule.matches(&trip("STR 11", "Dresden Bühlau", "Zschertnitz")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 62", "Dresden Löbtau", "Johannstadt")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 166", "Dresden Hbf", "Freital")), Ok(false));
        assert_eq!(rule.matches(&trip("BusEV 3", "Pirna", "Heidenau")), Ok(true));
    }

    #[test]
    fn dvb_unnumbered_bus_defaults_to_regional() {
        let rule = Dvb;
        assert_eq!(rule.matches(&trip("Bus X", "Dresden Hbf", "Pirna")), Ok(false));
    }

    #[test]
    fn vgh_city_buses() {
        let rule = Vgh;
        assert_eq!(rule.matches(&trip("Bus 3", "Hoyerswerda Bahnhof", "Lausitzer Platz")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 6", "Hoyerswerda Bahnhof", "Lausitzer Platz")), Ok(false));
        assert_eq!(rule.matches(&trip("STR 3", "Hoyerswerda Bahnhof", "Lausitzer Platz")), Ok(false));
    }

    #[test]
    fn vgh_unparsable_number_does_not_match() {
        let rule = Vgh;
        assert_eq!(rule.matches(&trip("Bus N1", "Hoyerswerda Bahnhof", "Lausitzer Platz")), Ok(false));
        assert_eq!(rule.matches(&trip("Bus 1 2", "Hoyerswerda Bahnhof", "Lausitzer Platz")), Ok(false));
    }

    #[test]
    fn rvsoe_regional_buses() {
        let rule = Rvsoe;
        assert_eq!(rule.matches(&trip("Bus 360", "Dresden Hbf", "Dippoldiswalde")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 62", "Dresden Hbf", "Johannstadt")), Ok(false));
        // Unnumbered buses default below the threshold
        assert_eq!(rule.matches(&trip("Bus X", "Dresden Hbf", "Pirna")), Ok(false));
    }

    #[test]
    fn havag_lines_below_300() {
        let rule = Havag;
        assert_eq!(rule.matches(&trip("STR 2", "Halle, Soltauer Str.", "Frohe Zukunft")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 21", "Halle, Hauptbahnhof", "Heide-Süd")), Ok(true));
        assert_eq!(rule.matches(&trip("STR E", "Halle, Hauptbahnhof", "Messe")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 350", "Halle, Hauptbahnhof", "Halle, Dölau")), Ok(false));
    }

    #[test]
    fn havag_non_numeric_suffix_is_a_violation() {
        let rule = Havag;
        let err = rule
            .matches(&trip("Bus N5", "Halle, Hauptbahnhof", "Halle-Neustadt"))
            .unwrap_err();
        assert_eq!(err.operator(), "Hallesche Verkehrs-AG");
        assert_eq!(err.line(), "Bus N5");
    }

    #[test]
    fn havag_outside_halle_is_not_checked() {
        let rule = Havag;
        assert_eq!(rule.matches(&trip("Bus N5", "Leipzig", "Markkleeberg")), Ok(false));
    }

    #[test]
    fn obs_regional_buses() {
        let rule = Obs;
        assert_eq!(rule.matches(&trip("Bus 350", "Halle, Hauptbahnhof", "Halle, Dölau")), Ok(true));
        assert_eq!(rule.matches(&trip("Bus 350", "Halle, Hauptbahnhof", "Merseburg")), Ok(false));
        assert_eq!(rule.matches(&trip("Bus 21", "Halle, Hauptbahnhof", "Halle, Heide")), Ok(false));
        // Unnumbered buses default below the threshold
        assert_eq!(rule.matches(&trip("Bus X", "Halle, Hbf", "Halle, Dölau")), Ok(false));
    }
}
