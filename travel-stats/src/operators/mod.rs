//! Hardcoded operator rules.
//!
//! Each rule recognises one transit operator from a trip's line label and
//! terminal stations. Rules overlap (a city S-Bahn and a regional DB company
//! can both claim `"S 1"`), so they are kept in a fixed order and the first
//! match wins.

mod local;
mod rail;
mod shapes;


use std::fmt;
use std::sync::LazyLock;

use crate::domain::{DirectionalPair, RuleViolation, TripIdentity};

pub use local::{Bsag, Dvb, Havag, Obs, Rvsoe, Vgh};
pub use rail::{CeskeDrahy, DbRegioNordost, DbRegioSuedost, DessauWoerlitz};
pub use shapes::{CityRule, Endpoints, LabelPrefixRule, PrefixRule, TableRule};

/// A matcher for a single operator.
pub trait OperatorRule: Send + Sync {
    /// Display name of the operator.
    fn name(&self) -> &'static str;

    /// Returns whether this operator runs `trip`.
    ///
    /// An error means the rule's own assumptions about the line label do not
    /// hold; it is not a "no match".
    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation>;
}

/// An ordered list of operator rules, evaluated first-match-wins.
pub struct RuleSet {
    rules: Vec<Box<dyn OperatorRule>>,
}

impl RuleSet {
    /// Create a rule set evaluated in the given order.
    pub fn new(rules: Vec<Box<dyn OperatorRule>>) -> Self {
        Self { rules }
    }

    /// The built-in rule set, initialised once per process.
    pub fn builtin() -> &'static RuleSet {
        static BUILTIN: LazyLock<RuleSet> = LazyLock::new(builtin_rules);
        &BUILTIN
    }

    /// Returns the name of the first operator whose rule matches `trip`.
    ///
    /// Stops at the first rule that reports a contract violation.
    pub fn first_match(&self, trip: &TripIdentity) -> Result<Option<&'static str>, RuleViolation> {
        for rule in &self.rules {
            if rule.matches(trip)? {
                return Ok(Some(rule.name()));
            }
        }
        Ok(None)
    }

    /// Operator names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

const TRAM_OR_BUS: &[&str] = &["STR", "Bus"];

fn city(name: &'static str, towns: &'static [&'static str]) -> Box<dyn OperatorRule> {
    Box::new(CityRule {
        name,
        towns,
        endpoints: Endpoints::Either,
        types: TRAM_OR_BUS,
    })
}

fn sbahn(name: &'static str, towns: &'static [&'static str]) -> Box<dyn OperatorRule> {
    Box::new(CityRule {
        name,
        towns,
        endpoints: Endpoints::Either,
        types: &["S"],
    })
}

fn prefix(name: &'static str, types: &'static [&'static str]) -> Box<dyn OperatorRule> {
    Box::new(PrefixRule { name, types })
}

fn table(
    name: &'static str,
    types: &'static [&'static str],
    routes: &'static [DirectionalPair<'static>],
) -> Box<dyn OperatorRule> {
    Box::new(TableRule {
        name,
        overrides: &[],
        types,
        routes,
    })
}

/// The built-in rules in evaluation order.
fn builtin_rules() -> RuleSet {
    use rail::{
        ABELLIO_MITTELDEUTSCHLAND, DB_REGIO_MITTE, DB_REGIO_NORD, DB_REGIO_NRW, ERFURTER_BAHN,
        MITTELDEUTSCHE_REGIOBAHN, ODEG, REGIONAL, REGIONAL_OR_SUBURBAN,
    };

    let rules: Vec<Box<dyn OperatorRule>> = vec![
        Box::new(TableRule {
            name: "Abellio Rail Mitteldeutschland",
            overrides: &["HBX"],
            types: REGIONAL_OR_SUBURBAN,
            routes: ABELLIO_MITTELDEUTSCHLAND,
        }),
        prefix("alex - Die Länderbahn", &["ALX"]),
        prefix("Bayrische Regiobahn", &["BRB"]),
        Box::new(Bsag),
        Box::new(CityRule {
            name: "Berliner Verkehrsbetriebe",
            towns: &["Berlin"],
            endpoints: Endpoints::Both,
            types: &["STR", "U", "Bus"],
        }),
        Box::new(CeskeDrahy),
        // Every IC is attributed to DB Fernverkehr, including those run for
        // the states under "RE" numbers by other companies.
        prefix("DB Fernverkehr AG", &["ICE", "IC"]),
        table("DB Regio AG NRW", REGIONAL_OR_SUBURBAN, DB_REGIO_NRW),
        table("DB Regio AG Nord", REGIONAL_OR_SUBURBAN, DB_REGIO_NORD),
        Box::new(DbRegioNordost),
        Box::new(DbRegioSuedost),
        table("DB Regio Mitte", REGIONAL, DB_REGIO_MITTE),
        Box::new(Dvb),
        city("Dessauer Verkehrs-GmbH", &["Dessau"]),
        Box::new(DessauWoerlitz),
        table("Erfurter Bahn", REGIONAL, ERFURTER_BAHN),
        city("Erfurter Verkehrsbetriebe", &["Erfurt"]),
        prefix("erixx", &["erx"]),
        prefix("FlixTrain", &["FLX"]),
        Box::new(CityRule {
            name: "Gemeente Vervoerbedrijf Amsterdam",
            towns: &["Amsterdam"],
            endpoints: Endpoints::Both,
            // Trams, buses and ferries do not show up in exports
            types: &["U"],
        }),
        city("Verkehrs- und Betriebsgesellschaft Gera", &["Gera"]),
        Box::new(Havag),
        prefix("Koleje Dolnośląskie", &["KD"]),
        city("Leipziger Verkehrsbetriebe", &["Leipzig", "Schkeuditz"]),
        table("Mitteldeutsche Regiobahn", REGIONAL, MITTELDEUTSCHE_REGIOBAHN),
        prefix("metronom", &["ME"]),
        Box::new(LabelPrefixRule {
            name: "Nordbahn Eisenbahngesellschaft",
            prefix: "NBE",
        }),
        prefix("Nordwestbahn", &["NWB"]),
        Box::new(CityRule {
            name: "Naumburger Straßenbahn GmbH",
            towns: &["Naumburg"],
            endpoints: Endpoints::Either,
            types: &["STR"],
        }),
        Box::new(Obs),
        table("Ostdeutsche Eisenbahn GmbH", REGIONAL, ODEG),
        prefix("ÖBB", &["RJ", "RJX", "NJ"]),
        prefix("Oberpfalzbahn - Die Länderbahn", &["OPX"]),
        Box::new(Rvsoe),
        sbahn("S-Bahn Berlin", &["Berlin", "Bernau", "Potsdam"]),
        sbahn("S-Bahn Hamburg", &["Hamburg", "Stade"]),
        sbahn("S-Bahn München", &["München", "Tutzing"]),
        sbahn("S-Bahn Stuttgart", &["Stuttgart"]),
        prefix("SNCF", &["TGV"]),
        Box::new(LabelPrefixRule {
            name: "SWEG Bahn Stuttgart GmbH",
            prefix: "MEX",
        }),
        prefix("trilex - Die Länderbahn", &["TLX", "TL"]),
        city(
            "Verkehrsbetriebe Brandenburg an der Havel GmbH",
            &["Brandenburg an der Havel"],
        ),
        Box::new(Vgh),
        Box::new(CityRule {
            name: "Verkehrs- und Tarifverbund Stuttgart GmbH",
            towns: &["Stuttgart"],
            endpoints: Endpoints::Either,
            // Stuttgart labels its light rail "STB", not "STR"
            types: &["STB", "Bus"],
        }),
        city("ViP Verkehrsbetrieb Potsdam GmbH", &["Potsdam"]),
        prefix("Westfalenbahn", &["WFB"]),
        city("Würzburger Versorgungs- und Verkehrs-GmbH", &["Würzburg"]),
    ];
    RuleSet::new(rules)
}
