//! Railway operators.
//!
//! Regional lines in Germany are tendered per network, so the same line
//! label can be run by different companies in different states. The curated
//! tables below pin each observed line to its operator by the stations it
//! runs between.

use crate::domain::{DirectionalPair, RuleViolation, TripIdentity, matches_any};

use super::OperatorRule;

const fn pair(
    line: &'static str,
    origin: &'static str,
    destination: &'static str,
) -> DirectionalPair<'static> {
    DirectionalPair::between(line, origin, destination)
}

const fn from(line: &'static str, origin: &'static str) -> DirectionalPair<'static> {
    DirectionalPair::from_origin(line, origin)
}

const fn to(line: &'static str, destination: &'static str) -> DirectionalPair<'static> {
    DirectionalPair::to_destination(line, destination)
}

pub(super) const REGIONAL_OR_SUBURBAN: &[&str] = &["RE", "RB", "S"];
pub(super) const REGIONAL: &[&str] = &["RE", "RB"];

pub(super) const ABELLIO_MITTELDEUTSCHLAND: &[DirectionalPair<'static>] = &[
    pair("S 7", "Halle(Saale)Hbf", "Lutherstadt Eisleben"),
    to("RB 20", "Leipzig Hbf"),
    pair("RB 20", "Eisenach", "Halle(Saale)Hbf"),
    pair("RB 25", "Halle(Saale)Hbf", "Saalfeld(Saale)"),
    pair("RB 35", "Stendal Hbf", "Wolfsburg Hbf"),
    pair("RB 36", "Magdeburg Hbf", "Wolfsburg Hbf"),
    pair("RB 59", "Erfurt Hbf", "Sangerhausen"),
    pair("RE 4", "Halle(Saale)Hbf", "Goslar"),
    pair("RE 6", "Magdeburg Hbf", "Wolfsburg Hbf"),
    pair("RE 9", "Halle(Saale)Hbf", "Kassel-Wilhelmshöhe"),
    pair("RE 10", "Magdeburg Hbf", "Erfurt Hbf"),
    pair("RE 11", "Magdeburg Hbf", "Thale Hbf"),
    pair("RE 11", "Halberstadt", "Thale Hbf"),
    from("RE 16", "Halle(Saale)Hbf"),
    pair("RE 17", "Erfurt Hbf", "Naumburg(Saale)Hbf"),
    to("RE 21", "Goslar"),
    to("RE 31", "Blankenburg(Harz)"),
];

pub(super) const DB_REGIO_NORD: &[DirectionalPair<'static>] = &[
    from("RE 6", "Westerland(Sylt)"),
    from("RE 7", "Kiel Hbf"),
    from("RE 7", "Flensburg"),
    from("RE 8", "Lübeck Hbf"),
    from("RE 70", "Kiel Hbf"),
    from("RE 80", "Lübeck Hbf"),
    from("RB 85", "Lübeck Hbf"),
    from("RE 86", "Lübeck-Travemünde Strand"),
    from("RB 86", "Lübeck-Travemünde Strand"),
];

pub(super) const DB_REGIO_NRW: &[DirectionalPair<'static>] = &[
    from("RE 9", "Aachen Hbf"),
    from("RB 20", "Stolberg (Rheinl) Hbf"),
    from("RB 20", "Stolberg(Rheinl)Hbf"),
    from("RB 24", "Kall"),
    from("RB 25", "Overath"),
    from("RB 27", "Koblenz Hbf"),
    from("RB 33", "Aachen Hbf"),
];

pub(super) const DB_REGIO_MITTE: &[DirectionalPair<'static>] = &[
    pair("RE 1", "Koblenz Hbf", "Mannheim Hbf"),
    pair("RE 2", "Koblenz Hbf", "Frankfurt(Main)Hbf"),
    pair("RE 4", "Karlsruhe Hbf", "Frankfurt(Main)Hbf"),
    pair("RE 6", "Karlsruhe Hbf", "Kaiserslautern Hbf"),
    pair("RE 9", "Karlsruhe Hbf", "Mannheim Hbf"),
    pair("RE 14", "Frankfurt(Main)Hbf", "Mannheim Hbf"),
    pair("RE 20", "Frankfurt(Main)Hbf", "Limburg(Lahn)"),
    pair("RB 22", "Frankfurt(Main)Hbf", "Limburg(Lahn)"),
    pair("RB 23", "Mayen Ost", "Limburg(Lahn)"),
    pair("RE 25", "Gießen", "Koblenz Hbf"),
    pair("RE 30", "Kassel Hbf", "Frankfurt(Main)Hbf"),
    pair("RE 34", "Glauburg-Stockheim", "Frankfurt(Main)Hbf"),
    pair("RB 35", "Bingen(Rhein) Stadt", "Worms Hbf"),
    pair("RB 38", "Andernach", "Kaisersesch"),
    pair("RB 40", "Dillenburg", "Frankfurt(Main)Hbf"),
    pair("RE 40", "Mannheim Hbf", "Freudenstadt"),
];

pub(super) const ODEG: &[DirectionalPair<'static>] = &[
    from("RE 1", "Magdeburg Hbf"),
    from("RE 1", "Frankfurt(Oder)"),
    pair("RE 2", "Berlin-Charlottenburg", "Wismar"),
    pair("RB 33", "Jüterbog", "Potsdam Hbf"),
    pair("RB 64", "Görlitz", "Hoyerswerda"),
    from("RE 8", "Wismar"),
    pair("RB 65", "Cottbus Hbf", "Zittau"),
];

pub(super) const ERFURTER_BAHN: &[DirectionalPair<'static>] = &[
    from("RE 12", "Leipzig Hbf"),
    from("RE 50", "Erfurt Hbf"),
    from("RB 22", "Leipzig Hbf"),
    from("RB 23", "Erfurt Hbf"),
    from("RB 13", "Leipzig Hbf"),
    from("RB 13", "Gera Hbf"),
];

pub(super) const MITTELDEUTSCHE_REGIOBAHN: &[DirectionalPair<'static>] = &[
    pair("RB 30", "Dresden Hbf", "Zwickau(Sachs)Hbf"),
    pair("RB 45", "Chemnitz Hbf", "Elsterwerda"),
    pair("RB 110", "Leipzig Hbf", "Döbeln"),
    pair("RE 3", "Dresden Hbf", "Hof Hbf"),
    pair("RE 6", "Leipzig Hbf", "Chemnitz Hbf"),
];

const DB_REGIO_SUEDOST: &[DirectionalPair<'static>] = &[
    pair("RE 1", "Göttingen", "Glauchau(Sachs)"),
    pair("RE 2", "Kassel-Wilhelmshöhe", "Erfurt Hbf"),
    from("RE 3", "Erfurt Hbf"),
    pair("RE 7", "Erfurt Hbf", "Würzburg Hbf"),
    pair("RE 13", "Magdeburg Hbf", "Leipzig Hbf"),
    pair("RE 14", "Magdeburg Hbf", "Falkenberg(Elster)"),
    pair("RE 18", "Halle(Saale)Hbf", "Jena-Göschwitz"),
    pair("RE 19", "Dresden Hbf", "Kurort Altenberg(Erzgebirge)"),
    pair("RE 20", "Dresden Hbf", "Schöna(Gr)"),
    to("RE 20", "Uelzen"),
    pair("RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf"),
    pair("RE 50", "Leipzig Hbf", "Dresden Hbf"),
    pair("RE 55", "Nordhausen", "Erfurt Hbf"),
    pair("RE 56", "Nordhausen", "Erfurt Hbf"),
    pair("RE 57", "Bad Kissingen", "Würzburg Hbf"),
    pair("RB U 28", "Schöna", "Sebnitz(Sachs)"),
    pair("RB 32", "Stendal Hbf", "Salzwedel"),
    pair("RB 33", "Dresden Hbf", "Königsbrück"),
    pair("RB 34", "Dresden Hbf", "Senftenberg"),
    from("RB 40", "Braunschweig Hbf"),
    pair("RB 51", "Dessau Hbf", "Falkenberg(Elster)"),
    pair("RB 51", "Lutherstadt Wittenberg Hbf", "Falkenberg(Elster)"),
    pair("RB 52", "Leinefelde", "Erfurt Hbf"),
    pair("RB 53", "Bad Langensalza", "Gotha"),
    pair("RB 71", "Sebnitz(Sachs)", "Pirna"),
    pair("RB 72", "Kurort Altenberg(Erzgebirge)", "Heidenau"),
    pair("RB 76", "Weißenfels", "Zeitz"),
    pair("RB 78", "Querfurt", "Merseburg Hbf"),
    pair("RB 113", "Leipzig Hbf", "Geithain"),
    pair("S 1", "Meißen Triebischtal", "Schöna"),
    pair("S 1", "Schönebeck-Bad Salzelmen", "Wittenberge"),
    from("S 4", "Markkleeberg-Gaschwitz"),
];

/// Towns whose S-Bahn networks are run by DB Regio Südost.
///
/// Leipzig (S1, S2, S6, S10), Halle (S3, S5, S5X, S8, S9, S47), Dresden and
/// Bad Schandau (S1, S2, S8), Geithain.
const SUEDOST_SBAHN_TOWNS: &[&str] = &["Leipzig", "Dresden", "Bad Schandau", "Geithain"];

/// DB Regio Südost: Saxony, Saxony-Anhalt and Thuringia.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbRegioSuedost;

impl DbRegioSuedost {
    fn runs_sbahn(trip: &TripIdentity) -> bool {
        if !trip.line_starts_with("S") {
            return false;
        }
        // S 7 out of Halle belongs to Abellio
        if trip.any_station_contains("Halle") && trip.line() != "S 7" {
            return true;
        }
        SUEDOST_SBAHN_TOWNS
            .iter()
            .any(|town| trip.any_station_contains(town))
    }
}

impl OperatorRule for DbRegioSuedost {
    fn name(&self) -> &'static str {
        "DB Regio AG Südost"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if !trip.has_type(REGIONAL_OR_SUBURBAN) {
            return Ok(false);
        }
        if Self::runs_sbahn(trip) {
            return Ok(true);
        }
        Ok(matches_any(&trip.as_pair(), DB_REGIO_SUEDOST))
    }
}

const DB_REGIO_NORDOST: &[DirectionalPair<'static>] = &[
    pair("RE 1", "Hamburg Hbf", "Rostock Hbf"),
    pair("RE 2", "Nauen", "Cottbus Hbf"),
    pair("RE 2", "Berlin Ostbahnhof", "Cottbus Hbf"),
    pair("RE 3", "Schwedt(Oder)", "Lutherstadt Wittenberg Hbf"),
    from("RE 3", "Stralsund Hbf"),
    pair("RE 3", "Eberswalde Hbf", "Halle(Saale)Hbf"),
    pair("RE 4", "Lübeck Hbf", "Grambow"),
    pair("RE 4", "Pasewalk", "Ueckermünde Stadthafen"),
    pair("RE 4", "Neubrandenburg", "Lübeck Hbf"),
    pair("RE 4", "Elstal", "Jüterbog"),
    pair("RE 4", "Stendal Hbf", "Falkenberg(Elster)"),
    to("RE 5", "Berlin Südkreuz"),
    pair("RE 6", "Wittenberge", "Berlin-Charlottenburg"),
    from("RE 7", "Dessau Hbf"),
    pair("RE 7", "Senftenberg", "Königs Wusterhausen"),
    pair("RE 7", "Stralsund Hbf", "Greifswald"),
    from("RE 10", "Leipzig Hbf"),
    pair("RB 10", "Nauen", "Berlin Südkreuz"),
    pair("RB 11", "Wismar", "Tessin"),
    pair("RE 11", "Leipzig Hbf", "Hoyerswerda"),
    pair("RB 12", "Bad Doberan", "Ostseeheilbad Graal-Müritz"),
    pair("RB 12", "Rostock Hbf", "Ribnitz-Damgarten West"),
    pair("RE 13", "Cottbus Hbf", "Elsterwerda"),
    pair("RB 14", "Nauen", "Berlin Südkreuz"),
    pair("RE 15", "Hoyerswerda", "Dresden Hbf"),
    to("RB 17", "Ludwigslust"),
    pair("RB 18", "Bad Kleinen", "Schwerin Hbf"),
    pair("RE 18", "Cottbus Hbf", "Dresden-Neustadt"),
    pair("RB 20", "Oranienburg", "Potsdam Griebnitzsee"),
    pair("RB 21", "Potsdam Hbf", "Berlin Gesundbrunnen"),
    pair("RB 22", "Potsdam Griebnitzsee", "Königs Wusterhausen"),
    pair("RB 23", "Golm", "Flughafen BER - Terminal 1-2"),
    pair("RB 23", "Züssow", "Swinoujscie Centrum"),
    pair(
        "RB 24 Nord",
        "Eberswalde Hbf",
        "Flughafen BER - Terminal 5 (Schönefeld)",
    ),
    pair(
        "RB 24 Süd",
        "Flughafen BER - Terminal 1-2",
        "Wünsdorf-Waldstadt",
    ),
    pair("RB 24", "Zinnowitz", "Peenemünde"),
    pair("RB 25", "Barth", "Velgast"),
    pair("RB 31", "Elsterwerda-Biehla", "Dresden Hbf"),
    pair("RB 32 Süd", "Elsterwerda-Biehla", "Dresden Hbf"),
    pair(
        "RB 32 Nord",
        "Oranienburg",
        "Flughafen BER - Terminal 5 (Schönefeld)",
    ),
    pair("RB 43", "Falkenberg(Elster)", "Frankfurt(Oder)"),
    pair("RB 49", "Cottbus Hbf", "Falkenberg(Elster)"),
    pair("RB 55", "Kremmen", "Henningsdorf(Berlin)"),
    pair("RB 66", "Angermünde", "Tantow"),
    pair("RE 66", "Berlin Gesundbrunnen", "Tantow"),
    pair("RB 92", "Cottbus Hbf", "Guben"),
];

/// DB Regio Nordost: Berlin, Brandenburg and Mecklenburg-Vorpommern.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbRegioNordost;

impl OperatorRule for DbRegioNordost {
    fn name(&self) -> &'static str {
        "DB Regio AG Nordost"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        if trip.line_starts_with("FEX") {
            return Ok(true);
        }
        if !trip.has_type(REGIONAL_OR_SUBURBAN) {
            return Ok(false);
        }
        // Rostock S-Bahn from Warnemünde, and every regional service into it
        if (trip.line_starts_with("S") && trip.origin() == "Warnemünde")
            || trip.destination() == "Warnemünde"
        {
            return Ok(true);
        }
        Ok(matches_any(&trip.as_pair(), DB_REGIO_NORDOST))
    }
}

/// České dráhy, recognised by EuroCity services calling at Praha hl.n.
// Prague ECs seen so far use ČD rolling stock; anything else is a guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct CeskeDrahy;

impl OperatorRule for CeskeDrahy {
    fn name(&self) -> &'static str {
        "České dráhy"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        Ok(trip.line_starts_with("EC") && trip.touches_station("Praha hl.n."))
    }
}

/// Dessau-Wörlitzer Eisenbahn, whose labels are exactly eight characters
/// (e.g. `"DWE 1234"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DessauWoerlitz;

impl OperatorRule for DessauWoerlitz {
    fn name(&self) -> &'static str {
        "Dessau-Wörlitzer Eisenbahn"
    }

    fn matches(&self, trip: &TripIdentity) -> Result<bool, RuleViolation> {
        Ok(trip.line_starts_with("DWE") && trip.line().chars().count() == 8)
    }
}
