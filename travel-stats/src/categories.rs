//! Transport mode names and line-prefix groupings.

use crate::domain::leading_token;

/// Category prefixes of long-distance services.
pub const LONG_DISTANCE_PREFIXES: &[&str] = &[
    "ICE", "IC", "EC", "ECE", "EN", "NJ", "RJ", "RJX", "TGV", "FLX", "D", "EST", "IR",
];

/// Category prefixes of regional services, including private operators'
/// own brands.
pub const REGIONAL_PREFIXES: &[&str] = &[
    "RE", "RB", "IRE", "MEX", "ALX", "TL", "TLX", "OPX", "ME", "erx", "NWB", "WFB", "BRB", "HBX",
    "KD", "DWE", "FEX", "NBE", "RS",
];

/// Display name of a Träwelling transport category.
pub fn mode_name(category: &str) -> String {
    let name = match category {
        "bus" => "Bus",
        "tram" => "Tram",
        "suburban" => "S-Bahn",
        "subway" => "U-Bahn",
        "regional" => "Regional (RB, RE, ...)",
        "regionalExp" => "Fernverkehr (andere)",
        "national" => "Fernverkehr (IC, EC, ...)",
        "nationalExpress" => "Fernverkehr (ICE, ...)",
        "ferry" => "Fähre",
        other => return capitalize(other),
    };
    name.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Coarse mode buckets derived from the line label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeBucket {
    LongDistance,
    Regional,
    SBahn,
    UBahn,
    Tram,
    Bus,
}

impl ModeBucket {
    /// All buckets in display order.
    pub const ALL: [ModeBucket; 6] = [
        Self::LongDistance,
        Self::Regional,
        Self::SBahn,
        Self::UBahn,
        Self::Tram,
        Self::Bus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::LongDistance => "Fernverkehr",
            Self::Regional => "Regional",
            Self::SBahn => "S-Bahn",
            Self::UBahn => "U-Bahn",
            Self::Tram => "Tram",
            Self::Bus => "Bus",
        }
    }

    /// Returns true if `line` belongs to this bucket.
    ///
    /// Buckets are tested independently, so a label can fall into none.
    pub fn contains(self, line: &str) -> bool {
        match self {
            Self::LongDistance => LONG_DISTANCE_PREFIXES.contains(&leading_token(line)),
            Self::Regional => {
                if line.contains(' ') {
                    REGIONAL_PREFIXES.contains(&leading_token(line))
                } else {
                    // Unnumbered labels such as "RE1" or "FEX"
                    REGIONAL_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
                }
            }
            Self::SBahn => line.starts_with('S') && !line.starts_with("ST"),
            Self::UBahn => line.starts_with('U'),
            Self::Tram => line.starts_with("ST"),
            Self::Bus => line.starts_with("Bus"),
        }
    }
}
