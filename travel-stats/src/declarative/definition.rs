//! A single operator definition from the rule file.

use regex::Regex;

use crate::domain::TripIdentity;

/// A line entry of a definition. Missing endpoints match any station.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct LineDefinition {
    pub line: String,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

impl LineDefinition {
    /// Create an entry for `line` between optional endpoints.
    pub fn new(line: impl Into<String>, from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            line: line.into(),
            from: from.map(str::to_owned),
            to: to.map(str::to_owned),
        }
    }

    fn fits_ends(&self, origin: &str, destination: &str) -> bool {
        self.from.as_deref().is_none_or(|from| from == origin)
            && self.to.as_deref().is_none_or(|to| to == destination)
    }

    /// Returns true if `trip` runs this line, in either direction.
    pub fn fits(&self, trip: &TripIdentity) -> bool {
        self.line == trip.line()
            && (self.fits_ends(trip.origin(), trip.destination())
                || self.fits_ends(trip.destination(), trip.origin()))
    }
}

/// An operator described in data rather than code.
#[derive(Debug, Clone)]
pub struct OperatorDefinition {
    pub name: String,
    pub types: Vec<String>,
    pub lines: Vec<LineDefinition>,
    pub station_substrings: Vec<String>,
    /// Compiled with anchors, so it must match the whole line label.
    pub regex: Option<Regex>,
}

impl OperatorDefinition {
    /// A definition that claims every line of the given types.
    pub fn for_types<I, S>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
            station_substrings: Vec::new(),
            regex: None,
        }
    }

    /// Returns true if the line label passes this definition's type filter.
    ///
    /// A definition without types never passes, even with a regex.
    pub fn accepts_line(&self, line: &str) -> bool {
        self.types.iter().any(|ty| match (&self.regex, line.split_once(' ')) {
            (Some(regex), _) => regex.is_match(line),
            (None, Some((head, _))) => head == ty,
            (None, None) => line.starts_with(ty.as_str()),
        })
    }

    /// Returns true if this definition claims `trip`, assuming the type
    /// filter already passed.
    ///
    /// Station substrings take precedence over line entries; a definition
    /// with neither claims everything.
    pub fn claims(&self, trip: &TripIdentity) -> bool {
        if !self.station_substrings.is_empty() {
            return self
                .station_substrings
                .iter()
                .any(|needle| trip.any_station_contains(needle));
        }
        if !self.lines.is_empty() {
            return self.lines.iter().any(|line| line.fits(trip));
        }
        true
    }
}
