//! Statistics reports over a merged dataset.
//!
//! Each report is one step of a run; the CLI picks which steps to render
//! and they are written in a fixed order.

mod all_lines;
mod checkins;
mod metadata;
mod mode_stats;
mod table;
mod tallies;

use std::io::{self, Write};

use crate::classify::CachedClassifier;
use crate::export::{Dataset, LoadError};

pub use all_lines::AllLines;
pub use checkins::{CheckIns, delay_label};
pub use metadata::Metadata;
pub use mode_stats::{BucketTotals, ModeStats};
pub use table::{Counts, limit_title, percentage, write_counts};
pub use tallies::{Events, Lines, Modes, Operators, SeenStations};

/// Errors while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the output failed
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    /// The dataset contains values the report cannot interpret
    #[error(transparent)]
    Data(#[from] LoadError),
}

/// Everything a report can draw on.
pub struct ReportContext<'a> {
    pub dataset: &'a Dataset,
    pub classifier: &'a CachedClassifier,
    /// Maximum rows for ranked tables, `None` for all.
    pub top_limit: Option<usize>,
}

/// A printable statistic.
pub trait Report {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError>;
}

/// The available reports, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Metadata,
    CheckIns,
    Events,
    Modes,
    ModeStats,
    Lines,
    AllLines,
    Operators,
    SeenStations,
}

impl Step {
    pub const ALL: [Step; 9] = [
        Self::Metadata,
        Self::CheckIns,
        Self::Events,
        Self::Modes,
        Self::ModeStats,
        Self::Lines,
        Self::AllLines,
        Self::Operators,
        Self::SeenStations,
    ];

    pub fn report(self) -> &'static dyn Report {
        match self {
            Self::Metadata => &Metadata,
            Self::CheckIns => &CheckIns,
            Self::Events => &Events,
            Self::Modes => &Modes,
            Self::ModeStats => &ModeStats,
            Self::Lines => &Lines,
            Self::AllLines => &AllLines,
            Self::Operators => &Operators,
            Self::SeenStations => &SeenStations,
        }
    }
}

/// Render `steps` in output order, separated by blank lines.
///
/// Duplicate steps are rendered once.
pub fn run(steps: &[Step], ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
    let selected = Step::ALL.iter().filter(|step| steps.contains(*step));
    for (i, step) in selected.enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        step.report().render(ctx, out)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::classify::{CacheConfig, Classifier};
    use crate::declarative::DeclarativeRules;

    pub fn classifier() -> CachedClassifier {
        CachedClassifier::new(
            Classifier::new(DeclarativeRules::default()),
            &CacheConfig::default(),
        )
    }

    /// Render `report` over `dataset` to a string.
    pub fn render(report: &dyn Report, dataset: &Dataset, top_limit: Option<usize>) -> String {
        let classifier = classifier();
        let ctx = ReportContext {
            dataset,
            classifier: &classifier,
            top_limit,
        };
        let mut out = Vec::new();
        report.render(&ctx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;

    #[test]
    fn run_renders_in_fixed_order() {
        let dataset = fixtures::dataset(vec![fixtures::json_entry(1, "RE 1", "A", "B")]);
        let classifier = testing::classifier();
        let ctx = ReportContext {
            dataset: &dataset,
            classifier: &classifier,
            top_limit: None,
        };

        let mut out = Vec::new();
        run(&[Step::Lines, Step::Events, Step::Lines], &ctx, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let events = output.find("Events").unwrap();
        let lines = output.find("Lines").unwrap();
        assert!(events < lines);
        assert_eq!(output.matches("Lines (").count(), 1);
        assert!(output.contains("\n\nLines"));
    }

    #[test]
    fn run_nothing() {
        let dataset = fixtures::dataset(vec![fixtures::json_entry(1, "RE 1", "A", "B")]);
        let classifier = testing::classifier();
        let ctx = ReportContext {
            dataset: &dataset,
            classifier: &classifier,
            top_limit: None,
        };

        let mut out = Vec::new();
        run(&[], &ctx, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
