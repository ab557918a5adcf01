//! Header with the covered date range and account totals.

use std::io::Write;

use super::{Report, ReportContext, ReportError};

const RANGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Period covered and the account's lifetime totals.
pub struct Metadata;

impl Report for Metadata {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let dataset = ctx.dataset;
        let user = &dataset.user;
        let points: i64 = dataset
            .entries
            .iter()
            .map(|entry| entry.status.train.points)
            .sum();

        writeln!(
            out,
            "{} - {}",
            dataset.range.from.format(RANGE_FORMAT),
            dataset.range.to.format(RANGE_FORMAT)
        )?;
        writeln!(out)?;
        writeln!(out, "Distance travelled: {} km", user.train_distance / 1000)?;
        writeln!(out, "Duration: {} h", user.train_duration / 60)?;
        writeln!(out, "Points: {} (total: {points})", user.points)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;
    use crate::report::testing::render;

    #[test]
    fn summary() {
        let dataset = fixtures::dataset(vec![
            fixtures::json_entry(1, "RE 1", "A", "B"),
            fixtures::json_entry(2, "RE 1", "B", "A"),
        ]);

        assert_eq!(
            render(&Metadata, &dataset, None),
            "2023-07-01 00:00:00 - 2023-07-31 23:59:59\n\
             \n\
             Distance travelled: 123 km\n\
             Duration: 10 h\n\
             Points: 42 (total: 10)\n"
        );
    }
}
