//! The full list of distinct line runs.

use std::collections::HashSet;
use std::io::Write;

use super::{Report, ReportContext, ReportError};

/// Every distinct line run with its termini and operator, by line name.
pub struct AllLines;

impl Report for AllLines {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let mut entries: Vec<_> = ctx.dataset.entries.iter().collect();
        entries.sort_by(|a, b| a.trip.line_name.cmp(&b.trip.line_name));

        let mut seen = HashSet::new();
        for entry in entries {
            let trip = entry.identity();
            let operator = ctx.classifier.classify(&trip, entry.upstream_operator());
            let row = format!(
                "{} from {} to {} {}",
                trip.line(),
                trip.origin(),
                trip.destination(),
                operator
            );
            if seen.insert(row.clone()) {
                writeln!(out, "{row}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;
    use crate::report::testing::render;

    #[test]
    fn unique_rows_sorted_by_line() {
        let dataset = fixtures::dataset(vec![
            fixtures::json_entry(1, "RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf"),
            fixtures::json_entry(2, "Bus 50", "Bremen Hbf", "Bremen-Vegesack"),
            fixtures::json_entry(3, "RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf"),
            fixtures::json_entry(4, "QQQ 1", "A", "B"),
        ]);

        assert_eq!(
            render(&AllLines, &dataset, None),
            "Bus 50 from Bremen Hbf to Bremen-Vegesack Bremer Straßenbahn AG\n\
             QQQ 1 from A to B <unknown operator>\n\
             RE 30 from Magdeburg Hbf to Halle(Saale)Hbf DB Regio AG Südost\n"
        );
    }

    #[test]
    fn reversed_direction_is_its_own_row() {
        let dataset = fixtures::dataset(vec![
            fixtures::json_entry(1, "RE 30", "Magdeburg Hbf", "Halle(Saale)Hbf"),
            fixtures::json_entry(2, "RE 30", "Halle(Saale)Hbf", "Magdeburg Hbf"),
        ]);

        let output = render(&AllLines, &dataset, None);
        assert_eq!(output.lines().count(), 2);
        assert!(output.lines().all(|l| l.ends_with("DB Regio AG Südost")));
    }
}
