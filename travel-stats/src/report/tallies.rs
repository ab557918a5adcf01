//! Reports that count one label per check-in.

use std::io::Write;

use super::table::{Counts, limit_title, write_counts};
use super::{Report, ReportContext, ReportError};
use crate::categories::mode_name;

const NO_EVENT: &str = "[No event]";

/// Check-ins per event.
pub struct Events;

impl Report for Events {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let counts: Counts = ctx
            .dataset
            .entries
            .iter()
            .map(|entry| {
                entry
                    .status
                    .event
                    .as_ref()
                    .map_or(NO_EVENT, |event| event.name.as_str())
            })
            .collect();
        write_counts(out, "Events", "Event", &counts, None)?;
        Ok(())
    }
}

/// Check-ins per transport mode.
pub struct Modes;

impl Report for Modes {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let counts: Counts = ctx
            .dataset
            .entries
            .iter()
            .map(|entry| mode_name(&entry.status.train.category))
            .collect();
        let heading = format!("Modes ({})", limit_title(ctx.top_limit));
        write_counts(out, &heading, "Mode", &counts, ctx.top_limit)?;
        Ok(())
    }
}

/// Check-ins per line label.
pub struct Lines;

impl Report for Lines {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let counts: Counts = ctx
            .dataset
            .entries
            .iter()
            .map(|entry| entry.trip.line_name.as_str())
            .collect();
        let heading = format!("Lines ({})", limit_title(ctx.top_limit));
        write_counts(out, &heading, "Line", &counts, ctx.top_limit)?;
        Ok(())
    }
}

/// Check-ins per operator, as classified.
pub struct Operators;

impl Report for Operators {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let counts: Counts = ctx
            .dataset
            .entries
            .iter()
            .map(|entry| {
                ctx.classifier
                    .classify(&entry.identity(), entry.upstream_operator())
                    .label()
                    .to_string()
            })
            .collect();
        let heading = format!("Operators ({})", limit_title(ctx.top_limit));
        write_counts(out, &heading, "Operator", &counts, ctx.top_limit)?;
        Ok(())
    }
}

/// How often each station was a boarding or alighting point.
pub struct SeenStations;

impl Report for SeenStations {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        let counts: Counts = ctx
            .dataset
            .entries
            .iter()
            .flat_map(|entry| {
                let train = &entry.status.train;
                [train.origin.name.as_str(), train.destination.name.as_str()]
            })
            .collect();
        for (station, count) in counts.sorted() {
            writeln!(out, "{count} {station}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::fixtures;
    use crate::report::testing::render;
    use serde_json::json;

    #[test]
    fn events_default_label() {
        let mut with_event = fixtures::json_entry(1, "RE 1", "A", "B");
        with_event["status"]["event"] = json!({"name": "CCC"});
        let dataset = fixtures::dataset(vec![
            with_event,
            fixtures::json_entry(2, "RE 1", "A", "B"),
            fixtures::json_entry(3, "RE 1", "A", "B"),
        ]);

        let output = render(&Events, &dataset, None);
        assert!(output.starts_with("Events\n"));
        let no_event = output.lines().find(|l| l.starts_with(NO_EVENT)).unwrap();
        assert!(no_event.ends_with("66.67"));
        assert!(output.lines().any(|l| l.starts_with("CCC")));
    }

    #[test]
    fn modes_use_display_names() {
        let mut bus = fixtures::json_entry(1, "Bus 50", "A", "B");
        bus["status"]["train"]["category"] = "bus".into();
        let dataset = fixtures::dataset(vec![bus, fixtures::json_entry(2, "RE 1", "A", "B")]);

        let output = render(&Modes, &dataset, None);
        assert!(output.starts_with("Modes (all time)\n"));
        assert!(output.contains("Bus "));
        assert!(output.contains("Regional (RB, RE, ...)"));
    }

    #[test]
    fn lines_honour_top_limit() {
        let dataset = fixtures::dataset(vec![
            fixtures::json_entry(1, "RE 1", "A", "B"),
            fixtures::json_entry(2, "RE 1", "A", "B"),
            fixtures::json_entry(3, "RE 2", "A", "B"),
            fixtures::json_entry(4, "RE 3", "A", "B"),
        ]);

        let output = render(&Lines, &dataset, Some(1));
        assert!(output.starts_with("Lines (top 1)\n"));
        assert!(output.contains("RE 1"));
        assert!(!output.contains("RE 2"));
        assert!(output.ends_with("... and 2 more\n"));
    }

    #[test]
    fn operators_combine_all_sources() {
        let mut reported = fixtures::json_entry(1, "ICE 1", "A", "B");
        reported["status"]["train"]["operator"] =
            json!({"identifier": "sbb", "name": "Schweizerische Bundesbahnen"});
        let dataset = fixtures::dataset(vec![
            reported,
            fixtures::json_entry(2, "Bus 50", "Bremen Hbf", "Bremen-Vegesack"),
            fixtures::json_entry(3, "QQQ 1", "A", "B"),
        ]);

        let output = render(&Operators, &dataset, None);
        assert!(output.contains("Schweizerische Bundesbahnen"));
        assert!(output.contains("Bremer Straßenbahn AG"));
        assert!(output.contains("<unknown operator>"));
    }

    #[test]
    fn seen_stations_count_both_ends() {
        let dataset = fixtures::dataset(vec![
            fixtures::json_entry(1, "RE 1", "Leipzig Hbf", "Halle(Saale)Hbf"),
            fixtures::json_entry(2, "RE 1", "Halle(Saale)Hbf", "Leipzig Hbf"),
            fixtures::json_entry(3, "RE 2", "Halle(Saale)Hbf", "Erfurt Hbf"),
        ]);

        let output = render(&SeenStations, &dataset, None);
        assert_eq!(
            output,
            "3 Halle(Saale)Hbf\n2 Leipzig Hbf\n1 Erfurt Hbf\n"
        );
    }
}
