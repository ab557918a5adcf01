//! Check-in log.

use std::io::Write;

use super::{Report, ReportContext, ReportError};
use crate::export::{Entry, parse_timestamp};

const TIME_FORMAT: &str = "%A, %d. %B %Y %H:%M";

/// Delays up to this many seconds count as on time.
const ON_TIME_SECS: i64 = 60;

/// Human-readable delay, e.g. `+180 sec`, `-30 sec` or `on time`.
pub fn delay_label(delay_secs: i64) -> String {
    if delay_secs > ON_TIME_SECS {
        format!("+{delay_secs} sec")
    } else if delay_secs < 0 {
        format!("{delay_secs} sec")
    } else {
        "on time".to_string()
    }
}

fn speed_label(metres: u64, minutes: u64) -> String {
    if minutes == 0 {
        return "-".to_string();
    }
    let kmh = (metres as f64 / 1000.0) / (minutes as f64 / 60.0);
    format!("{}", kmh.round())
}

/// Every check-in with times, delays and distance.
pub struct CheckIns;

impl CheckIns {
    fn render_entry(entry: &Entry, out: &mut dyn Write) -> Result<(), ReportError> {
        let status = &entry.status;
        let train = &status.train;

        writeln!(
            out,
            "{} {} -> {}",
            train.line_name, train.origin.name, train.destination.name
        )?;
        if let Some(event) = &status.event {
            writeln!(out, "\tEvent: {}", event.name)?;
        }
        if let Some(body) = status.body.as_deref()
            && !body.is_empty()
        {
            writeln!(out, "\tNote: \"{body}\"")?;
        }

        let departure = parse_timestamp(&train.origin.departure)?;
        let arrival = parse_timestamp(&train.destination.arrival)?;
        writeln!(
            out,
            "\t{} ({}) -> {} ({})",
            departure.format(TIME_FORMAT),
            delay_label(train.origin.delay_secs()?),
            arrival.format(TIME_FORMAT),
            delay_label(train.destination.delay_secs()?),
        )?;
        writeln!(
            out,
            "\t{:.2} km, {} min ({} km/h)",
            train.distance as f64 / 1000.0,
            train.duration,
            speed_label(train.distance, train.duration)
        )?;
        Ok(())
    }
}

impl Report for CheckIns {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        for entry in &ctx.dataset.entries {
            Self::render_entry(entry, out)?;
        }
        Ok(())
    }
}
