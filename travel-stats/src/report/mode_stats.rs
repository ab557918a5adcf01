//! Distance and time per coarse mode.

use std::io::Write;

use super::{Report, ReportContext, ReportError};
use crate::categories::ModeBucket;
use crate::export::Entry;

/// Totals for one mode bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketTotals {
    pub checkins: usize,
    pub km: u64,
    pub hours: u64,
}

impl BucketTotals {
    /// Sum the check-ins whose line falls into `bucket`.
    pub fn collect(bucket: ModeBucket, entries: &[Entry]) -> Self {
        let (checkins, metres, minutes) = entries
            .iter()
            .map(|entry| &entry.status.train)
            .filter(|train| bucket.contains(&train.line_name))
            .fold((0, 0, 0), |(n, m, min), train| {
                (n + 1, m + train.distance, min + train.duration)
            });

        Self {
            checkins,
            km: metres / 1000,
            hours: minutes / 60,
        }
    }

    /// Average speed in whole km/h, zero when no full hour was travelled.
    pub fn speed(&self) -> u64 {
        self.km.checked_div(self.hours).unwrap_or(0)
    }
}

/// Check-ins, distance, duration and speed per mode bucket.
pub struct ModeStats;

impl Report for ModeStats {
    fn render(&self, ctx: &ReportContext<'_>, out: &mut dyn Write) -> Result<(), ReportError> {
        for bucket in ModeBucket::ALL {
            let totals = BucketTotals::collect(bucket, &ctx.dataset.entries);
            writeln!(
                out,
                "{:<11}: {} check-ins, {} km, {} hours, {} km/h",
                bucket.label(),
                totals.checkins,
                totals.km,
                totals.hours,
                totals.speed()
            )?;
        }
        Ok(())
    }
}
