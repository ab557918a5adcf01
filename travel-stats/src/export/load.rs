//! Reading and merging export files.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, info};

use super::error::LoadError;
use super::types::{Entry, Export, User, parse_timestamp};

/// Inclusive period covered by a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<FixedOffset>,
    pub to: DateTime<FixedOffset>,
}

/// Merged check-ins from one or more exports.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Check-ins ordered by departure, without duplicates.
    pub entries: Vec<Entry>,
    pub range: DateRange,
    /// Account totals from the most recent export.
    pub user: User,
}

/// Read a single export file.
pub fn load_file(path: &Path) -> Result<Export, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let export: Export = serde_json::from_str(&json).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        entries = export.entries.len(),
        "Loaded export"
    );
    Ok(export)
}

/// Merge exports into one dataset.
///
/// Check-ins that appear in more than one export (overlapping periods) are
/// kept once, by status id. The range spans all exports.
pub fn merge(exports: Vec<Export>) -> Result<Dataset, LoadError> {
    let mut range: Option<DateRange> = None;
    let mut newest: Option<(DateTime<FixedOffset>, User)> = None;
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut duplicates = 0usize;

    for export in exports {
        let from = parse_timestamp(&export.meta.from)?;
        let to = parse_timestamp(&export.meta.to)?;
        range = Some(match range {
            Some(r) => DateRange {
                from: r.from.min(from),
                to: r.to.max(to),
            },
            None => DateRange { from, to },
        });

        let exported_at = parse_timestamp(&export.meta.exported_at)?;
        if newest.as_ref().is_none_or(|(at, _)| exported_at > *at) {
            newest = Some((exported_at, export.meta.user));
        }

        for entry in export.entries {
            if seen.insert(entry.status.id) {
                entries.push((entry.departure()?, entry));
            } else {
                duplicates += 1;
            }
        }
    }

    let (Some(range), Some((_, user))) = (range, newest) else {
        return Err(LoadError::Empty);
    };
    if entries.is_empty() {
        return Err(LoadError::Empty);
    }

    entries.sort_by_key(|(departure, _)| *departure);
    let entries: Vec<Entry> = entries.into_iter().map(|(_, entry)| entry).collect();

    info!(
        entries = entries.len(),
        duplicates, "Merged exports"
    );

    Ok(Dataset {
        entries,
        range,
        user,
    })
}

/// Load and merge every file in `paths`.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Dataset, LoadError> {
    let exports = paths
        .iter()
        .map(|path| load_file(path.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    merge(exports)
}
