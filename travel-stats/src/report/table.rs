//! Counted tables.
//!
//! Most reports count occurrences of some label and print them as a table
//! of label, count and share of the total.

use std::collections::HashMap;
use std::io::{self, Write};

/// Occurrence counts per label.
#[derive(Debug, Clone, Default)]
pub struct Counts {
    counts: HashMap<String, usize>,
}

impl Counts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `label`.
    pub fn add(&mut self, label: impl Into<String>) {
        *self.counts.entry(label.into()).or_default() += 1;
    }

    /// Sum over all labels.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Labels by count descending, ties broken alphabetically.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<_> = self
            .counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

impl<S: Into<String>> FromIterator<S> for Counts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = Self::new();
        for label in iter {
            counts.add(label);
        }
        counts
    }
}

/// Heading suffix describing the row limit.
pub fn limit_title(limit: Option<usize>) -> String {
    match limit {
        Some(n) => format!("top {n}"),
        None => "all time".to_string(),
    }
}

/// Share of `count` in `total` as a percentage with two decimals.
pub fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", count as f64 / total as f64 * 100.0)
}

/// Write `counts` as an aligned table under `heading`.
///
/// At most `limit` rows are shown; the rest are summarised in a footer.
pub fn write_counts(
    out: &mut dyn Write,
    heading: &str,
    column: &str,
    counts: &Counts,
    limit: Option<usize>,
) -> io::Result<()> {
    let total = counts.total();
    let sorted = counts.sorted();
    let shown = limit.map_or(sorted.len(), |n| n.min(sorted.len()));

    let rows: Vec<[String; 3]> = sorted[..shown]
        .iter()
        .map(|(label, count)| {
            [
                (*label).to_string(),
                count.to_string(),
                percentage(*count, total),
            ]
        })
        .collect();

    let header = [column.to_string(), "Count".to_string(), "%".to_string()];
    let mut widths = header.each_ref().map(|cell| cell.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{heading}")?;
    write_row(out, &header, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    if sorted.len() > shown {
        writeln!(out, "... and {} more", sorted.len() - shown)?;
    }
    Ok(())
}

fn write_row(out: &mut dyn Write, cells: &[String; 3], widths: &[usize; 3]) -> io::Result<()> {
    // Label left-aligned, numbers right-aligned
    let [label, count, share] = cells;
    let pad = |cell: &str, width: usize| " ".repeat(width.saturating_sub(cell.chars().count()));
    writeln!(
        out,
        "{label}{}  {}{count}  {}{share}",
        pad(label, widths[0]),
        pad(count, widths[1]),
        pad(share, widths[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(counts: &Counts, limit: Option<usize>) -> String {
        let mut out = Vec::new();
        write_counts(&mut out, "Things", "Thing", counts, limit).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn sorted_by_count_then_label() {
        let counts: Counts = ["b", "a", "c", "c", "b", "c"].into_iter().collect();
        assert_eq!(counts.sorted(), [("c", 3), ("b", 2), ("a", 1)]);

        let ties: Counts = ["y", "x", "z"].into_iter().collect();
        assert_eq!(ties.sorted(), [("x", 1), ("y", 1), ("z", 1)]);
    }

    #[test]
    fn percentages() {
        assert_eq!(percentage(1, 3), "33.33");
        assert_eq!(percentage(2, 3), "66.67");
        assert_eq!(percentage(5, 5), "100.00");
        assert_eq!(percentage(0, 0), "0.00");
    }

    #[test]
    fn limit_titles() {
        assert_eq!(limit_title(None), "all time");
        assert_eq!(limit_title(Some(5)), "top 5");
    }

    #[test]
    fn renders_aligned_table() {
        let counts: Counts = ["Straße", "RE", "RE"].into_iter().collect();
        assert_eq!(
            render(&counts, None),
            "Things\n\
             Thing   Count      %\n\
             RE          2  66.67\n\
             Straße      1  33.33\n"
        );
    }

    #[test]
    fn footer_counts_hidden_rows() {
        let counts: Counts = ["a", "a", "b", "c"].into_iter().collect();
        let output = render(&counts, Some(1));
        assert!(output.contains("a "));
        assert!(!output.contains("b "));
        assert!(output.ends_with("... and 2 more\n"));
    }

    #[test]
    fn no_footer_when_everything_fits() {
        let counts: Counts = ["a", "b"].into_iter().collect();
        assert!(!render(&counts, Some(2)).contains("more"));
    }
}
