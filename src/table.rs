// src/table.rs
//
// Projected standings → display table (headers + string rows).
// Rows are taken in the order given; the projection already ranked them.

use crate::standings::ProjectedEntry;

pub const HEADERS: &[&str] = &[
    "Pos", "Driver", "Nationality", "Team", "Pts", "Session", "Projected", "Δ",
];

/// Columns that hold text; everything else is right-aligned as a number.
pub const TEXT_COLUMNS: &[usize] = &[1, 2, 3];

pub const NO_DATA: &str = "No live data available.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

pub fn fmt_delta(delta: i32) -> String {
    match delta {
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

/// `None` when there is nothing to show.
pub fn to_dataset(projected: &[ProjectedEntry]) -> Option<DataSet> {
    if projected.is_empty() {
        return None;
    }
    let rows = projected
        .iter()
        .map(|e| row![
            e.new_position,
            e.driver_name,
            e.nationality,
            e.team,
            e.current_points,
            e.session_points,
            e.projected_total,
            fmt_delta(e.position_delta),
        ])
        .collect();
    Some(DataSet {
        headers: Some(HEADERS.iter().map(|h| s!(*h)).collect()),
        rows,
    })
}

/// Fixed-width text rendering for terminals.
pub fn render_text(ds: &DataSet) -> String {
    let cols = ds.headers.as_ref().map(|h| h.len())
        .or_else(|| ds.rows.first().map(|r| r.len()))
        .unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for r in ds.headers.iter().chain(ds.rows.iter()) {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |r: &[String]| -> String {
        let cells: Vec<String> = r
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(ci, (cell, &w))| {
                if TEXT_COLUMNS.contains(&ci) { format!("{cell:<w$}") } else { format!("{cell:>w$}") }
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let mut out = s!();
    if let Some(h) = &ds.headers {
        out.push_str(&line(h));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * cols.saturating_sub(1)));
        out.push('\n');
    }
    for r in &ds.rows {
        out.push_str(&line(r));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standings::{SessionType, StandingsEntry, project};

    #[test]
    fn deltas_are_signed() {
        assert_eq!(fmt_delta(2), "+2");
        assert_eq!(fmt_delta(0), "0");
        assert_eq!(fmt_delta(-3), "-3");
    }

    #[test]
    fn rows_follow_projection_order() {
        let st = vec![
            StandingsEntry::new(1, "A", "T1", 10).with_nationality("GBR"),
            StandingsEntry::new(2, "B", "T2", 8).with_nationality("NED"),
        ];
        let p = project(&st, &["B", "A"], SessionType::Race).unwrap();
        let ds = to_dataset(&p).unwrap();
        assert_eq!(ds.rows[0], row!["1", "B", "NED", "T2", "8", "25", "33", "+1"]);
        assert_eq!(ds.rows[1], row!["2", "A", "GBR", "T1", "10", "18", "28", "-1"]);
    }

    #[test]
    fn empty_projection_has_no_table() {
        assert_eq!(to_dataset(&[]), None);
    }

    #[test]
    fn text_render_aligns() {
        let ds = DataSet {
            headers: Some(row!["Pos", "Driver"]),
            rows: vec![row!["1", "Norris"], row!["10", "Alonso"]],
        };
        let txt = render_text(&ds);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines[0], "Pos  Driver");
        assert_eq!(lines[2], "  1  Norris");
        assert_eq!(lines[3], " 10  Alonso");
    }
}
