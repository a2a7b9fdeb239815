// src/specs/standings.rs
//! Spec for the championship driver standings page
//! (`/en/results/{season}/drivers`).
//!
//! Table: `<table class="f1-table …">`, header row `Pos | Driver | Nationality | Car | Pts`.
//! Driver cells look like `<span>Max</span> <span>Verstappen</span><span>VER</span>`.
//!
//! Output: one `StandingsEntry` per data row, page order kept. A row that
//! lacks position, driver or points is a contract violation, not skipped.

use crate::core::html::{Table, find_table_with_class};
use crate::core::sanitize::strip_driver_code;
use crate::ingest::IngestError;
use crate::standings::StandingsEntry;

use super::TABLE_CLASS;

pub fn parse(doc: &str) -> Result<Vec<StandingsEntry>, IngestError> {
    let table = find_table_with_class(doc, TABLE_CLASS)
        .ok_or(IngestError::TableNotFound { page: "standings" })?;
    let t = Table::parse(table);

    let pos = t.column(&["pos", "position"], Some(0));
    let driver = t.column(&["driver", "name"], Some(1));
    let nat = t.column(&["nationality", "nat"], Some(2));
    let team = t.column(&["car", "team", "constructor"], Some(3));
    // Points sit in the last column when there is no header to say so.
    let pts = t.column(&["pts", "points"], None);

    let pick = |cells: &[String], ix: Option<usize>| -> String {
        ix.and_then(|i| cells.get(i)).cloned().unwrap_or_default()
    };

    let mut out = Vec::with_capacity(t.rows.len());
    for (i, cells) in t.rows.iter().enumerate() {
        let points = match pts {
            Some(_) => pick(cells, pts),
            None if cells.len() > 4 => cells.last().cloned().unwrap_or_default(),
            None => s!(),
        };
        let shaped = vec![
            pick(cells, pos),
            strip_driver_code(&pick(cells, driver)),
            pick(cells, nat),
            pick(cells, team),
            points,
        ];
        out.push(StandingsEntry::from_row(i, &shaped)?);
    }
    Ok(out)
}
