// src/specs/results.rs
//! Spec for a session classification page, read as a running order.
//!
//! Table: `<table class="f1-table …">`, header row
//! `Pos | No | Driver | Car | Laps | Time/Retired | Pts` (race) or
//! `Pos | No | Driver | Car | Q1 | Q2 | Q3 | Laps` (qualifying).
//! Only the Driver column matters; row order is the running order.
//!
//! Also reads plain-text running orders: one driver per line, optional
//! leading position (`1.`, `P1`, `1)`), `#` comments, and an optional
//! `# session: sprint` line.

use crate::core::html::{Table, find_table_with_class, title};
use crate::core::sanitize::strip_driver_code;
use crate::ingest::IngestError;
use crate::standings::SessionType;

use super::{TABLE_CLASS, session};

/// A parsed running order, leader first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunningOrder {
    pub names: Vec<String>,
    /// What the document itself says about the session, if anything.
    pub session: Option<SessionType>,
}

/// Parse a results page. `url` helps session detection when known.
pub fn parse(doc: &str, url: Option<&str>) -> Result<RunningOrder, IngestError> {
    let table = find_table_with_class(doc, TABLE_CLASS)
        .ok_or(IngestError::TableNotFound { page: "results" })?;
    let t = Table::parse(table);
    let driver = t.column(&["driver", "name"], Some(2));

    let names = t.rows
        .iter()
        .filter_map(|cells| driver.and_then(|d| cells.get(d)))
        .map(|c| strip_driver_code(c))
        .filter(|n| !n.is_empty())
        .collect();

    let page_title = title(doc);
    let detected = session::detect(url, page_title.as_deref());
    Ok(RunningOrder {
        names,
        session: (detected != SessionType::Other).then_some(detected),
    })
}

/// Parse a plain-text running order.
pub fn parse_text(text: &str) -> RunningOrder {
    let mut out = RunningOrder::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() { continue; }
        if let Some(comment) = line.strip_prefix('#') {
            if let Some(val) = comment.trim().strip_prefix("session:") {
                out.session = Some(SessionType::from_label(val));
            }
            continue;
        }
        let name = strip_driver_code(strip_rank_prefix(line));
        if !name.is_empty() {
            out.names.push(name);
        }
    }
    out
}

/// `"1. Max Verstappen"`, `"P1 Max Verstappen"`, `"1) Max"` → the name part.
fn strip_rank_prefix(line: &str) -> &str {
    let rest = line.strip_prefix(['P', 'p']).unwrap_or(line);
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return line;
    }
    let after = &rest[digits..];
    let after = after.strip_prefix(['.', ')', ':']).unwrap_or(after);
    if after.starts_with(char::is_whitespace) {
        after.trim_start()
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_prefixes() {
        assert_eq!(strip_rank_prefix("1. Max Verstappen"), "Max Verstappen");
        assert_eq!(strip_rank_prefix("P12 Lance Stroll"), "Lance Stroll");
        assert_eq!(strip_rank_prefix("3) Leclerc"), "Leclerc");
        assert_eq!(strip_rank_prefix("Piastri"), "Piastri");
        assert_eq!(strip_rank_prefix("44Hamilton"), "44Hamilton");
    }

    #[test]
    fn text_order_with_session_line() {
        let order = parse_text("# session: sprint\n1. Norris NOR\n\n# comment\n2. Piastri\n");
        assert_eq!(order.session, Some(SessionType::Sprint));
        assert_eq!(order.names, vec!["Norris", "Piastri"]);
    }
}
