// src/standings/projection.rs
//! (standings, running order, session) → projected standings.
//!
//! Pure and synchronous: no IO, no logging, nothing kept between calls.
//! The returned vector is already in display order (projected leader first).

use std::collections::HashSet;

use super::{
    error::ProjectionError,
    matcher::{ExactThenContains, NameIndex, NameMatcher, normalize_name},
    schedule::{points_for, schedule},
    types::{ProjectedEntry, SessionType, StandingsEntry},
};

/// Project with the default name-matching policy.
pub fn project<S: AsRef<str>>(
    standings: &[StandingsEntry],
    running_order: &[S],
    session: SessionType,
) -> Result<Vec<ProjectedEntry>, ProjectionError> {
    project_with(&ExactThenContains, standings, running_order, session)
}

pub fn project_with<S: AsRef<str>>(
    matcher: &dyn NameMatcher,
    standings: &[StandingsEntry],
    running_order: &[S],
    session: SessionType,
) -> Result<Vec<ProjectedEntry>, ProjectionError> {
    validate(standings)?;

    // Standings rank order; the input need not be sorted.
    let mut base: Vec<usize> = (0..standings.len()).collect();
    base.sort_by_key(|&ix| standings[ix].position);

    if running_order.is_empty() || schedule(session).is_empty() {
        return Ok(pass_through(standings, &base));
    }

    let awarded = session_points(matcher, standings, running_order, session);
    let totals = standings
        .iter()
        .zip(&awarded)
        .map(|(e, &pts)| {
            e.current_points
                .checked_add(pts)
                .ok_or_else(|| ProjectionError::PointsOverflow { driver: e.driver_name.clone() })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    // Stable: equal totals keep their standings order.
    let mut order = base;
    order.sort_by(|&a, &b| totals[b].cmp(&totals[a]));

    Ok(order
        .into_iter()
        .enumerate()
        .map(|(rank, ix)| ProjectedEntry::build(&standings[ix], awarded[ix], totals[ix], rank as u32 + 1))
        .collect())
}

/// Running-order identifiers that resolve to no standings entry.
/// Handy for adapters that want to log them; the projection ignores them.
pub fn unmatched<'a, S: AsRef<str>>(
    matcher: &dyn NameMatcher,
    standings: &[StandingsEntry],
    running_order: &'a [S],
) -> Vec<&'a str> {
    let index = NameIndex::new(standings);
    running_order
        .iter()
        .map(|s| s.as_ref())
        .filter(|id| matcher.resolve(id, &index).is_none())
        .collect()
}

/// Per-standings-entry session points. First reference to a driver wins.
fn session_points<S: AsRef<str>>(
    matcher: &dyn NameMatcher,
    standings: &[StandingsEntry],
    running_order: &[S],
    session: SessionType,
) -> Vec<u32> {
    let index = NameIndex::new(standings);
    let mut awarded = vec![0u32; standings.len()];
    let mut seen = vec![false; standings.len()];

    for (rank, id) in running_order.iter().enumerate() {
        if let Some(ix) = matcher.resolve(id.as_ref(), &index) {
            if !seen[ix] {
                seen[ix] = true;
                awarded[ix] = points_for(session, rank);
            }
        }
    }
    awarded
}

fn pass_through(standings: &[StandingsEntry], base: &[usize]) -> Vec<ProjectedEntry> {
    base.iter()
        .map(|&ix| {
            let e = &standings[ix];
            ProjectedEntry::build(e, 0, e.current_points, e.position)
        })
        .collect()
}

/// Required fields present, positions exactly 1..=N, and driver names
/// unique (after folding, since two names that fold together cannot be told
/// apart by the matcher).
pub fn validate(standings: &[StandingsEntry]) -> Result<(), ProjectionError> {
    let count = standings.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(count);
    let mut taken = vec![false; count];
    for (row, e) in standings.iter().enumerate() {
        if e.position == 0 {
            return Err(ProjectionError::MissingField { row, field: "position" });
        }
        match taken.get_mut(e.position as usize - 1) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(ProjectionError::BadPosition { row, position: e.position, count }),
        }
        let key = normalize_name(&e.driver_name);
        if key.is_empty() {
            return Err(ProjectionError::MissingField { row, field: "driver" });
        }
        if !seen.insert(key) {
            return Err(ProjectionError::DuplicateDriver(e.driver_name.clone()));
        }
    }
    Ok(())
}
