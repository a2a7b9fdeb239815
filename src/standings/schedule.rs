// src/standings/schedule.rs
//! Points awarded per finishing rank, keyed by session type.

use super::types::SessionType;

pub const RACE_POINTS: &[u32] = &[25, 18, 15, 12, 10, 8, 6, 4, 2, 1];
pub const SPRINT_POINTS: &[u32] = &[8, 7, 6, 5, 4, 3, 2, 1];
/// Qualifying is projected as if it paid race points.
pub const QUALIFYING_POINTS: &[u32] = RACE_POINTS;

/// Schedule for a session; index 0 is rank 1. Sessions without points get an
/// empty slice.
pub fn schedule(session: SessionType) -> &'static [u32] {
    match session {
        SessionType::Race => RACE_POINTS,
        SessionType::Sprint => SPRINT_POINTS,
        SessionType::Qualifying => QUALIFYING_POINTS,
        SessionType::Other => &[],
    }
}

/// Points for a 0-based rank. Past the end of the schedule is 0.
pub fn points_for(session: SessionType, rank: usize) -> u32 {
    schedule(session).get(rank).copied().unwrap_or(0)
}
