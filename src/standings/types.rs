// src/standings/types.rs
use std::fmt;

use super::error::ProjectionError;

/// One driver as currently classified, before any projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandingsEntry {
    pub position: u32,
    pub driver_name: String,
    pub nationality: String,
    pub team: String,
    pub current_points: u32,
}

impl StandingsEntry {
    pub fn new(position: u32, driver_name: &str, team: &str, current_points: u32) -> Self {
        Self {
            position,
            driver_name: s!(driver_name),
            nationality: s!(),
            team: s!(team),
            current_points,
        }
    }

    pub fn with_nationality(mut self, nationality: &str) -> Self {
        self.nationality = s!(nationality);
        self
    }

    /// Build from a scraped row shaped `[Pos, Driver, Nationality, Team, Pts]`.
    /// `row` is the 0-based row index, used only for error reporting.
    ///
    /// Position, driver and points are required; nationality and team may be
    /// blank.
    pub fn from_row(row: usize, cells: &[String]) -> Result<Self, ProjectionError> {
        let cell = |ix: usize, field: &'static str| -> Result<&str, ProjectionError> {
            match cells.get(ix).map(|c| c.trim()) {
                Some(v) if !v.is_empty() => Ok(v),
                _ => Err(ProjectionError::MissingField { row, field }),
            }
        };
        let number = |ix: usize, field: &'static str| -> Result<u32, ProjectionError> {
            let raw = cell(ix, field)?;
            raw.parse::<u32>().map_err(|_| ProjectionError::InvalidNumber {
                row,
                field,
                value: s!(raw),
            })
        };

        Ok(Self {
            position: number(0, "position")?,
            driver_name: s!(cell(1, "driver")?),
            nationality: cells.get(2).map(|c| c.trim().to_string()).unwrap_or_default(),
            team: cells.get(3).map(|c| c.trim().to_string()).unwrap_or_default(),
            current_points: number(4, "points")?,
        })
    }
}

/// Kind of on-track session. Decides which points schedule applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SessionType {
    Race,
    Sprint,
    Qualifying,
    #[default]
    Other,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Race,
        SessionType::Sprint,
        SessionType::Qualifying,
        SessionType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SessionType::Race => "race",
            SessionType::Sprint => "sprint",
            SessionType::Qualifying => "qualifying",
            SessionType::Other => "other",
        }
    }

    /// Lenient parse: anything unrecognized is `Other`, never an error.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "race" | "r" | "grand prix" | "gp" => SessionType::Race,
            "sprint" | "s" | "sprint race" => SessionType::Sprint,
            "qualifying" | "q" | "quali" => SessionType::Qualifying,
            _ => SessionType::Other,
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for SessionType {
    fn from(s: &str) -> Self {
        SessionType::from_label(s)
    }
}

/// A standings entry after projection. Built once per call, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectedEntry {
    pub original_position: u32,
    pub new_position: u32,
    pub driver_name: String,
    pub nationality: String,
    pub team: String,
    pub current_points: u32,
    pub session_points: u32,
    pub projected_total: u32,
    /// `original_position - new_position`; positive means places gained.
    pub position_delta: i32,
}

impl ProjectedEntry {
    /// `projected_total` is computed (and overflow-checked) by the caller.
    pub(crate) fn build(
        entry: &StandingsEntry,
        session_points: u32,
        projected_total: u32,
        new_position: u32,
    ) -> Self {
        Self {
            original_position: entry.position,
            new_position,
            driver_name: entry.driver_name.clone(),
            nationality: entry.nationality.clone(),
            team: entry.team.clone(),
            current_points: entry.current_points,
            session_points,
            projected_total,
            position_delta: entry.position as i32 - new_position as i32,
        }
    }
}
