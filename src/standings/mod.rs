// src/standings/mod.rs
//! # Standings projection
//!
//! The one piece of this crate with real logic in it. Everything here is
//! pure: it takes a standings snapshot, a running order and a session type,
//! and returns the projected championship table.
//!
//! ## Typical call chain
//! ```text
//! ingest::Source → (standings, running order, session)
//!                → standings::project()
//!                → table::to_dataset() → GUI / CLI / export
//! ```
//!
//! ## Conventions
//! - Output order is display order. Frontends never re-sort.
//! - Unknown or ambiguous names earn nothing and are not errors.
//! - Empty running order or a pointless session is a pass-through.
//! - Only a broken standings set (`ProjectionError`) fails a call.

pub mod error;
pub mod matcher;
pub mod projection;
pub mod schedule;
pub mod types;

pub use error::ProjectionError;
pub use matcher::{ExactOnly, ExactThenContains, NameIndex, NameMatcher, normalize_name};
pub use projection::{project, project_with, unmatched, validate};
pub use schedule::{points_for, schedule};
pub use types::{ProjectedEntry, SessionType, StandingsEntry};
