// src/specs/mod.rs
//! # Page specs
//!
//! One module per page shape. Each spec knows *where the data lives in the
//! HTML* and turns a document string into typed rows. Nothing here fetches,
//! caches or logs; the ingest layer decides where documents come from.
//!
//! ## Conventions
//! - Tables are found by class (`f1-table`) and read header-first: columns
//!   are located by their `<th>` text, with positional fallbacks.
//! - Cell text is tag-stripped, entity-decoded and whitespace-collapsed.
//! - Driver cells drop their trailing three-letter code.
//! - A table that cannot be found is an error; an empty table is not.
//!
//! ## Specs
//! - `standings` – championship driver standings.
//! - `results`   – a session classification / running order.
//! - `session`   – session-type detection from URL and title.
pub mod results;
pub mod session;
pub mod standings;

/// Class shared by the results tables on the site.
pub const TABLE_CLASS: &str = "f1-table";
