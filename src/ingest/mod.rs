// src/ingest/mod.rs
//! Ingestion: where standings and running orders come from.
//!
//! Sources hand the projection engine well-formed inputs or an explicit
//! `IngestError`. They never print, and never swallow a failed fetch.

mod demo;
mod error;
mod pages;

pub use demo::DemoSource;
pub use error::IngestError;
pub use pages::PageSource;

use crate::specs::results::RunningOrder;
use crate::standings::StandingsEntry;

pub trait Source: Send + Sync {
    /// Short label for logs and status lines.
    fn name(&self) -> String;

    fn standings(&self) -> Result<Vec<StandingsEntry>, IngestError>;

    /// Live running order. An empty order (no session running) is `Ok`.
    fn running_order(&self) -> Result<RunningOrder, IngestError>;
}
