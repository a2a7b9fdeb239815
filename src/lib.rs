// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod ingest;
pub mod specs;
pub mod standings;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod store;
pub mod table;
