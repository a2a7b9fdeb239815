// src/ingest/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::standings::ProjectionError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{page} table not found on page")]
    TableNotFound { page: &'static str },

    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Contract(#[from] ProjectionError),
}
