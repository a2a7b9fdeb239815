// src/ingest/pages.rs
//! Source backed by real pages: fetched over HTTPS or read from saved files.
//! Fetched pages are kept as snapshots in the store (best effort), so the
//! last good copy can be re-read offline.

use std::{fs, path::Path};

use super::{IngestError, Source};
use crate::config::options::Location;
use crate::core::HttpClient;
use crate::specs::{self, results::RunningOrder};
use crate::standings::StandingsEntry;
use crate::store;

pub struct PageSource {
    standings: Location,
    order: Option<Location>,
    client: HttpClient,
}

impl PageSource {
    pub fn new(standings: Location, order: Option<Location>) -> Result<Self, IngestError> {
        Ok(Self { standings, order, client: HttpClient::new()? })
    }

    fn read(&self, loc: &Location, snapshot: &str) -> Result<String, IngestError> {
        match loc {
            Location::Url(url) => {
                let body = self.client.get(url)?;
                logf!("Fetch: {url} ({} bytes)", body.len());
                match store::save_snapshot(snapshot, &body) {
                    Ok(p) => logd!("Store: snapshot → {}", p.display()),
                    Err(e) => loge!("Store: snapshot {snapshot} failed: {e}"),
                }
                Ok(body)
            }
            Location::File(path) => read_file(path),
        }
    }
}

fn read_file(path: &Path) -> Result<String, IngestError> {
    fs::read_to_string(path).map_err(|source| IngestError::Io { path: path.to_path_buf(), source })
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}

impl Source for PageSource {
    fn name(&self) -> String {
        match &self.order {
            Some(o) => format!("{} + {}", self.standings.describe(), o.describe()),
            None => self.standings.describe(),
        }
    }

    fn standings(&self) -> Result<Vec<StandingsEntry>, IngestError> {
        let doc = self.read(&self.standings, store::STANDINGS_SNAPSHOT)?;
        specs::standings::parse(&doc)
    }

    fn running_order(&self) -> Result<RunningOrder, IngestError> {
        let Some(loc) = &self.order else {
            return Ok(RunningOrder::default());
        };
        let doc = self.read(loc, store::ORDER_SNAPSHOT)?;
        match loc {
            Location::File(path) if !is_html(path) => Ok(specs::results::parse_text(&doc)),
            Location::File(path) => specs::results::parse(&doc, path.to_str()),
            Location::Url(url) => specs::results::parse(&doc, Some(url)),
        }
    }
}
