// src/store.rs
// Last fetched copy of each page, kept under `.store/pages/`.
// Only the ingest layer reads or writes these; the engine never sees them.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::{SNAPSHOT_SUBDIR, STORE_DIR};
use crate::config::options::Location;
use crate::core::sanitize::sanitize_filename;

pub const STANDINGS_SNAPSHOT: &str = "standings";
pub const ORDER_SNAPSHOT: &str = "running_order";

pub fn snapshot_dir() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SNAPSHOT_SUBDIR)
}

pub fn snapshot_path(name: &str) -> PathBuf {
    snapshot_path_in(&snapshot_dir(), name)
}

fn snapshot_path_in(dir: &Path, name: &str) -> PathBuf {
    dir.join(join!(&sanitize_filename(name, "page"), ".html"))
}

/// Overwrite the snapshot called `name`. Returns the written path.
pub fn save_snapshot(name: &str, html: &str) -> io::Result<PathBuf> {
    save_snapshot_in(&snapshot_dir(), name, html)
}

pub fn save_snapshot_in(dir: &Path, name: &str, html: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = snapshot_path_in(dir, name);
    fs::write(&path, html)?;
    Ok(path)
}

/// Locations of the stored snapshots, for running without network.
/// The standings snapshot must exist; the order snapshot is optional.
pub fn offline_locations() -> Option<(Location, Option<Location>)> {
    let standings = snapshot_path(STANDINGS_SNAPSHOT);
    if !standings.is_file() {
        return None;
    }
    let order = snapshot_path(ORDER_SNAPSHOT);
    Some((
        Location::File(standings),
        order.is_file().then_some(Location::File(order)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_round_trip_in_temp_dir() {
        let dir = std::env::temp_dir().join("f1_live_store_test");
        let p = save_snapshot_in(&dir, "running order", "<html></html>").unwrap();
        assert!(p.ends_with("running_order.html"));
        assert_eq!(fs::read_to_string(&p).unwrap(), "<html></html>");
    }
}
