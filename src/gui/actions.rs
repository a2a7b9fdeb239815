// src/gui/actions.rs
use std::{
    panic::{self, AssertUnwindSafe},
    path::PathBuf,
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::SETTINGS_FILE, options::Location, settings},
    file,
    gui::{app::App, progress::GuiProgress},
    runner::{self, Report},
    store,
};

fn location_from_text(text: &str) -> Option<Location> {
    let t = text.trim();
    (!t.is_empty()).then(|| Location::parse(t))
}

/// Mirror the GUI text fields into the fetch options.
pub fn sync_locations(app: &mut App) {
    let fetch = &mut app.state.options.fetch;
    fetch.standings = location_from_text(&app.state.gui.standings_text);
    fetch.order = location_from_text(&app.state.gui.order_text);
}

/// Start a refresh on a worker thread. No-op while one is in flight.
pub fn refresh(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    sync_locations(app);
    let fetch = app.state.options.fetch.clone();
    logf!("Refresh: begin season={} session={:?} demo={}", fetch.season, fetch.session, fetch.demo);

    app.running = true;
    app.status("Refreshing…");

    let status = app.status.clone();
    let pending = app.pending.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        let res = guarded(|| {
            let mut prog = GuiProgress::new(status);
            runner::run(&fetch, Some(&mut prog)).map_err(|e| {
                loge!("Refresh: error: {e}");
                e.to_string()
            })
        });
        if let Ok(mut slot) = pending.lock() {
            *slot = Some(res);
        }
        ctx.request_repaint();
    });
}

/// Run a refresh job with panics turned into `Err`, so the slot the UI
/// polls is always filled.
pub fn guarded<F>(job: F) -> Result<Report, String>
where
    F: FnOnce() -> Result<Report, String>,
{
    panic::catch_unwind(AssertUnwindSafe(job)).unwrap_or_else(|payload| {
        let msg = payload
            .downcast_ref::<&str>()
            .map(|m| s!(*m))
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| s!("unknown panic"));
        loge!("Refresh: worker panicked: {msg}");
        Err(format!("refresh failed: {msg}"))
    })
}

/// Point both location fields at the pages stored by the last fetch.
pub fn use_offline(app: &mut App) {
    match store::offline_locations() {
        Some((standings, order)) => {
            app.state.gui.standings_text = standings.describe();
            app.state.gui.order_text = order.map(|l| l.describe()).unwrap_or_default();
            app.state.options.fetch.demo = false;
            app.status("Using stored pages");
        }
        None => app.status(format!("No stored pages in {}", store::snapshot_dir().display())),
    }
}

pub fn export(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }
    let Some(ds) = app.view.as_ref() else {
        app.status("Nothing to export");
        return;
    };
    match file::write_export(&app.state.options.export, ds) {
        Ok(p) => {
            logf!("Export: OK rows={} → {}", ds.row_count(), p.display());
            app.status(format!("Saved {}", p.display()));
        }
        Err(e) => {
            loge!("Export: error: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}

pub fn save_settings(app: &mut App) {
    sync_locations(app);
    let path = PathBuf::from(SETTINGS_FILE);
    match settings::save(&path, &app.state.options) {
        Ok(()) => app.status(format!("Saved settings to {}", path.display())),
        Err(e) => {
            loge!("Settings: save failed: {e}");
            app.status(format!("Settings not saved: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panicking_job_still_reports() {
        let res = guarded(|| panic!("parser blew up"));
        assert_eq!(res.unwrap_err(), "refresh failed: parser blew up");
    }

    #[test]
    fn failing_job_passes_through() {
        assert_eq!(guarded(|| Err(s!("HTTP 503"))).unwrap_err(), "HTTP 503");
    }
}
