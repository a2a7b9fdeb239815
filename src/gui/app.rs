// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::SETTINGS_FILE, settings, state::AppState},
    runner::Report,
    table::DataSet,
};

use super::{actions, components};

/// Result slot a refresh worker fills in; the UI thread takes it.
pub type Pending = Arc<Mutex<Option<Result<Report, String>>>>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let opts = settings::load(&PathBuf::from(SETTINGS_FILE));
    eframe::run_native(
        "F1 Live Standings",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(opts))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (mapped to ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last good refresh and its display table
    pub report: Option<Report>,
    pub view: Option<DataSet>,

    // workers write here
    pub status: Arc<Mutex<String>>,
    pub pending: Pending,
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.path_text();
        logf!(
            "Init: season={} demo={} standings={:?} order={:?}",
            state.options.fetch.season,
            state.options.fetch.demo,
            state.options.fetch.standings,
            state.options.fetch.order,
        );
        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            report: None,
            view: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            pending: Arc::new(Mutex::new(None)),
            running: false,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Take a finished refresh, if any.
    fn poll_pending(&mut self) {
        let done = match self.pending.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        let Some(res) = done else { return };
        self.running = false;
        match res {
            Ok(report) => {
                self.status(report.summary());
                self.view = report.dataset();
                self.report = Some(report);
            }
            Err(e) => {
                // keep the previous table on screen
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            if components::controls::draw(ui, self) {
                actions::refresh(self, ctx);
            }
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running {
                    ui.spinner();
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);
            ui.separator();
            components::data_table::draw(ui, self);
        });
    }
}
