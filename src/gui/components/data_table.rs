// src/gui/components/data_table.rs
//
// Draws the projected standings. Purely a view over `App::view`.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::app::App,
    table::{HEADERS, NO_DATA, TEXT_COLUMNS},
};

const WIDTHS: [f32; 8] = [40.0, 180.0, 110.0, 190.0, 50.0, 60.0, 80.0, 40.0];
const DELTA_COL: usize = 7;

fn delta_color(cell: &str) -> Option<Color32> {
    match cell.as_bytes().first() {
        Some(b'+') => Some(Color32::from_rgb(40, 160, 70)),
        Some(b'-') => Some(Color32::from_rgb(200, 60, 50)),
        _ => None,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(ds) = app.view.as_ref().filter(|d| !d.is_empty()) else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(NO_DATA).italics());
        });
        return;
    };

    let headers: Vec<String> = ds
        .headers
        .clone()
        .unwrap_or_else(|| HEADERS.iter().map(|h| s!(*h)).collect());

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0);
    for ci in 0..headers.len() {
        let w = WIDTHS.get(ci).copied().unwrap_or(80.0);
        table = table.column(Column::initial(w).at_least(20.0).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in headers.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let layout = if TEXT_COLUMNS.contains(&ci) {
                        Layout::left_to_right(Align::Center)
                    } else {
                        Layout::right_to_left(Align::Center)
                    };
                    ui.with_layout(layout, |ui| {
                        ui.label(RichText::new(h).strong());
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, ds.rows.len(), |mut row| {
                let r = &ds.rows[row.index()];
                for (ci, cell) in r.iter().enumerate() {
                    row.col(|ui| {
                        let layout = if TEXT_COLUMNS.contains(&ci) {
                            Layout::left_to_right(Align::Center)
                        } else {
                            Layout::right_to_left(Align::Center)
                        };
                        ui.with_layout(layout, |ui| {
                            let mut text = RichText::new(cell);
                            if ci == DELTA_COL {
                                if let Some(c) = delta_color(cell) {
                                    text = text.color(c);
                                }
                            }
                            ui.label(text);
                        });
                    });
                }
            });
        });
}
