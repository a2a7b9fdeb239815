// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Format:");
        let prev = export.format;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        if export.format != prev {
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty && export.name_follows_format() {
                app.out_path_text = export.path_text();
            }
        }

        let before = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        let resp = ui.add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(360.0));
        if resp.changed() {
            app.out_path_dirty = true;
        }
        if resp.lost_focus() && app.out_path_dirty {
            app.state.options.export.set_path(&app.out_path_text);
            app.out_path_text = app.state.options.export.path_text();
            app.out_path_dirty = false;
            logf!("UI: Out path → {}", app.out_path_text);
        }

        let can_export = app.view.is_some() && !app.running;
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
