// src/gui/components/controls.rs
//
// Source + session controls. Returns true when a refresh was requested.

use eframe::egui;

use crate::{
    config::options::standings_url,
    gui::{actions, app::App},
    standings::SessionType,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> bool {
    let mut refresh = false;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let fetch = &mut app.state.options.fetch;

        ui.label("Season:");
        let before = fetch.season;
        ui.add(egui::DragValue::new(&mut fetch.season).range(1950..=2100));
        if fetch.season != before {
            logf!("UI: Season → {}", fetch.season);
        }

        ui.separator();
        ui.label("Session:");
        let before = fetch.session;
        let current = fetch.session.map(|s| s.label()).unwrap_or("auto");
        egui::ComboBox::from_id_salt("session")
            .selected_text(current)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut fetch.session, None, "auto");
                for s in SessionType::ALL {
                    ui.selectable_value(&mut fetch.session, Some(s), s.label());
                }
            });
        if fetch.session != before {
            logf!("UI: Session override → {:?}", fetch.session);
        }

        ui.separator();
        ui.checkbox(&mut fetch.demo, "Demo data");
        ui.checkbox(&mut fetch.strict_names, "Exact names only");
    });

    ui.add_enabled_ui(!app.state.options.fetch.demo, |ui| {
        egui::Grid::new("locations").num_columns(2).show(ui, |ui| {
            ui.label("Standings:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.standings_text)
                    .hint_text(standings_url(app.state.options.fetch.season))
                    .desired_width(520.0),
            );
            ui.end_row();

            ui.label("Running order:");
            ui.add(
                egui::TextEdit::singleline(&mut app.state.gui.order_text)
                    .hint_text("results page URL, saved .html, or text file")
                    .desired_width(520.0),
            );
            ui.end_row();
        });
    });

    ui.horizontal(|ui| {
        let label = if app.running { "Refreshing…" } else { "Refresh" };
        if ui.add_enabled(!app.running, egui::Button::new(label)).clicked() {
            refresh = true;
        }
        if ui.add_enabled(!app.running, egui::Button::new("Use stored pages")).clicked() {
            actions::use_offline(app);
        }
        if ui.button("Save settings").clicked() {
            actions::save_settings(app);
        }
    });
    ui.add_space(4.0);

    refresh
}
