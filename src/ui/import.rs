use bevy_egui::egui;

use crate::model::{format_duration, format_km};
use crate::state::AppState;
use crate::ui::widgets::{scaled_margin, session_badge};

/// Health-app import: a simulated connect with a fixed delay, then a list
/// of fetched records to pick from. No real network is involved.
pub fn render_import_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.go_home();
        }
        ui.heading("Import records");
    });
    ui.separator();

    if state.import_available.is_empty() {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label("Connect your health app to pull in recent runs.");
            ui.add_space(scaled_margin(4.0, ui_scale));
            if state.import_is_connecting() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Connecting…");
                });
                // keep repainting while the simulated connect runs
                ui.ctx().request_repaint();
            } else if ui.button("Connect to health app").clicked() {
                state.begin_import_connect();
            }
        });
        return;
    }

    ui.label(format!(
        "Found {} records. Pick the ones to import:",
        state.import_available.len()
    ));
    ui.add_space(scaled_margin(4.0, ui_scale));

    let records = state.import_available.clone();
    for record in &records {
        let mut selected = state.import_selected.iter().any(|id| *id == record.id);
        ui.horizontal(|ui| {
            if ui.checkbox(&mut selected, "").clicked() {
                state.toggle_import_selection(&record.id);
            }
            session_badge(ui, record.session_type, ui_scale);
            let title = record
                .title
                .clone()
                .unwrap_or_else(|| format!("{} run", record.session_type.label()));
            ui.label(format!(
                "{}  ·  {}  ·  {} km · {}",
                record.date.format("%b %e"),
                title,
                format_km(record.distance_km),
                format_duration(record.duration_min)
            ));
        });
    }

    ui.add_space(scaled_margin(8.0, ui_scale));
    let count = state.import_selected.len();
    if ui
        .add_enabled(count > 0, egui::Button::new(format!("Import {count} records")))
        .clicked()
    {
        state.finish_import();
    }
}
