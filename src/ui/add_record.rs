use bevy_egui::egui;

use crate::model::SessionType;
use crate::state::AppState;
use crate::ui::widgets::scaled_margin;

/// Manual record entry form. Buffers live on AppState; save validates and
/// appends the record in memory.
pub fn render_add_record_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.go_home();
        }
        ui.heading("Add record");
    });
    ui.separator();

    egui::Grid::new("record_form")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 6.0))
        .show(ui, |ui| {
            ui.label("Date (YYYY-MM-DD)");
            ui.text_edit_singleline(&mut state.record_form.date);
            ui.end_row();

            ui.label("Session type");
            egui::ComboBox::from_id_salt("session_type")
                .selected_text(state.record_form.session_type.label())
                .show_ui(ui, |ui| {
                    for session_type in SessionType::ALL {
                        ui.selectable_value(
                            &mut state.record_form.session_type,
                            session_type,
                            session_type.label(),
                        );
                    }
                });
            ui.end_row();

            ui.label("Start time");
            ui.text_edit_singleline(&mut state.record_form.start_time);
            ui.end_row();

            ui.label("End time");
            ui.text_edit_singleline(&mut state.record_form.end_time);
            ui.end_row();

            ui.label("Distance (km)");
            ui.text_edit_singleline(&mut state.record_form.distance_km);
            ui.end_row();

            ui.label("Duration (min)");
            ui.text_edit_singleline(&mut state.record_form.duration_min);
            ui.end_row();

            ui.label("Average pace");
            ui.text_edit_singleline(&mut state.record_form.average_pace);
            ui.end_row();

            ui.label("Title");
            ui.text_edit_singleline(&mut state.record_form.title);
            ui.end_row();

            ui.label("Location");
            ui.text_edit_singleline(&mut state.record_form.location);
            ui.end_row();

            ui.label("Comment");
            ui.text_edit_multiline(&mut state.record_form.comment);
            ui.end_row();
        });

    ui.add_space(scaled_margin(8.0, ui_scale));
    ui.horizontal(|ui| {
        if ui.button("Save record").clicked() {
            match state.save_record_form() {
                Ok(()) => state.set_status("Record added"),
                Err(message) => state.set_status(message),
            }
        }
        if ui.button("Cancel").clicked() {
            state.go_home();
        }
    });
}
