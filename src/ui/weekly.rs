use bevy_egui::egui;

use crate::model::{format_duration, format_km, weekly_stats, weekly_summaries};
use crate::state::AppState;
use crate::ui::widgets::{scaled_margin, session_badge};

/// Weekly detail: the 7-day window's totals and each day's sessions
pub fn render_weekly_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.go_home();
        }
        ui.heading("This week");
    });
    ui.separator();

    let stats = weekly_stats(&state.records);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(format!("{} km", format_km(stats.total_distance_km)));
            ui.label(format!("{} runs", stats.total_runs));
            ui.label(format!("{} h total", stats.total_time_h));
            ui.label(format!("{} active days", stats.active_days));
        });
        ui.weak(format!(
            "avg {} km per run",
            format_km((stats.average_distance_km * 10.0).round() / 10.0)
        ));
    });
    ui.add_space(scaled_margin(8.0, ui_scale));

    let mut open_record: Option<String> = None;
    for day in weekly_summaries(&state.records) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(day.date.format("%A, %b %e").to_string());
                ui.weak(format!(
                    "{} km · {}",
                    format_km(day.total_distance_km),
                    format_duration(day.total_duration_min)
                ));
            });
            for session in &day.sessions {
                ui.horizontal(|ui| {
                    session_badge(ui, session.session_type, ui_scale);
                    let title = session
                        .title
                        .clone()
                        .unwrap_or_else(|| format!("{} run", session.session_type.label()));
                    let text = format!(
                        "{}  ·  {} km · {} pace",
                        title,
                        format_km(session.distance_km),
                        session.average_pace
                    );
                    if ui.link(text).clicked() {
                        open_record = Some(session.id.clone());
                    }
                });
            }
        });
    }

    if let Some(id) = open_record {
        state.open_decoration(&id);
    }
}
