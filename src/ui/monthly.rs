use bevy_egui::egui;
use chrono::NaiveDate;

use crate::model::{
    format_duration, format_km, month_name, month_weeks, next_month, prev_month, DailySummary,
    WEEKDAY_HEADERS,
};
use crate::state::AppState;
use crate::ui::widgets::{scaled_font, scaled_margin, session_badge};

/// Monthly calendar: a month grid with run days marked, plus the selected
/// day's sessions underneath
pub fn render_monthly_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.go_home();
        }
        ui.heading("Monthly calendar");
    });
    ui.separator();

    let Some((year, month)) = state.calendar_month else {
        ui.label("No records yet");
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("◀").clicked() {
            state.calendar_month = Some(prev_month(year, month));
            state.calendar_selected_day = None;
        }
        ui.strong(format!("{} {year}", month_name(month)));
        if ui.button("▶").clicked() {
            state.calendar_month = Some(next_month(year, month));
            state.calendar_selected_day = None;
        }
    });
    ui.add_space(scaled_margin(4.0, ui_scale));

    let summaries = state.daily_summaries();
    let day_summary = |date: NaiveDate| summaries.iter().find(|s| s.date == date);

    let cell = egui::vec2(
        (ui.available_width() / 7.0 - 4.0).max(32.0),
        scaled_margin(44.0, ui_scale),
    );

    egui::Grid::new("month_grid")
        .num_columns(7)
        .spacing(egui::vec2(4.0, 4.0))
        .show(ui, |ui| {
            for header in WEEKDAY_HEADERS {
                ui.label(header);
            }
            ui.end_row();

            for week in month_weeks(year, month) {
                for slot in week {
                    match slot {
                        Some(date) => {
                            let summary = day_summary(date);
                            if calendar_cell(ui, date, summary, state, cell, ui_scale) {
                                state.calendar_selected_day = Some(date);
                            }
                        }
                        None => {
                            ui.allocate_exact_size(cell, egui::Sense::hover());
                        }
                    }
                }
                ui.end_row();
            }
        });
    ui.add_space(scaled_margin(8.0, ui_scale));

    // Selected day details
    let mut open_record: Option<String> = None;
    if let Some(date) = state.calendar_selected_day {
        match day_summary(date) {
            Some(day) => selected_day_details(ui, day, ui_scale, &mut open_record),
            None => {
                ui.weak(format!("No runs on {}", date.format("%b %e")));
            }
        }
    }
    if let Some(id) = open_record {
        state.open_decoration(&id);
    }
}

fn calendar_cell(
    ui: &mut egui::Ui,
    date: NaiveDate,
    summary: Option<&DailySummary>,
    state: &AppState,
    size: egui::Vec2,
    ui_scale: f32,
) -> bool {
    use chrono::Datelike;

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let selected = state.calendar_selected_day == Some(date);
        let fill = if selected {
            egui::Color32::from_rgb(59, 130, 246)
        } else if summary.is_some() {
            egui::Color32::from_rgb(34, 60, 90)
        } else {
            egui::Color32::from_gray(32)
        };
        ui.painter().rect_filled(rect, 6.0, fill);
        ui.painter().text(
            rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            date.day().to_string(),
            egui::FontId::proportional(scaled_font(12.0, ui_scale)),
            egui::Color32::WHITE,
        );
        if let Some(day) = summary {
            ui.painter().text(
                rect.center_bottom() - egui::vec2(0.0, 6.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{}km", format_km(day.total_distance_km)),
                egui::FontId::proportional(scaled_font(11.0, ui_scale)),
                egui::Color32::from_rgb(134, 239, 172),
            );
        }
    }
    response.clicked()
}

fn selected_day_details(
    ui: &mut egui::Ui,
    day: &DailySummary,
    ui_scale: f32,
    open_record: &mut Option<String>,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.strong(day.date.format("%A, %b %e").to_string());
            ui.weak(format!(
                "{} km · {} · {} sessions",
                format_km(day.total_distance_km),
                format_duration(day.total_duration_min),
                day.session_count
            ));
        });
        for session in &day.sessions {
            ui.horizontal(|ui| {
                session_badge(ui, session.session_type, ui_scale);
                let title = session
                    .title
                    .clone()
                    .unwrap_or_else(|| format!("{} run", session.session_type.label()));
                if ui
                    .link(format!(
                        "{}  ·  {} km · {} pace",
                        title,
                        format_km(session.distance_km),
                        session.average_pace
                    ))
                    .clicked()
                {
                    *open_record = Some(session.id.clone());
                }
            });
        }
    });
}
