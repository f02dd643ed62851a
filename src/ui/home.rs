use bevy_egui::egui;

use crate::model::{
    format_duration, format_km, monthly_stats, weekly_stats, DailySummary, RunRecord,
};
use crate::state::{ActiveScreen, AppState};
use crate::ui::widgets::{scaled_margin, session_badge};

const PAST_DAYS_COLLAPSED: usize = 6;

/// Home: latest day, weekly/monthly stat cards and the past-days list
pub fn render_home_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("RunShot");
            ui.weak("My running records");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⤓ Import").clicked() {
                state.open_import();
            }
            if ui.button("+ Add").clicked() {
                state.open_add_record();
            }
            ui.weak(format!("{} sessions", state.records.len()));
        });
    });
    ui.separator();

    let summaries = state.daily_summaries();
    let mut open_record: Option<String> = None;

    if let Some(latest) = summaries.first() {
        ui.label("Latest day");
        day_card(ui, latest, ui_scale, true, &mut open_record);
        ui.add_space(scaled_margin(8.0, ui_scale));
    }

    // Stat cards open the weekly/monthly screens
    let weekly = weekly_stats(&state.records);
    let monthly = monthly_stats(&state.records);
    ui.columns(2, |columns| {
        let weekly_clicked = stat_card(
            &mut columns[0],
            "This week",
            &[
                format!("{} km", format_km(weekly.total_distance_km)),
                format!("{} runs", weekly.total_runs),
                format!("{} h", weekly.total_time_h),
            ],
        );
        if weekly_clicked {
            state.screen = ActiveScreen::WeeklyDetail;
        }
        let monthly_clicked = stat_card(
            &mut columns[1],
            "This month",
            &[
                format!("{} km", format_km(monthly.total_distance_km)),
                format!("{} runs", monthly.total_runs),
                format!("{} active days", monthly.active_days),
            ],
        );
        if monthly_clicked {
            state.open_calendar();
        }
    });
    ui.add_space(scaled_margin(8.0, ui_scale));

    // Past days
    let past = &summaries[summaries.len().min(1)..];
    if !past.is_empty() {
        ui.horizontal(|ui| {
            ui.label("Past records");
            if past.len() > PAST_DAYS_COLLAPSED {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if state.show_all_records {
                        "Show less"
                    } else {
                        "Show all"
                    };
                    if ui.small_button(label).clicked() {
                        state.show_all_records = !state.show_all_records;
                    }
                });
            }
        });
        let visible = if state.show_all_records {
            past
        } else {
            &past[..past.len().min(PAST_DAYS_COLLAPSED)]
        };
        for day in visible {
            day_card(ui, day, ui_scale, false, &mut open_record);
        }
    }

    if let Some(id) = open_record {
        state.open_decoration(&id);
    }
}

/// One day's card: date, totals, and a row per session. Tapping a session
/// opens the decoration screen for it.
fn day_card(
    ui: &mut egui::Ui,
    day: &DailySummary,
    ui_scale: f32,
    expanded: bool,
    open_record: &mut Option<String>,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.strong(day.date.format("%b %e, %Y").to_string());
            ui.weak(format!(
                "{} km · {} · {} kcal",
                format_km(day.total_distance_km),
                format_duration(day.total_duration_min),
                day.total_calories
            ));
            if day.session_count > 1 {
                ui.weak(format!("{} sessions", day.session_count));
            }
        });
        for session in &day.sessions {
            session_row(ui, session, ui_scale, expanded, open_record);
        }
    });
}

fn session_row(
    ui: &mut egui::Ui,
    session: &RunRecord,
    ui_scale: f32,
    expanded: bool,
    open_record: &mut Option<String>,
) {
    ui.horizontal(|ui| {
        session_badge(ui, session.session_type, ui_scale);
        let title = session
            .title
            .clone()
            .unwrap_or_else(|| format!("{} run", session.session_type.label()));
        let text = format!(
            "{}  ·  {} km · {} · {} pace",
            title,
            format_km(session.distance_km),
            format_duration(session.duration_min),
            session.average_pace
        );
        if ui.link(text).clicked() {
            *open_record = Some(session.id.clone());
        }
        if let Some(number) = session.session_number {
            ui.weak(format!("set {number}"));
        }
    });
    if expanded {
        ui.horizontal(|ui| {
            ui.add_space(scaled_margin(12.0, ui_scale));
            ui.weak(format!("{} – {}", session.start_time, session.end_time));
            if let Some(location) = &session.location {
                ui.weak(location);
            }
            if let Some(hr) = session.average_heart_rate {
                ui.weak(format!("{hr} bpm"));
            }
            if let Some(cadence) = session.average_cadence {
                ui.weak(format!("{cadence} spm"));
            }
        });
        if let Some(comment) = &session.comment {
            ui.horizontal(|ui| {
                ui.add_space(scaled_margin(12.0, ui_scale));
                ui.weak(comment);
            });
        }
    }
}

/// Clickable card with a title and a few stat lines; returns clicked
fn stat_card(ui: &mut egui::Ui, title: &str, lines: &[String]) -> bool {
    let response = ui
        .group(|ui| {
            ui.set_width(ui.available_width());
            ui.strong(title);
            for line in lines {
                ui.label(line);
            }
            ui.weak("View details →");
        })
        .response;
    response.interact(egui::Sense::click()).clicked()
}
