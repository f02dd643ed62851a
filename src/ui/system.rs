use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::state::{ActiveScreen, AppState, STATUS_MESSAGE_TTL};
use crate::ui::add_record::render_add_record_screen;
use crate::ui::decoration::render_decoration_screen;
use crate::ui::dialogs::render_dialogs;
use crate::ui::home::render_home_screen;
use crate::ui::import::render_import_screen;
use crate::ui::monthly::render_monthly_screen;
use crate::ui::weekly::render_weekly_screen;
use crate::ui::widgets::{scaled_font, scaled_margin};

pub fn ui_system(mut contexts: EguiContexts, mut state: ResMut<AppState>) {
    let ctx = contexts.ctx_mut();

    // Apply UI scale to global text styles and spacing
    let ui_scale = state.config.ui_scale;
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(scaled_font(20.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
    );
    style.spacing.icon_width = scaled_margin(14.0, ui_scale);
    style.spacing.icon_spacing = scaled_margin(4.0, ui_scale);
    style.wrap_mode = Some(egui::TextWrapMode::Extend);
    ctx.set_style(style);

    // Global keyboard shortcuts for UI scale (Ctrl+Plus/Minus/0)
    let increase_pressed = ctx.input_mut(|i| {
        i.modifiers.command
            && (i.consume_key(egui::Modifiers::COMMAND, egui::Key::Plus)
                || i.consume_key(
                    egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
                    egui::Key::Equals,
                ))
    });
    if increase_pressed && state.config.ui_scale < 2.0 {
        state.config.ui_scale = (state.config.ui_scale + 0.25).min(2.0);
        state.config.save();
    }
    let decrease_pressed =
        ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Minus));
    if decrease_pressed && state.config.ui_scale > 0.75 {
        state.config.ui_scale = (state.config.ui_scale - 0.25).max(0.75);
        state.config.save();
    }
    let reset_pressed =
        ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Num0));
    if reset_pressed && state.config.ui_scale != 1.0 {
        state.config.ui_scale = 1.0;
        state.config.save();
    }

    // Advance the simulated health-app connect, if one is running
    state.poll_import();

    // Dialogs (rendered first so they appear on top)
    render_dialogs(ctx, &mut state);

    // Status bar with the latest message, fading out after a few seconds
    let status = state.status_message.clone().and_then(|(message, when)| {
        (when.elapsed() < STATUS_MESSAGE_TTL).then_some(message)
    });
    if let Some(message) = status {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(message);
        });
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                match state.screen {
                    ActiveScreen::Home => render_home_screen(ui, &mut state),
                    ActiveScreen::Decoration => render_decoration_screen(ui, &mut state),
                    ActiveScreen::WeeklyDetail => render_weekly_screen(ui, &mut state),
                    ActiveScreen::MonthlyCalendar => render_monthly_screen(ui, &mut state),
                    ActiveScreen::AddRecord => render_add_record_screen(ui, &mut state),
                    ActiveScreen::ImportRecord => render_import_screen(ui, &mut state),
                }
            });
    });
}
