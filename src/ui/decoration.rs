use bevy_egui::egui;

use crate::model::{StickerCategory, StickerDef, Template};
use crate::state::{AppState, ElementRef, StubDialog, ToolTab};
use crate::ui::canvas::render_canvas;
use crate::ui::style_panel::render_style_panel;
use crate::ui::widgets::{parse_hex_color, scaled_font, scaled_margin, tab_button};

/// The decoration screen: header actions, canvas, quick controls for the
/// selection, the style panel and the tool tabs.
pub fn render_decoration_screen(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;

    // Header: back, title, stubbed save/share
    ui.horizontal(|ui| {
        if ui.button("← Back").clicked() {
            state.close_decoration();
            return;
        }
        ui.heading("Decorate my run");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Share").clicked() {
                state.stub_dialog = Some(StubDialog::Shared);
            }
            if ui.button("Save").clicked() {
                state.stub_dialog = Some(StubDialog::Saved);
            }
        });
    });
    if state.scene.is_none() {
        // back was pressed this frame
        return;
    }
    ui.separator();

    render_canvas(ui, state);
    ui.add_space(scaled_margin(8.0, ui_scale));

    render_quick_controls(ui, state);

    if state.show_style_panel {
        render_style_panel(ui, state);
        ui.add_space(scaled_margin(8.0, ui_scale));
    }

    render_tool_tabs(ui, state);
}

/// Strip shown while something is selected: label, delete (stickers only)
/// and the style panel toggle
fn render_quick_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let (selection, label) = {
        let Some(scene) = state.scene.as_ref() else {
            return;
        };
        let label = match scene.selection() {
            Some(ElementRef::Stat(index)) => state
                .running_summary()
                .map(|summary| summary.stat_texts()[index].clone()),
            Some(ElementRef::Sticker(_)) => scene
                .selected_sticker()
                .map(|sticker| sticker.def.content.replace('\n', " ")),
            None => None,
        };
        (scene.selection(), label)
    };
    let Some(selection) = selection else {
        return;
    };

    ui.group(|ui| {
        ui.horizontal(|ui| {
            let kind = match selection {
                ElementRef::Stat(_) => "Text selected",
                ElementRef::Sticker(_) => "Sticker selected",
            };
            ui.strong(kind);
            if let Some(label) = label {
                ui.weak(format!("\"{label}\""));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = if state.show_style_panel { "Hide" } else { "Edit" };
                if ui.button(toggle).clicked() {
                    state.show_style_panel = !state.show_style_panel;
                }
                if matches!(selection, ElementRef::Sticker(_)) && ui.button("Delete").clicked() {
                    if let Some(scene) = state.scene.as_mut() {
                        scene.delete_selected_sticker();
                    }
                    state.show_style_panel = false;
                }
            });
        });
    });
}

fn render_tool_tabs(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    ui.horizontal(|ui| {
        for tab in ToolTab::ALL {
            if tab_button(ui, state.tool_tab == tab, tab.label(), ui_scale).clicked() {
                state.tool_tab = tab;
            }
        }
    });
    ui.separator();

    match state.tool_tab {
        ToolTab::Background => render_background_tab(ui, state),
        ToolTab::Templates => render_template_tab(ui, state),
        ToolTab::Stickers => render_sticker_tab(ui, state),
    }
}

fn render_background_tab(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    ui.label("Preset backgrounds");
    ui.add_space(scaled_margin(4.0, ui_scale));

    let presets = state.background_presets.clone();
    let active = state
        .scene
        .as_ref()
        .map(|scene| scene.background.clone())
        .unwrap_or_default();

    egui::Grid::new("background_presets")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 8.0))
        .show(ui, |ui| {
            for (index, preset) in presets.iter().enumerate() {
                let size = egui::vec2(140.0, 80.0);
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                if ui.is_rect_visible(rect) {
                    ui.painter()
                        .rect_filled(rect, 6.0, parse_hex_color(&preset.tint));
                    let stroke = if preset.uri == active {
                        egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246))
                    } else {
                        egui::Stroke::new(1.0, egui::Color32::from_gray(90))
                    };
                    ui.painter().rect_stroke(rect, 6.0, stroke);
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        &preset.name,
                        egui::FontId::proportional(scaled_font(13.0, ui_scale)),
                        egui::Color32::WHITE,
                    );
                }
                if response.clicked() {
                    if let Some(scene) = state.scene.as_mut() {
                        scene.set_background(preset.uri.clone());
                    }
                }
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

fn render_template_tab(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    ui.label("Pick a template");
    ui.add_space(scaled_margin(4.0, ui_scale));

    let templates: Vec<Template> = state.template_catalog.clone();
    let mut applied: Option<Template> = None;

    egui::Grid::new("template_catalog")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 8.0))
        .show(ui, |ui| {
            for (index, template) in templates.iter().enumerate() {
                let size = egui::vec2(140.0, 96.0);
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                if ui.is_rect_visible(rect) {
                    let fill = if response.hovered() {
                        egui::Color32::from_rgb(35, 35, 45)
                    } else {
                        egui::Color32::from_rgb(20, 20, 26)
                    };
                    ui.painter().rect_filled(rect, 8.0, fill);
                    ui.painter().text(
                        rect.center() - egui::vec2(0.0, 12.0),
                        egui::Align2::CENTER_CENTER,
                        &template.preview,
                        egui::FontId::proportional(scaled_font(22.0, ui_scale)),
                        egui::Color32::WHITE,
                    );
                    ui.painter().text(
                        rect.center() + egui::vec2(0.0, 24.0),
                        egui::Align2::CENTER_CENTER,
                        &template.name,
                        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
                        egui::Color32::from_gray(200),
                    );
                }
                if response.clicked() {
                    applied = Some(template.clone());
                }
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    if let Some(template) = applied {
        if let Some(scene) = state.scene.as_mut() {
            scene.apply_template(&template);
        }
        // the bulk replace clears the selection, so the panel closes too
        state.show_style_panel = false;
    }
}

fn render_sticker_tab(ui: &mut egui::Ui, state: &mut AppState) {
    let ui_scale = state.config.ui_scale;
    let catalog: Vec<StickerDef> = state.sticker_catalog.clone();
    let mut added: Option<StickerDef> = None;

    for (category, columns) in [
        (StickerCategory::Text, 3),
        (StickerCategory::Distance, 5),
        (StickerCategory::Icon, 6),
    ] {
        ui.label(category.heading());
        ui.add_space(scaled_margin(2.0, ui_scale));
        egui::Grid::new(category.heading())
            .num_columns(columns)
            .spacing(egui::vec2(6.0, 6.0))
            .show(ui, |ui| {
                let entries: Vec<&StickerDef> = catalog
                    .iter()
                    .filter(|def| def.category == category)
                    .collect();
                for (index, def) in entries.iter().enumerate() {
                    if sticker_cell(ui, def, category, ui_scale).clicked() {
                        added = Some((*def).clone());
                    }
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(scaled_margin(6.0, ui_scale));
    }

    if let Some(def) = added {
        if let Some(scene) = state.scene.as_mut() {
            scene.add_sticker(&def);
        }
        state.set_status(format!("Added sticker \"{}\"", def.id));
    }
}

/// One catalog cell: a black square (or circle for distance badges) with
/// the sticker content as its preview
fn sticker_cell(
    ui: &mut egui::Ui,
    def: &StickerDef,
    category: StickerCategory,
    ui_scale: f32,
) -> egui::Response {
    let side = match category {
        StickerCategory::Text => 64.0,
        StickerCategory::Distance => 48.0,
        StickerCategory::Icon => 40.0,
    };
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let fill = if response.hovered() {
            egui::Color32::from_gray(40)
        } else {
            egui::Color32::BLACK
        };
        if category == StickerCategory::Distance {
            ui.painter().circle_filled(rect.center(), side / 2.0, fill);
            ui.painter().circle_stroke(
                rect.center(),
                side / 2.0 - 1.0,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        } else {
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.painter()
                .rect_stroke(rect, 4.0, egui::Stroke::new(1.0, egui::Color32::from_gray(90)));
        }
        let font_size = if category == StickerCategory::Icon {
            scaled_font(18.0, ui_scale)
        } else {
            scaled_font(10.0, ui_scale)
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &def.content,
            egui::FontId::proportional(font_size),
            egui::Color32::WHITE,
        );
    }
    response
}
