use bevy_egui::egui;

use crate::model::{
    CornerRadius, Padding, StyleEdit, TextAlign, COLOR_OPTIONS, FONT_OPTIONS, FONT_SIZE_MAX,
    FONT_SIZE_MIN,
};
use crate::state::{AppState, ElementRef};
use crate::ui::widgets::{color_swatch, parse_hex_color, scaled_margin};

/// Snapshot of the selected element's editable values, read fresh every
/// frame; the panel itself holds no state.
struct SelectionView {
    font_size: f32,
    color: String,
    text_align: TextAlign,
    font_family: String,
    sticker: Option<StickerView>,
}

struct StickerView {
    background: Option<String>,
    corner_radius: Option<CornerRadius>,
    padding: Padding,
}

fn selection_view(state: &AppState) -> Option<SelectionView> {
    let scene = state.scene.as_ref()?;
    match scene.selection()? {
        ElementRef::Stat(_) => {
            let layer = scene.selected_stat()?;
            Some(SelectionView {
                font_size: layer.style.font_size,
                color: layer.style.color.clone(),
                text_align: layer.style.text_align,
                font_family: layer.style.font_family.clone(),
                sticker: None,
            })
        }
        ElementRef::Sticker(_) => {
            let sticker = scene.selected_sticker()?;
            Some(SelectionView {
                font_size: sticker.style.font_size,
                color: sticker.style.color.clone(),
                text_align: sticker.style.text_align,
                font_family: sticker.style.font_family.clone(),
                sticker: Some(StickerView {
                    background: sticker.decoration.background.clone(),
                    corner_radius: sticker.decoration.corner_radius,
                    padding: sticker.decoration.padding.unwrap_or_default(),
                }),
            })
        }
    }
}

/// Style editor bound to the current selection. Every control writes
/// straight through to the scene; there is no draft state and closing the
/// panel keeps the edits.
pub fn render_style_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(view) = selection_view(state) else {
        return;
    };
    let ui_scale = state.config.ui_scale;
    let mut edits: Vec<StyleEdit> = Vec::new();

    ui.group(|ui| {
        ui.heading("Edit style");
        ui.add_space(scaled_margin(4.0, ui_scale));

        ui.label("Size");
        let mut font_size = view.font_size;
        let slider = egui::Slider::new(&mut font_size, FONT_SIZE_MIN..=FONT_SIZE_MAX)
            .step_by(2.0)
            .show_value(true);
        if ui.add(slider).changed() {
            edits.push(StyleEdit::FontSize(font_size));
        }

        ui.add_space(scaled_margin(6.0, ui_scale));
        ui.label("Color");
        ui.horizontal_wrapped(|ui| {
            for color in COLOR_OPTIONS {
                let selected = view.color.eq_ignore_ascii_case(color);
                if color_swatch(ui, parse_hex_color(color), selected, 24.0).clicked() {
                    edits.push(StyleEdit::Color(color.to_string()));
                }
            }
        });

        ui.add_space(scaled_margin(6.0, ui_scale));
        ui.label("Font");
        egui::Grid::new("font_options").num_columns(2).show(ui, |ui| {
            for (row, fonts) in FONT_OPTIONS.chunks(2).enumerate() {
                for (name, family) in fonts {
                    let selected = view.font_family == *family;
                    if ui.selectable_label(selected, *name).clicked() {
                        edits.push(StyleEdit::FontFamily(family.to_string()));
                    }
                }
                if row < FONT_OPTIONS.len() / 2 {
                    ui.end_row();
                }
            }
        });

        ui.add_space(scaled_margin(6.0, ui_scale));
        ui.label("Alignment");
        ui.horizontal(|ui| {
            for (label, align) in [
                ("Left", TextAlign::Left),
                ("Center", TextAlign::Center),
                ("Right", TextAlign::Right),
            ] {
                if ui
                    .selectable_label(view.text_align == align, label)
                    .clicked()
                {
                    edits.push(StyleEdit::Align(align));
                }
            }
        });

        // Sticker-only decoration controls
        if let Some(sticker) = &view.sticker {
            ui.add_space(scaled_margin(6.0, ui_scale));
            ui.separator();
            ui.label("Background");
            ui.horizontal_wrapped(|ui| {
                if ui
                    .selectable_label(sticker.background.is_none(), "None")
                    .clicked()
                {
                    edits.push(StyleEdit::Background(None));
                }
                for color in COLOR_OPTIONS {
                    let selected = sticker
                        .background
                        .as_deref()
                        .is_some_and(|bg| bg.eq_ignore_ascii_case(color));
                    if color_swatch(ui, parse_hex_color(color), selected, 24.0).clicked() {
                        edits.push(StyleEdit::Background(Some(color.to_string())));
                    }
                }
            });

            ui.add_space(scaled_margin(6.0, ui_scale));
            ui.horizontal(|ui| {
                ui.label("Corner radius");
                let circular = sticker.corner_radius == Some(CornerRadius::Circle);
                let mut radius = match sticker.corner_radius {
                    Some(CornerRadius::Px(r)) => r,
                    _ => 0.0,
                };
                if ui
                    .add_enabled(
                        !circular,
                        egui::DragValue::new(&mut radius).range(0.0..=30.0).speed(1),
                    )
                    .changed()
                {
                    edits.push(StyleEdit::CornerRadius(CornerRadius::Px(radius)));
                }
                let mut as_circle = circular;
                if ui.checkbox(&mut as_circle, "Circle").clicked() {
                    edits.push(StyleEdit::CornerRadius(if as_circle {
                        CornerRadius::Circle
                    } else {
                        CornerRadius::Px(radius)
                    }));
                }
            });

            ui.horizontal(|ui| {
                ui.label("Padding");
                let mut padding = sticker.padding;
                let changed_x = ui
                    .add(egui::DragValue::new(&mut padding.x).range(0.0..=30.0).speed(1))
                    .changed();
                let changed_y = ui
                    .add(egui::DragValue::new(&mut padding.y).range(0.0..=30.0).speed(1))
                    .changed();
                if changed_x || changed_y {
                    edits.push(StyleEdit::Padding(padding));
                }
            });
        }
    });

    if let Some(scene) = state.scene.as_mut() {
        for edit in edits {
            scene.update_selected_style(edit);
        }
    }
}
