use bevy_egui::egui;

use crate::model::{CornerRadius, Decoration, Position, TextAlign, TextStyle};
use crate::state::{AppState, ElementRef, Gesture};
use crate::ui::widgets::{layout_styled, parse_hex_color};

/// Minimum visual footprint of a stat layer, matching its drag clamp size
const STAT_MIN_WIDTH: f32 = 120.0;

const SELECTED_STAT_RING: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const SELECTED_STICKER_RING: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

/// Paint one decorated element (sticker or template element) and return the
/// rect it occupied. `anchor_center_x` places the element's x at its
/// horizontal center, the template-element convention.
fn draw_decorated(
    ui: &egui::Ui,
    painter: &egui::Painter,
    origin: egui::Pos2,
    anchor_center_x: bool,
    content: &str,
    style: &TextStyle,
    decoration: &Decoration,
) -> egui::Rect {
    let galley = layout_styled(ui, style, content);
    let padding = decoration
        .padding
        .map(|p| egui::vec2(p.x, p.y))
        .unwrap_or(egui::Vec2::ZERO);
    let size = decoration
        .fixed_size
        .map(|(w, h)| egui::vec2(w, h))
        .unwrap_or_else(|| galley.size() + padding * 2.0);

    let min = if anchor_center_x {
        egui::pos2(origin.x - size.x / 2.0, origin.y)
    } else {
        origin
    };
    let rect = egui::Rect::from_min_size(min, size);

    let circular = decoration.corner_radius == Some(CornerRadius::Circle);
    let radius = match decoration.corner_radius {
        Some(CornerRadius::Px(r)) => r,
        _ => 0.0,
    };

    if let Some(background) = &decoration.background {
        let fill = parse_hex_color(background);
        if circular {
            painter.circle_filled(rect.center(), size.x.min(size.y) / 2.0, fill);
        } else {
            painter.rect_filled(rect, radius, fill);
        }
    }
    if let Some(border) = &decoration.border {
        let stroke = egui::Stroke::new(border.width, parse_hex_color(&border.color));
        if circular {
            painter.circle_stroke(rect.center(), size.x.min(size.y) / 2.0, stroke);
        } else {
            painter.rect_stroke(rect, radius, stroke);
        }
    }

    // Text centered inside the decorated frame
    let text_pos = rect.center() - galley.size() / 2.0;
    painter.galley(text_pos, galley, egui::Color32::WHITE);
    rect
}

/// The decoration surface: background, template decorations, the four stat
/// layers and the placed stickers, plus all pointer interaction.
pub fn render_canvas(ui: &mut egui::Ui, state: &mut AppState) {
    let stat_texts = state
        .running_summary()
        .map(|summary| summary.stat_texts())
        .unwrap_or_default();

    let background_tint = {
        let Some(scene) = state.scene.as_ref() else {
            return;
        };
        state
            .background_presets
            .iter()
            .find(|preset| preset.uri == scene.background)
            .map(|preset| preset.tint.clone())
            .unwrap_or_else(|| "#4a6b8a".to_string())
    };

    // 4:3 surface spanning the available width
    let width = ui.available_width();
    let desired = egui::vec2(width, width * 0.75);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::click_and_drag());
    let canvas_rect = response.rect;

    if let Some(scene) = state.scene.as_mut() {
        scene.set_canvas_size(canvas_rect.width(), canvas_rect.height());
    }

    // Background stand-in fill for the referenced photo, dimmed for text
    // contrast
    painter.rect_filled(canvas_rect, 6.0, parse_hex_color(&background_tint));
    painter.rect_filled(canvas_rect, 6.0, egui::Color32::from_black_alpha(77));

    // Paint scene content and collect hit rects in paint order; later
    // entries are topmost
    let mut hit_rects: Vec<(ElementRef, egui::Rect)> = Vec::new();
    {
        let Some(scene) = state.scene.as_ref() else {
            return;
        };

        // Template decorations: read-only, not hit-testable
        for element in &scene.template_elements {
            let origin = egui::pos2(
                canvas_rect.min.x + element.position.x,
                canvas_rect.min.y + element.position.y,
            );
            draw_decorated(
                ui,
                &painter,
                origin,
                true,
                &element.content,
                &element.style,
                &element.decoration,
            );
        }

        // Stat-text layers
        for (index, layer) in scene.stat_layers.iter().enumerate() {
            let content = stat_texts.get(index).cloned().unwrap_or_default();
            let galley = layout_styled(ui, &layer.style, &content);
            let padding = egui::vec2(12.0, 8.0);
            let inner = egui::vec2(galley.size().x.max(STAT_MIN_WIDTH), galley.size().y);
            let origin = egui::pos2(
                canvas_rect.min.x + layer.position.x,
                canvas_rect.min.y + layer.position.y,
            );
            let rect = egui::Rect::from_min_size(origin, inner + padding * 2.0);
            let text_x = match layer.style.text_align {
                TextAlign::Left => rect.min.x + padding.x,
                TextAlign::Center => rect.center().x - galley.size().x / 2.0,
                TextAlign::Right => rect.max.x - padding.x - galley.size().x,
            };
            painter.galley(
                egui::pos2(text_x, rect.min.y + padding.y),
                galley,
                egui::Color32::WHITE,
            );
            if scene.selection() == Some(ElementRef::Stat(index)) {
                painter.rect_stroke(rect, 4.0, egui::Stroke::new(2.0, SELECTED_STAT_RING));
            }
            hit_rects.push((ElementRef::Stat(index), rect));
        }

        // Stickers in insertion order; later stickers paint on top.
        // Background/radius/padding come from the instance, frame fields
        // from the source definition.
        for (index, sticker) in scene.stickers.iter().enumerate() {
            let decoration = Decoration {
                background: sticker.decoration.background.clone(),
                corner_radius: sticker.decoration.corner_radius,
                padding: sticker.decoration.padding,
                border: sticker.def.decoration.border.clone(),
                fixed_size: sticker.def.decoration.fixed_size,
                line_height: sticker.def.decoration.line_height,
            };
            let origin = egui::pos2(
                canvas_rect.min.x + sticker.position.x,
                canvas_rect.min.y + sticker.position.y,
            );
            let rect = draw_decorated(
                ui,
                &painter,
                origin,
                false,
                &sticker.def.content,
                &sticker.style,
                &decoration,
            );
            if scene.selection() == Some(ElementRef::Sticker(index)) {
                painter.rect_stroke(rect, 4.0, egui::Stroke::new(2.0, SELECTED_STICKER_RING));
            }
            hit_rects.push((ElementRef::Sticker(index), rect));
        }
    }

    // Cursor feedback over draggable elements
    if let Some(hover) = response.hover_pos() {
        let hovering_element = hit_rects.iter().any(|(_, rect)| rect.contains(hover));
        if hovering_element {
            if response.dragged() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            } else {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
        }
    }

    // Press: classify on the topmost element under the pointer. Pressing
    // empty canvas leaves the selection untouched.
    if ui.input(|i| i.pointer.any_pressed()) {
        if let Some(pos) = response.interact_pointer_pos() {
            if canvas_rect.contains(pos) {
                let target = hit_rects
                    .iter()
                    .rev()
                    .find(|(_, rect)| rect.contains(pos))
                    .map(|(target, _)| *target);
                if let Some(target) = target {
                    let canvas_pos =
                        Position::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);
                    let gesture = state
                        .scene
                        .as_mut()
                        .map(|scene| scene.begin_press(target, canvas_pos));
                    if gesture == Some(Gesture::DoubleActivate) {
                        state.show_style_panel = true;
                    }
                }
            }
        }
    }

    // Active drag follows the pointer, clamped by the scene
    if response.dragged() {
        if let (Some(pos), Some(scene)) = (response.interact_pointer_pos(), state.scene.as_mut()) {
            if scene.is_dragging() {
                scene.drag_to(Position::new(
                    pos.x - canvas_rect.min.x,
                    pos.y - canvas_rect.min.y,
                ));
            }
        }
    }

    // Release ends the drag wherever the pointer is
    if ui.input(|i| i.pointer.any_released()) {
        if let Some(scene) = state.scene.as_mut() {
            scene.end_drag();
        }
    }
}
