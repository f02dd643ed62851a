use bevy_egui::egui;
use std::sync::Arc;

use crate::model::{SessionType, TextStyle};

/// Get a scaled font size with minimum of 12
pub fn scaled_font(base_size: f32, scale: f32) -> f32 {
    (base_size.max(12.0) * scale).max(12.0)
}

/// Get a scaled margin/spacing value
pub fn scaled_margin(base_size: f32, scale: f32) -> f32 {
    base_size * scale
}

/// Parse a "#rrggbb" hex string; unknown strings fall back to white
pub fn parse_hex_color(hex: &str) -> egui::Color32 {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return egui::Color32::WHITE;
    }
    let channel = |slice: &str| u8::from_str_radix(slice, 16).ok();
    match (
        channel(&digits[0..2]),
        channel(&digits[2..4]),
        channel(&digits[4..6]),
    ) {
        (Some(r), Some(g), Some(b)) => egui::Color32::from_rgb(r, g, b),
        _ => egui::Color32::WHITE,
    }
}

/// Lay out element text with its style applied: transform, size, color and
/// tracking. Families all map onto the bundled proportional face.
pub fn layout_styled(ui: &egui::Ui, style: &TextStyle, content: &str) -> Arc<egui::Galley> {
    let text = style.display_text(content);
    let mut format = egui::TextFormat::simple(
        egui::FontId::proportional(style.font_size.max(1.0)),
        parse_hex_color(&style.color),
    );
    format.extra_letter_spacing = style.letter_spacing_em.unwrap_or(0.0) * style.font_size;
    let mut job = egui::text::LayoutJob::default();
    job.append(&text, 0.0, format);
    ui.fonts(|fonts| fonts.layout_job(job))
}

/// Badge colors for a session type: (background, text)
pub fn session_badge_colors(session_type: SessionType) -> (egui::Color32, egui::Color32) {
    match session_type {
        SessionType::Morning => (
            egui::Color32::from_rgb(255, 237, 213),
            egui::Color32::from_rgb(194, 65, 12),
        ),
        SessionType::Afternoon => (
            egui::Color32::from_rgb(254, 249, 195),
            egui::Color32::from_rgb(161, 98, 7),
        ),
        SessionType::Evening => (
            egui::Color32::from_rgb(243, 232, 255),
            egui::Color32::from_rgb(126, 34, 206),
        ),
        SessionType::Night => (
            egui::Color32::from_rgb(224, 231, 255),
            egui::Color32::from_rgb(67, 56, 202),
        ),
        SessionType::Interval => (
            egui::Color32::from_rgb(254, 226, 226),
            egui::Color32::from_rgb(185, 28, 28),
        ),
        SessionType::Recovery => (
            egui::Color32::from_rgb(220, 252, 231),
            egui::Color32::from_rgb(21, 128, 61),
        ),
    }
}

/// Small colored badge with the session type label
pub fn session_badge(ui: &mut egui::Ui, session_type: SessionType, ui_scale: f32) {
    let (bg, fg) = session_badge_colors(session_type);
    let galley = ui.painter().layout_no_wrap(
        session_type.badge().to_string(),
        egui::FontId::proportional(scaled_font(12.0, ui_scale)),
        fg,
    );
    let padding = egui::vec2(scaled_margin(6.0, ui_scale), scaled_margin(2.0, ui_scale));
    let (rect, _response) =
        ui.allocate_exact_size(galley.size() + padding * 2.0, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 6.0, bg);
        ui.painter().galley(rect.min + padding, galley, fg);
    }
}

/// Render a tab-style button that looks distinct from regular selectable labels
pub fn tab_button(
    ui: &mut egui::Ui,
    selected: bool,
    text: impl Into<String>,
    ui_scale: f32,
) -> egui::Response {
    let text = text.into();
    let padding = egui::vec2(scaled_margin(8.0, ui_scale), scaled_margin(4.0, ui_scale));

    let text_color = if selected {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_gray(180)
    };

    let bg_color = if selected {
        egui::Color32::from_rgb(70, 90, 120)
    } else {
        egui::Color32::from_gray(50)
    };

    let galley = ui.painter().layout_no_wrap(
        text.clone(),
        egui::FontId::proportional(scaled_font(14.0, ui_scale)),
        text_color,
    );

    let tab_size = galley.size() + padding * 2.0;
    // Selected: full height, lifted 1px to show stroke
    // Deselected: 2px lower (partially hidden below separator)
    let deselected_sink = 2.0;
    let lift = 1.0;
    let desired_size = egui::vec2(tab_size.x, tab_size.y + lift);
    let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let y_offset = if selected { 0.0 } else { deselected_sink };
        let draw_rect = egui::Rect::from_min_size(rect.min + egui::vec2(0.0, y_offset), tab_size);

        let bg = if response.hovered() && !selected {
            egui::Color32::from_rgb(55, 65, 80)
        } else {
            bg_color
        };

        // Draw background with rounded top corners only
        ui.painter().rect_filled(
            draw_rect,
            egui::Rounding {
                nw: 4.0,
                ne: 4.0,
                sw: 0.0,
                se: 0.0,
            },
            bg,
        );

        // Draw bottom border - bright for selected, dark gray for deselected
        let stroke_y = draw_rect.max.y - 1.0;
        let stroke_color = if selected {
            egui::Color32::from_rgb(100, 140, 200)
        } else {
            egui::Color32::from_gray(40)
        };
        ui.painter().line_segment(
            [
                egui::pos2(draw_rect.min.x, stroke_y),
                egui::pos2(draw_rect.max.x, stroke_y),
            ],
            egui::Stroke::new(2.0, stroke_color),
        );

        ui.painter()
            .galley(draw_rect.min + padding, galley, text_color);
    }

    response
}

/// Square swatch button filled with a color; draws a highlight ring when
/// selected
pub fn color_swatch(
    ui: &mut egui::Ui,
    color: egui::Color32,
    selected: bool,
    size: f32,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 4.0, color);
        let stroke = if selected {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(120))
        };
        ui.painter().rect_stroke(rect, 4.0, stroke);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_parsing_handles_prefixes_and_junk() {
        assert_eq!(parse_hex_color("#000000"), egui::Color32::from_rgb(0, 0, 0));
        assert_eq!(
            parse_hex_color("#ff6b6b"),
            egui::Color32::from_rgb(255, 107, 107)
        );
        assert_eq!(
            parse_hex_color("4ecdc4"),
            egui::Color32::from_rgb(78, 205, 196)
        );
        assert_eq!(parse_hex_color("transparent"), egui::Color32::WHITE);
        assert_eq!(parse_hex_color("#fff"), egui::Color32::WHITE);
    }

    #[test]
    fn scaled_font_never_drops_below_minimum() {
        assert_eq!(scaled_font(10.0, 0.75), 12.0);
        assert_eq!(scaled_font(20.0, 1.0), 20.0);
        assert_eq!(scaled_font(20.0, 1.5), 30.0);
    }
}
