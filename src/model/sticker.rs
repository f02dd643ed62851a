use serde::{Deserialize, Serialize};

use super::style::{
    Border, CornerRadius, Decoration, Padding, Position, TextAlign, TextStyle, TextTransform,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerKind {
    Text,
    Icon,
    Badge,
}

/// Catalog grouping used by the sticker tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerCategory {
    Text,
    Distance,
    Icon,
}

impl StickerCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            StickerCategory::Text => "Text stickers",
            StickerCategory::Distance => "Distance badges",
            StickerCategory::Icon => "Icon stickers",
        }
    }
}

/// A catalog entry. Immutable; instances copy their defaults out of it at
/// add time but keep a reference back for kind-specific rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerDef {
    pub id: String,
    pub kind: StickerKind,
    /// Display content; may contain newlines for multi-line stickers
    pub content: String,
    pub category: StickerCategory,
    pub opaque_background: bool,
    // Partial visual defaults; unset fields fall back at instantiation
    pub font_size: Option<f32>,
    pub color: Option<String>,
    pub font_weight: Option<u16>,
    pub text_transform: Option<TextTransform>,
    pub letter_spacing_em: Option<f32>,
    pub text_align: Option<TextAlign>,
    pub decoration: Decoration,
}

/// A sticker placed on the canvas: defaults resolved, position and style
/// mutable, the source definition carried for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSticker {
    pub instance_id: String,
    pub def: StickerDef,
    pub position: Position,
    pub style: TextStyle,
    pub decoration: Decoration,
}

impl CanvasSticker {
    pub fn from_def(instance_id: String, def: &StickerDef, position: Position) -> Self {
        let style = TextStyle {
            font_size: def.font_size.unwrap_or(24.0),
            color: def.color.clone().unwrap_or_else(|| "#ffffff".to_string()),
            text_align: def.text_align.unwrap_or(TextAlign::Center),
            font_family: "Arial Black".to_string(),
            font_weight: def.font_weight.or(Some(900)),
            text_transform: def.text_transform.or(Some(TextTransform::Uppercase)),
            letter_spacing_em: def.letter_spacing_em.or(Some(0.1)),
        };
        // Background/radius/padding become editable instance state; border,
        // fixed size and line height stay on the definition and are read at
        // render time.
        let decoration = Decoration {
            background: if def.opaque_background {
                def.decoration.background.clone()
            } else {
                None
            },
            corner_radius: def.decoration.corner_radius,
            padding: def.decoration.padding,
            ..Decoration::default()
        };
        Self {
            instance_id,
            def: def.clone(),
            position,
            style,
            decoration,
        }
    }
}

fn black_box(id: &str, content: &str, font_size: f32, padding: Padding) -> StickerDef {
    StickerDef {
        id: id.to_string(),
        kind: StickerKind::Text,
        content: content.to_string(),
        category: StickerCategory::Text,
        opaque_background: true,
        font_size: Some(font_size),
        color: Some("#ffffff".to_string()),
        font_weight: Some(900),
        text_transform: Some(TextTransform::Uppercase),
        letter_spacing_em: Some(0.1),
        text_align: None,
        decoration: Decoration {
            background: Some("#000000".to_string()),
            corner_radius: Some(CornerRadius::Px(4.0)),
            padding: Some(padding),
            ..Decoration::default()
        },
    }
}

fn black_box_centered(
    id: &str,
    content: &str,
    font_size: f32,
    padding: Padding,
    line_height: f32,
) -> StickerDef {
    let mut def = black_box(id, content, font_size, padding);
    def.text_align = Some(TextAlign::Center);
    def.decoration.line_height = Some(line_height);
    def
}

fn distance_badge(id: &str, content: &str, font_size: f32) -> StickerDef {
    StickerDef {
        id: id.to_string(),
        kind: StickerKind::Badge,
        content: content.to_string(),
        category: StickerCategory::Distance,
        opaque_background: true,
        font_size: Some(font_size),
        color: Some("#ffffff".to_string()),
        font_weight: Some(900),
        text_transform: None,
        letter_spacing_em: None,
        text_align: None,
        decoration: Decoration {
            background: Some("#000000".to_string()),
            corner_radius: Some(CornerRadius::Circle),
            padding: Some(Padding::uniform(15.0)),
            border: Some(Border {
                width: 3.0,
                color: "#ffffff".to_string(),
            }),
            fixed_size: Some((60.0, 60.0)),
            ..Decoration::default()
        },
    }
}

fn icon_sticker(id: &str, kind: StickerKind, content: &str, font_size: f32, padding: Padding) -> StickerDef {
    StickerDef {
        id: id.to_string(),
        kind,
        content: content.to_string(),
        category: StickerCategory::Icon,
        opaque_background: true,
        font_size: Some(font_size),
        color: None,
        font_weight: None,
        text_transform: None,
        letter_spacing_em: None,
        text_align: None,
        decoration: Decoration {
            background: Some("#000000".to_string()),
            corner_radius: Some(CornerRadius::Px(4.0)),
            padding: Some(padding),
            ..Decoration::default()
        },
    }
}

/// The static sticker catalog, enumerated once at startup
pub fn builtin_stickers() -> Vec<StickerDef> {
    let mut runner_box = black_box("runner-box", "RUNNER", 16.0, Padding::new(10.0, 6.0));
    runner_box.color = Some("#000000".to_string());
    runner_box.decoration.background = Some("#ffffff".to_string());
    runner_box.decoration.border = Some(Border {
        width: 2.0,
        color: "#000000".to_string(),
    });

    let mut dawn_runner = black_box("dawn-runner", "DAWN RUNNER", 16.0, Padding::new(12.0, 8.0));
    dawn_runner.text_transform = None;

    let mut lets_run = black_box_centered("lets-run", "Let's\nRUN", 16.0, Padding::new(12.0, 10.0), 1.2);
    lets_run.text_transform = Some(TextTransform::Capitalize);

    let mut day = black_box("day", "Day", 24.0, Padding::new(15.0, 8.0));
    day.font_weight = Some(300);
    day.text_transform = None;

    vec![
        // Text stickers, black-box style
        black_box("run-day-1", "RUN DAY", 20.0, Padding::new(12.0, 8.0)),
        black_box_centered("run-day-2", "RUN\nDAY", 18.0, Padding::new(15.0, 10.0), 1.2),
        black_box("runner-1", "RUNNER", 18.0, Padding::new(12.0, 8.0)),
        runner_box,
        black_box_centered("im-a-runner", "I'M\nA\nRUNNER", 14.0, Padding::new(8.0, 12.0), 1.2),
        dawn_runner,
        black_box_centered("fun-run", "FUN\nRUN", 18.0, Padding::new(12.0, 10.0), 1.2),
        black_box_centered("happy-run", "HAPPY\nRUN", 16.0, Padding::new(12.0, 10.0), 1.2),
        black_box_centered("morning-run", "☀️ MORNING\nRUN", 14.0, Padding::new(10.0, 8.0), 1.3),
        black_box_centered("night-run", "🌙 NIGHT\nRUN", 14.0, Padding::new(10.0, 8.0), 1.3),
        black_box_centered("lets-get-running", "LET'S GET\nRUNNING", 12.0, Padding::new(10.0, 8.0), 1.3),
        lets_run,
        day,
        black_box("runday", "RUNDAY", 14.0, Padding::new(8.0, 6.0)),
        black_box_centered("runday-vertical", "R\nU\nN\nD\nA\nY", 14.0, Padding::new(8.0, 15.0), 1.2),
        // Distance badges, circular
        distance_badge("3k-circle", "3K", 20.0),
        distance_badge("5k-circle", "5K", 20.0),
        distance_badge("7k-circle", "7K", 20.0),
        distance_badge("10k-circle", "10K", 18.0),
        distance_badge("21k-circle", "21K", 18.0),
        // Icon stickers
        icon_sticker("treadmill", StickerKind::Icon, "🏃‍♂️", 24.0, Padding::uniform(10.0)),
        icon_sticker("running-shoe", StickerKind::Icon, "👟", 24.0, Padding::uniform(10.0)),
        icon_sticker("heartbeat", StickerKind::Text, "♥️💓", 20.0, Padding::new(10.0, 8.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = builtin_stickers();
        let mut ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_covers_all_categories() {
        let catalog = builtin_stickers();
        let count = |c: StickerCategory| catalog.iter().filter(|d| d.category == c).count();
        assert_eq!(count(StickerCategory::Text), 15);
        assert_eq!(count(StickerCategory::Distance), 5);
        assert_eq!(count(StickerCategory::Icon), 3);
    }

    #[test]
    fn distance_badges_are_circular_with_border() {
        for def in builtin_stickers()
            .iter()
            .filter(|d| d.category == StickerCategory::Distance)
        {
            assert_eq!(def.kind, StickerKind::Badge);
            assert_eq!(def.decoration.corner_radius, Some(CornerRadius::Circle));
            assert!(def.decoration.border.is_some());
            assert_eq!(def.decoration.fixed_size, Some((60.0, 60.0)));
        }
    }

    #[test]
    fn instance_resolves_defaults_from_definition() {
        let catalog = builtin_stickers();
        let def = catalog
            .iter()
            .find(|d| d.id == "run-day-1")
            .expect("run-day-1 in catalog");
        let sticker =
            CanvasSticker::from_def("run-day-1-0-1".to_string(), def, Position::new(100.0, 100.0));
        assert_eq!(sticker.style.font_size, 20.0);
        assert_eq!(sticker.style.color, "#ffffff");
        assert_eq!(sticker.style.text_align, TextAlign::Center);
        assert_eq!(sticker.decoration.background, Some("#000000".to_string()));
        // border stays on the definition for rendering
        assert_eq!(sticker.decoration.border, None);
    }

    #[test]
    fn icon_instance_falls_back_to_white_text() {
        let catalog = builtin_stickers();
        let def = catalog
            .iter()
            .find(|d| d.id == "running-shoe")
            .expect("running-shoe in catalog");
        let sticker =
            CanvasSticker::from_def("shoe-0-1".to_string(), def, Position::new(100.0, 100.0));
        assert_eq!(sticker.style.color, "#ffffff");
        assert_eq!(sticker.style.font_weight, Some(900));
    }
}
