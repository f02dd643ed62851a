use serde::{Deserialize, Serialize};

use super::style::{
    Border, CornerRadius, Decoration, Padding, Position, TextAlign, TextStyle, TextTransform,
};

/// A read-only decorative rendering directive injected by a template. Not
/// selectable, not draggable; its x coordinate is the element's horizontal
/// center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    pub content: String,
    pub position: Position,
    pub style: TextStyle,
    pub decoration: Decoration,
}

/// A layout preset: replaces all four stat layers wholesale and injects
/// decorative elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Short string shown as the catalog preview
    pub preview: String,
    pub stat_positions: [Position; 4],
    pub stat_styles: [TextStyle; 4],
    /// When set, applying the template also swaps the canvas background to
    /// the dark preset to keep the white-on-black elements readable.
    pub canvas_background: Option<String>,
    pub elements: Vec<TemplateElement>,
}

fn stat_style(font_size: f32, text_align: TextAlign) -> TextStyle {
    TextStyle {
        font_size,
        color: "#ffffff".to_string(),
        text_align,
        font_family: "Arial Black".to_string(),
        font_weight: Some(900),
        text_transform: Some(TextTransform::Uppercase),
        letter_spacing_em: Some(0.1),
    }
}

fn element_style(font_size: f32, color: &str, letter_spacing_em: Option<f32>) -> TextStyle {
    TextStyle {
        font_size,
        color: color.to_string(),
        text_align: TextAlign::Center,
        font_family: "Arial Black".to_string(),
        font_weight: Some(900),
        text_transform: Some(TextTransform::Uppercase),
        letter_spacing_em,
    }
}

/// The static template catalog, enumerated once at startup
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "black-minimal-r".to_string(),
            name: "R".to_string(),
            preview: "R".to_string(),
            stat_positions: [
                Position::new(100.0, 40.0),
                Position::new(100.0, 80.0),
                Position::new(100.0, 120.0),
                Position::new(100.0, 160.0),
            ],
            stat_styles: [
                stat_style(22.0, TextAlign::Left),
                stat_style(18.0, TextAlign::Left),
                stat_style(18.0, TextAlign::Left),
                stat_style(18.0, TextAlign::Left),
            ],
            canvas_background: Some("#1a1a1a".to_string()),
            elements: vec![TemplateElement {
                content: "R".to_string(),
                position: Position::new(50.0, 100.0),
                style: element_style(80.0, "#ffffff", None),
                decoration: Decoration::default(),
            }],
        },
        Template {
            id: "black-runday-circle".to_string(),
            name: "RunDay".to_string(),
            preview: "⭕".to_string(),
            stat_positions: [
                Position::new(140.0, 50.0),
                Position::new(140.0, 90.0),
                Position::new(140.0, 130.0),
                Position::new(140.0, 170.0),
            ],
            stat_styles: [
                stat_style(20.0, TextAlign::Left),
                stat_style(18.0, TextAlign::Left),
                stat_style(18.0, TextAlign::Left),
                stat_style(18.0, TextAlign::Left),
            ],
            canvas_background: Some("#1a1a1a".to_string()),
            elements: vec![TemplateElement {
                content: "RunDay".to_string(),
                position: Position::new(70.0, 110.0),
                style: element_style(24.0, "#ffffff", None),
                decoration: Decoration {
                    border: Some(Border {
                        width: 3.0,
                        color: "#ffffff".to_string(),
                    }),
                    corner_radius: Some(CornerRadius::Circle),
                    fixed_size: Some((80.0, 80.0)),
                    ..Decoration::default()
                },
            }],
        },
        Template {
            id: "black-runday-bold".to_string(),
            name: "RUN DAY".to_string(),
            preview: "RUN DAY".to_string(),
            stat_positions: [
                Position::new(40.0, 180.0),
                Position::new(150.0, 180.0),
                Position::new(250.0, 180.0),
                Position::new(350.0, 180.0),
            ],
            stat_styles: [
                stat_style(16.0, TextAlign::Center),
                stat_style(16.0, TextAlign::Center),
                stat_style(16.0, TextAlign::Center),
                stat_style(16.0, TextAlign::Center),
            ],
            canvas_background: Some("#1a1a1a".to_string()),
            elements: vec![
                TemplateElement {
                    content: "RUN".to_string(),
                    position: Position::new(200.0, 60.0),
                    style: element_style(48.0, "#ffffff", Some(0.2)),
                    decoration: Decoration::default(),
                },
                TemplateElement {
                    content: "DAY".to_string(),
                    position: Position::new(200.0, 120.0),
                    style: element_style(48.0, "#ffffff", Some(0.2)),
                    decoration: Decoration::default(),
                },
            ],
        },
        Template {
            id: "black-runner-box".to_string(),
            name: "RUNNER".to_string(),
            preview: "📦".to_string(),
            stat_positions: [
                Position::new(60.0, 180.0),
                Position::new(160.0, 180.0),
                Position::new(260.0, 180.0),
                Position::new(360.0, 180.0),
            ],
            stat_styles: [
                stat_style(14.0, TextAlign::Center),
                stat_style(14.0, TextAlign::Center),
                stat_style(14.0, TextAlign::Center),
                stat_style(14.0, TextAlign::Center),
            ],
            canvas_background: Some("#1a1a1a".to_string()),
            elements: vec![TemplateElement {
                content: "RUNNER".to_string(),
                position: Position::new(200.0, 100.0),
                style: element_style(36.0, "#000000", Some(0.15)),
                decoration: Decoration {
                    background: Some("#ffffff".to_string()),
                    padding: Some(Padding::new(25.0, 15.0)),
                    corner_radius: Some(CornerRadius::Px(8.0)),
                    ..Decoration::default()
                },
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = builtin_templates();
        let mut ids: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_template_replaces_all_four_stat_layers() {
        for template in builtin_templates() {
            assert_eq!(template.stat_positions.len(), 4);
            assert_eq!(template.stat_styles.len(), 4);
            assert!(!template.elements.is_empty());
        }
    }

    #[test]
    fn dark_templates_declare_a_canvas_background() {
        for template in builtin_templates() {
            assert_eq!(template.canvas_background.as_deref(), Some("#1a1a1a"));
        }
    }

    #[test]
    fn runday_circle_element_is_framed() {
        let catalog = builtin_templates();
        let circle = catalog
            .iter()
            .find(|t| t.id == "black-runday-circle")
            .expect("circle template");
        let element = &circle.elements[0];
        assert_eq!(element.decoration.corner_radius, Some(CornerRadius::Circle));
        assert_eq!(element.decoration.fixed_size, Some((80.0, 80.0)));
    }
}
