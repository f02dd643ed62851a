use serde::{Deserialize, Serialize};

/// Font size bounds enforced by the style panel slider. Template-applied
/// sizes may lie outside this range.
pub const FONT_SIZE_MIN: f32 = 12.0;
pub const FONT_SIZE_MAX: f32 = 60.0;

/// Swatches offered by the style panel
pub const COLOR_OPTIONS: [&str; 10] = [
    "#ffffff", "#000000", "#ff6b6b", "#4ecdc4", "#45b7d1", "#f9ca24", "#f0932b", "#eb4d4b",
    "#6c5ce7", "#ffdd00",
];

/// Font choices offered by the style panel: (display name, family)
pub const FONT_OPTIONS: [(&str, &str); 4] = [
    ("Arial Black", "Arial Black"),
    ("Impact", "Impact"),
    ("Helvetica Bold", "Helvetica"),
    ("Bebas Neue", "Bebas Neue"),
];

/// Canvas-local position in pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
    Capitalize,
}

impl TextTransform {
    /// Apply the transform to display text. Multi-line content is handled
    /// line by line so embedded newlines survive.
    pub fn apply(&self, text: &str) -> String {
        match self {
            TextTransform::Uppercase => text.to_uppercase(),
            TextTransform::Capitalize => text
                .split_inclusive(char::is_whitespace)
                .map(capitalize_word)
                .collect(),
        }
    }
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shared text style core for stat layers, stickers and template elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f32,
    /// Hex color string, e.g. "#ffffff"
    pub color: String,
    pub text_align: TextAlign,
    pub font_family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<TextTransform>,
    /// Tracking in em units (0.1 = 10% of the font size per character)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing_em: Option<f32>,
}

impl TextStyle {
    /// Default style of a freshly mounted stat-text layer
    pub fn stat_default(font_size: f32) -> Self {
        Self {
            font_size,
            color: "#ffffff".to_string(),
            text_align: TextAlign::Left,
            font_family: "Arial Black".to_string(),
            font_weight: Some(900),
            text_transform: Some(TextTransform::Uppercase),
            letter_spacing_em: Some(0.05),
        }
    }

    /// Display text with the style's transform applied
    pub fn display_text(&self, content: &str) -> String {
        match self.text_transform {
            Some(transform) => transform.apply(content),
            None => content.to_string(),
        }
    }
}

/// Corner rounding of a decorated element. Circle renders the element as a
/// full circle (distance badges).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    Px(f32),
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub x: f32,
    pub y: f32,
}

impl Padding {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn uniform(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f32,
    pub color: String,
}

/// Kind-specific extension over the shared text core: frame and background
/// fields used by stickers and template elements, never by stat layers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Decoration {
    /// Hex fill behind the text; None paints nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Fixed width/height for badge-like rendering; otherwise the element
    /// sizes to its content plus padding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<(f32, f32)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
}

/// One change coming out of the style panel. Edits that do not apply to the
/// selected element kind are ignored silently.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEdit {
    FontSize(f32),
    Color(String),
    Align(TextAlign),
    FontFamily(String),
    Background(Option<String>),
    CornerRadius(CornerRadius),
    Padding(Padding),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn uppercase_transform() {
        assert_eq!(TextTransform::Uppercase.apply("run day"), "RUN DAY");
        assert_eq!(TextTransform::Uppercase.apply("Run\nDay"), "RUN\nDAY");
    }

    #[test]
    fn capitalize_transform() {
        assert_eq!(TextTransform::Capitalize.apply("let's\nrun"), "Let's\nRun");
        assert_eq!(TextTransform::Capitalize.apply("fun run"), "Fun Run");
    }

    #[test]
    fn stat_default_matches_mount_style() {
        let style = TextStyle::stat_default(24.0);
        assert_eq!(style.color, "#ffffff");
        assert_eq!(style.text_align, TextAlign::Left);
        assert_eq!(style.font_weight, Some(900));
        assert_eq!(style.display_text("total 5.2km"), "TOTAL 5.2KM");
    }

    #[test]
    fn align_serializes_lowercase() {
        let json = serde_json::to_string(&TextAlign::Center).expect("serialize");
        assert_eq!(json, "\"center\"");
    }
}
