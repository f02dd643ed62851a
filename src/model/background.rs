use serde::{Deserialize, Serialize};

/// A preset background for the decoration canvas. The uri is an opaque
/// reference owned by an image collaborator; the canvas itself paints the
/// tint as a stand-in fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundPreset {
    pub id: String,
    pub name: String,
    pub uri: String,
    /// Hex color approximating the photo, used for swatches and the canvas fill
    pub tint: String,
}

fn preset(id: &str, name: &str, uri: &str, tint: &str) -> BackgroundPreset {
    BackgroundPreset {
        id: id.to_string(),
        name: name.to_string(),
        uri: uri.to_string(),
        tint: tint.to_string(),
    }
}

/// The preset backgrounds offered on the background tab. The first entry is
/// the default at screen mount.
pub fn builtin_backgrounds() -> Vec<BackgroundPreset> {
    vec![
        preset(
            "road",
            "Morning road",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=600&fit=crop",
            "#4a6b8a",
        ),
        preset(
            "city",
            "City lights",
            "https://images.unsplash.com/photo-1502904550040-7534597429ae?w=800&h=600&fit=crop",
            "#6b5b7a",
        ),
        preset(
            "dark",
            "Night asphalt",
            "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=800&h=600&fit=crop",
            "#23272e",
        ),
        preset(
            "track",
            "Stadium track",
            "https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=800&h=600&fit=crop",
            "#8a5a4a",
        ),
    ]
}

/// The dark preset templates swap in to keep their white-on-black decorative
/// language readable.
pub fn dark_preset() -> BackgroundPreset {
    builtin_backgrounds()
        .into_iter()
        .find(|p| p.id == "dark")
        .unwrap_or_else(|| preset("dark", "Night asphalt", "", "#23272e"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_and_dark_exists() {
        let presets = builtin_backgrounds();
        assert_eq!(presets[0].id, "road");
        assert!(presets.iter().any(|p| p.id == "dark"));
        assert_eq!(dark_preset().id, "dark");
    }
}
