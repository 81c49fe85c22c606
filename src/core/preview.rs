use crate::core::{CustomizationOptions, PreviewStyle, StyleProperty, SurfaceId, Surfaces};
use std::collections::HashMap;

pub const DEFAULT_FONT_SIZE_PX: f64 = 12.0;

/// PDF font identifier to CSS font stack.
const FONT_FAMILIES: [(&str, &str); 3] = [
    ("Times-Roman", "Times New Roman, serif"),
    ("Helvetica", "Helvetica, Arial, sans-serif"),
    ("Courier", "Courier New, monospace"),
];
const DEFAULT_FONT_FAMILY: &str = "Times New Roman, serif";

/// Liturgical color identifier to swatch.
const LITURGICAL_COLORS: [(&str, &str); 6] = [
    ("branco", "#ffffff"),
    ("vermelho", "#c41e3a"),
    ("verde", "#2d5016"),
    ("roxo", "#6c2e91"),
    ("dourado", "#d4af37"),
    ("preto", "#1a1a1a"),
];
const DEFAULT_COLOR_HEX: &str = "#2d5016";

pub fn font_family_css(font_family_id: &str) -> &'static str {
    FONT_FAMILIES
        .iter()
        .find(|(id, _)| *id == font_family_id)
        .map(|(_, css)| *css)
        .unwrap_or(DEFAULT_FONT_FAMILY)
}

pub fn liturgical_color_hex(color_id: &str) -> &'static str {
    LITURGICAL_COLORS
        .iter()
        .find(|(id, _)| *id == color_id)
        .map(|(_, hex)| *hex)
        .unwrap_or(DEFAULT_COLOR_HEX)
}

pub fn compute_preview(options: &CustomizationOptions) -> PreviewStyle {
    PreviewStyle {
        font_size_px: options.font_size_px,
        font_family_css: font_family_css(&options.font_family_id),
        color_hex: liturgical_color_hex(&options.liturgical_color_id),
    }
}

/// Writes a computed style onto the preview and color indicator surfaces.
pub fn apply_preview<S: Surfaces + ?Sized>(style: &PreviewStyle, surfaces: &mut S) {
    surfaces.set_style(
        SurfaceId::Preview,
        StyleProperty::FontSize,
        &format!("{}px", style.font_size_px),
    );
    surfaces.set_style(
        SurfaceId::Preview,
        StyleProperty::FontFamily,
        style.font_family_css,
    );
    surfaces.set_style(
        SurfaceId::ColorIndicator,
        StyleProperty::BackgroundColor,
        style.color_hex,
    );
}

impl CustomizationOptions {
    /// Reads the customization form fields, falling back to defaults for
    /// anything missing or blank.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let field = |name: &str| {
            fields
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let font_size_px = field("font_size")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_FONT_SIZE_PX);

        Self {
            font_size_px,
            font_family_id: field("font_family")
                .map(str::to_string)
                .unwrap_or(defaults.font_family_id),
            liturgical_color_id: field("liturgical_color")
                .map(str::to_string)
                .unwrap_or(defaults.liturgical_color_id),
        }
    }
}
