use gpui::Rgba;

use super::TokenError;

/// Shade used by palette keys that have no tonal scale (`white`, `black`, ...).
pub const NONE_SHADE: &str = "none";

/// Shades available on every chromatic palette key.
pub static SHADES: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

struct PaletteEntry {
    key: &'static str,
    /// `None` for achromatic keys, which only accept [`NONE_SHADE`].
    hex_500: Option<&'static str>,
}

impl PaletteEntry {
    const fn chromatic(key: &'static str, hex_500: &'static str) -> Self {
        Self {
            key,
            hex_500: Some(hex_500),
        }
    }

    const fn achromatic(key: &'static str) -> Self {
        Self { key, hex_500: None }
    }

    fn supports(&self, shade: &str) -> bool {
        match self.hex_500 {
            Some(_) => SHADES.contains(&shade),
            None => shade == NONE_SHADE,
        }
    }
}

static PALETTE: [PaletteEntry; 25] = [
    PaletteEntry::chromatic("slate", "#64748b"),
    PaletteEntry::chromatic("gray", "#6b7280"),
    PaletteEntry::chromatic("zinc", "#71717a"),
    PaletteEntry::chromatic("neutral", "#737373"),
    PaletteEntry::chromatic("stone", "#78716c"),
    PaletteEntry::chromatic("red", "#ef4444"),
    PaletteEntry::chromatic("orange", "#f97316"),
    PaletteEntry::chromatic("amber", "#f59e0b"),
    PaletteEntry::chromatic("yellow", "#eab308"),
    PaletteEntry::chromatic("lime", "#84cc16"),
    PaletteEntry::chromatic("green", "#22c55e"),
    PaletteEntry::chromatic("emerald", "#10b981"),
    PaletteEntry::chromatic("teal", "#14b8a6"),
    PaletteEntry::chromatic("cyan", "#06b6d4"),
    PaletteEntry::chromatic("sky", "#0ea5e9"),
    PaletteEntry::chromatic("blue", "#3b82f6"),
    PaletteEntry::chromatic("indigo", "#6366f1"),
    PaletteEntry::chromatic("violet", "#8b5cf6"),
    PaletteEntry::chromatic("purple", "#a855f7"),
    PaletteEntry::chromatic("fuchsia", "#d946ef"),
    PaletteEntry::chromatic("pink", "#ec4899"),
    PaletteEntry::chromatic("rose", "#f43f5e"),
    PaletteEntry::achromatic("white"),
    PaletteEntry::achromatic("black"),
    PaletteEntry::achromatic("transparent"),
];

fn palette_entry(base: &str) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.key == base)
}

/// Returns every palette key, chromatic keys first.
pub fn palette_keys() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|entry| entry.key)
}

/// The shades a palette key accepts, or `None` if the key is unknown.
pub fn shades_for(base: &str) -> Option<&'static [&'static str]> {
    static NONE_ONLY: [&str; 1] = [NONE_SHADE];

    palette_entry(base).map(|entry| match entry.hex_500 {
        Some(_) => &SHADES[..],
        None => &NONE_ONLY[..],
    })
}

/// Class names derived from a single palette color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorClassSet {
    pub bg_color: String,
    pub hover_bg_color: String,
    pub select_bg_color: String,
    pub text_color: String,
    pub select_text_color: String,
    pub hover_text_color: String,
    pub border_color: String,
    pub select_border_color: String,
    pub hover_border_color: String,
    pub ring_color: String,
    pub stroke_color: String,
    pub fill_color: String,
}

impl ColorClassSet {
    fn from_color(color: &str) -> Self {
        Self {
            bg_color: format!("bg-{color}"),
            hover_bg_color: format!("hover:bg-{color}"),
            select_bg_color: format!("ui-selected:bg-{color}"),
            text_color: format!("text-{color}"),
            select_text_color: format!("ui-selected:text-{color}"),
            hover_text_color: format!("hover:text-{color}"),
            border_color: format!("border-{color}"),
            select_border_color: format!("ui-selected:border-{color}"),
            hover_border_color: format!("hover:border-{color}"),
            ring_color: format!("ring-{color}"),
            stroke_color: format!("stroke-{color}"),
            fill_color: format!("fill-{color}"),
        }
    }

    /// Iterates over every class name in the set.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.bg_color,
            &self.hover_bg_color,
            &self.select_bg_color,
            &self.text_color,
            &self.select_text_color,
            &self.hover_text_color,
            &self.border_color,
            &self.select_border_color,
            &self.hover_border_color,
            &self.ring_color,
            &self.stroke_color,
            &self.fill_color,
        ]
        .into_iter()
        .map(String::as_str)
    }
}

/// Resolves a palette key and shade into its class names.
///
/// A missing shade means [`NONE_SHADE`], which only achromatic keys accept.
pub fn resolve_color(base: &str, shade: Option<&str>) -> Result<ColorClassSet, TokenError> {
    let entry = palette_entry(base).ok_or_else(|| TokenError::UnknownPalette(base.to_string()))?;
    let shade = shade.unwrap_or(NONE_SHADE);

    if !entry.supports(shade) {
        return Err(TokenError::UnknownShade {
            base: base.to_string(),
            shade: shade.to_string(),
        });
    }

    let color = if shade == NONE_SHADE {
        base.to_string()
    } else {
        format!("{base}-{shade}")
    };

    Ok(ColorClassSet::from_color(&color))
}

/// Resolves a Tailwind color class such as `"bg-blue-500"` or `"bg-white"`.
pub fn color_variants_from_class_name(class_name: &str) -> Result<ColorClassSet, TokenError> {
    let mut parts = class_name.split('-').skip(1);

    let base = parts
        .next()
        .ok_or_else(|| TokenError::UnknownPalette(class_name.to_string()))?;
    let shade = parts.next().filter(|shade| !shade.is_empty());

    resolve_color(base, shade)
}

/// Resolves a theme color value such as `"blue-500"`.
pub fn color_variants_from_theme_value(value: &str) -> Result<ColorClassSet, TokenError> {
    let mut parts = value.split('-');

    // `split` always yields at least one part.
    let base = parts.next().unwrap_or_default();
    let shade = parts.next().filter(|shade| !shade.is_empty());

    resolve_color(base, shade)
}

/// Maps any color class onto the border color class of the same color.
pub fn to_border_color_class(class_name: &str) -> Result<String, TokenError> {
    color_variants_from_class_name(class_name).map(|set| set.border_color)
}

/// Returns the hex string for a `"<base>-<shade>"` token.
///
/// Only the 500 tier is available, so the shade part is not consulted.
/// Tokens that don't split into exactly two parts, and unknown or achromatic
/// keys, resolve to an empty string.
pub fn hex_for_token(token: &str) -> &'static str {
    let mut parts = token.split('-');

    let (Some(base), Some(_shade), None) = (parts.next(), parts.next(), parts.next()) else {
        return "";
    };

    palette_entry(base)
        .and_then(|entry| entry.hex_500)
        .unwrap_or_default()
}

/// Like [`hex_for_token`], but parsed into a color.
pub fn rgba_for_token(token: &str) -> Option<Rgba> {
    let hex = hex_for_token(token);
    if hex.is_empty() {
        return None;
    }

    Rgba::try_from(hex).ok()
}
