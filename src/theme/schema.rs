use std::{
    fs,
    ops::{Deref, DerefMut},
    path::Path,
    sync::LazyLock,
};

use anyhow::Context as _;
use gpui::{AbsoluteLength, App, DefiniteLength, Global, Pixels, Rgba, SharedString};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{
    de_abs_length, de_def_length, de_pixels, de_string_or_non_empty_list, de_variants,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: SharedString,
    pub layout: ThemeLayout,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| {
                Theme::from_string(include_str!($path)).expect("built-in theme should be valid")
            });
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

impl Theme {
    generate_builtin_themes!(["../../themes/default.json", DEFAULT]);

    /// Parses a theme from its JSON representation.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// Reads and parses a theme file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Theme> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("could not read theme file \"{}\"", path.display()))?;
        let theme = Self::from_string(contents)
            .with_context(|| format!("invalid theme file \"{}\"", path.display()))?;

        tracing::debug!(theme = %theme.name, path = %path.display(), "loaded theme");

        Ok(theme)
    }
}

impl Global for Theme {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeLayout {
    pub text: ThemeText,
    pub corner_radii: ThemeCornerRadii,
    pub size: ThemeSize,
    pub padding: ThemePadding,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeText {
    #[serde(deserialize_with = "de_pixels")]
    pub base_size: Pixels,
    pub default_font: ThemeFont,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFont {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 1]>,
    #[serde(deserialize_with = "de_def_length")]
    pub line_height: DefiniteLength,
    pub sizes: ThemeTextSizes,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextSizes {
    #[serde(deserialize_with = "de_abs_length")]
    pub body: AbsoluteLength,
    #[serde(deserialize_with = "de_abs_length")]
    pub caption: AbsoluteLength,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeCornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeSize {
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemePadding {
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant selected by [`ActiveVariantId`], falling back to
    /// the first one when the id is unset or out of range.
    pub fn active(&self, cx: &App) -> &ThemeVariant {
        let index = cx
            .try_global::<ActiveVariantId>()
            .map_or(0, |active| active.0);

        self.variants.get(index).unwrap_or(&self.variants[0])
    }

    /// Index of the first variant of the given kind.
    pub fn position(&self, kind: ThemeVariantKind) -> Option<usize> {
        self.variants.iter().position(|variant| variant.kind == kind)
    }
}

pub struct ActiveVariantId(pub usize);

impl Global for ActiveVariantId {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeVariantKind,
    pub colors: ThemeColors,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariantKind {
    Dark,
    Light,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeColors {
    pub background: ThemeBackgroundColors,
    pub accent: ThemeAccentColors,
    pub text: ThemeTextColors,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeBackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub quaternary: Rgba,
    pub quinary: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeAccentColors {
    pub primary: Rgba,
    pub destructive: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeTextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Placeholder and hint text.
    pub subtle: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_parses() {
        let theme = Theme::from_string(include_str!("../../themes/default.json")).unwrap();

        assert_eq!(theme.name, SharedString::from("Mosaic"));
        assert_eq!(theme.variants.variants.len(), 2);
        assert_eq!(theme.variants.position(ThemeVariantKind::Light), Some(1));
        assert!(theme.layout.padding.sm <= theme.layout.padding.md);
        assert!(theme.layout.padding.md <= theme.layout.padding.lg);
    }

    #[test]
    fn test_theme_without_variants_is_rejected() {
        let mut json: serde_json::Value =
            serde_json::from_str(include_str!("../../themes/default.json")).unwrap();
        json["variants"] = serde_json::Value::Array(vec![]);

        assert!(Theme::from_string(json.to_string()).is_err());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let error = Theme::from_path("themes/does_not_exist.json").unwrap_err();
        assert!(error.to_string().contains("does_not_exist.json"));
    }
}
