#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::AssetProvider;

        /// Icons bundled with the crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct MosaicAssets;

        impl AssetProvider for MosaicAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|file| file.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(Self::iter()
                    .filter(|asset| asset.starts_with(path))
                    .map(SharedString::from)
                    .collect())
            }
        }
    }
);

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy, Debug)]
#[func(pub fn path(&self) -> SharedString)]
pub enum MosaicIconKind {
    /// Chevron shown at the trailing edge of dropdown triggers.
    #[assoc(path = "icons/arrow_down.svg".into())]
    ArrowDown,

    /// Circled cross used by clear affordances.
    #[assoc(path = "icons/x_circle.svg".into())]
    XCircle,

    /// Marks the selected row of a list.
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,
}

impl From<MosaicIconKind> for SharedString {
    fn from(kind: MosaicIconKind) -> Self {
        kind.path()
    }
}
