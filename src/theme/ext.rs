use gpui::App;

use crate::theme::{ActiveVariantId, Theme, ThemeVariantKind};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Activates the first variant of the given kind.
    ///
    /// Returns `false`, leaving the active variant untouched, if the theme
    /// has no variant of that kind.
    fn set_theme_variant(&mut self, kind: ThemeVariantKind) -> bool;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_theme_variant(&mut self, kind: ThemeVariantKind) -> bool {
        let Some(index) = self.get_theme().variants.position(kind) else {
            tracing::warn!(?kind, "theme has no variant of this kind");
            return false;
        };

        self.set_global(ActiveVariantId(index));
        true
    }
}
