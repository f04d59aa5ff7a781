use gpui::{App, Window};

use crate::{components::select, theme::ThemeExt};

/// Registers the key bindings of every component.
pub fn init(cx: &mut App) {
    select::init(cx);
}

/// Applies the theme's base text size as the window's rem size.
pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
