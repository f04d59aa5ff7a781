use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, MouseButton, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    components::{Icon, IconSource, select::SelectOption},
    theme::{ThemeExt, ThemeLayerKind},
    tokens::{Sizing, Spacing},
    utils::RgbaExt,
};

type OnClickFn = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;
type OnHoverFn = Rc<dyn Fn(&bool, &mut Window, &mut App)>;

/// A single row of a select menu.
#[derive(IntoElement)]
pub struct SelectItem {
    id: ElementId,
    option: SelectOption,
    layer: ThemeLayerKind,
    selected: bool,
    highlighted: bool,
    on_click: Option<OnClickFn>,
    on_hover: Option<OnHoverFn>,
}

impl SelectItem {
    pub fn new(id: impl Into<ElementId>, option: SelectOption) -> Self {
        Self {
            id: id.into(),
            option,
            layer: ThemeLayerKind::Tertiary,
            selected: false,
            highlighted: false,
            on_click: None,
            on_hover: None,
        }
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    /// Marks the row as holding the current value.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Marks the row as the target of keyboard navigation.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn on_hover(mut self, on_hover: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_hover = Some(Rc::new(on_hover));
        self
    }
}

/// Leading icon of a row, sized like the select's own icon.
fn row_icon(icon: &IconSource) -> Icon {
    icon.resolve()
        .size(Sizing::Lg.pixels())
        .mr(Spacing::Xs.pixels())
        .flex_none()
}

impl RenderOnce for SelectItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.get_theme();
        let colors = &theme.variants.active(cx).colors;
        let primary_text_color = colors.text.primary;
        let selected_color = colors.accent.primary.alpha(0.18);
        let highlight_color = self.layer.next().resolve(cx);
        let corner_radius = theme.layout.corner_radii.sm;
        let horizontal_padding = theme.layout.padding.lg - theme.layout.padding.md;
        let vertical_padding = theme.layout.padding.md;

        let background_color = if self.highlighted {
            Some(highlight_color)
        } else if self.selected {
            Some(selected_color)
        } else {
            None
        };

        div()
            .id(self.id)
            .w_full()
            .min_w_0()
            .flex()
            .items_center()
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .pt(vertical_padding)
            .pb(vertical_padding)
            .cursor_pointer()
            .text_color(primary_text_color)
            .when_some(background_color, |this, background_color| {
                this.child(
                    squircle()
                        .absolute_expand()
                        .rounded(corner_radius)
                        .bg(background_color),
                )
            })
            .when_some(self.option.icon.as_ref(), |this, icon| {
                this.child(row_icon(icon).color(primary_text_color))
            })
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .truncate()
                    .child(self.option.display_text().clone()),
            )
            // Keeps focus on the select while a row is pressed.
            .on_mouse_down(MouseButton::Left, |_event, window, _cx| {
                window.prevent_default();
            })
            .when_some(self.on_hover, |this, on_hover| {
                this.on_hover(move |hovered, window, cx| on_hover(hovered, window, cx))
            })
            .when_some(self.on_click, |this, on_click| {
                this.on_click(move |event, window, cx| on_click(event, window, cx))
            })
    }
}
