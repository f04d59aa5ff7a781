use gpui::{ElementId, InteractiveElement, ParentElement, Styled, div, prelude::*, px};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt,
    components::select::{OnValueChangeFn, SearchSelectState, SelectItem, SelectOption},
    extensions::deferrable::{Deferrable, DeferredConfig},
    theme::{ThemeExt, ThemeLayerKind},
    tokens::component_class_name,
};

/// Drop-down list of the options that match the current query.
#[derive(IntoElement)]
pub struct SelectMenu {
    id: ElementId,
    layer: ThemeLayerKind,
    state: SearchSelectState,
    options: Vec<SelectOption>,
    on_value_change: Option<OnValueChangeFn>,
    deferred_config: DeferredConfig,
}

impl SelectMenu {
    pub fn new(
        id: impl Into<ElementId>,
        state: SearchSelectState,
        options: Vec<SelectOption>,
    ) -> Self {
        Self {
            id: id.into(),
            layer: ThemeLayerKind::Tertiary,
            state,
            options,
            on_value_change: None,
            deferred_config: DeferredConfig::default(),
        }
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn on_value_change(mut self, on_value_change: Option<OnValueChangeFn>) -> Self {
        self.on_value_change = on_value_change;
        self
    }
}

impl Deferrable for SelectMenu {
    const DEFAULT_PRIORITY: usize = 1;

    fn deferred_config_mut(&mut self) -> &mut DeferredConfig {
        &mut self.deferred_config
    }

    fn deferred_config(&self) -> &DeferredConfig {
        &self.deferred_config
    }
}

impl RenderOnce for SelectMenu {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let corner_radius = cx.get_theme().layout.corner_radii.md;
        let padding = cx.get_theme().layout.padding.sm;

        let value = self.state.value(cx);
        let highlighted = self.state.highlighted(cx);

        let rows = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let state_on_hover = self.state.clone();
                let state_on_click = self.state.clone();
                let on_value_change = self.on_value_change.clone();
                let option_value = option.value.clone();

                SelectItem::new(
                    self.id
                        .with_suffix(component_class_name("SelectItem", "root"))
                        .with_index(index),
                    option.clone(),
                )
                .layer(self.layer)
                .selected(option.value == value)
                .highlighted(highlighted == Some(index))
                .on_hover(move |hovered, _window, cx| {
                    if *hovered {
                        state_on_hover.set_highlighted(cx, Some(index));
                    }
                })
                .on_click(move |_event, window, cx| {
                    state_on_click.commit(cx, option_value.clone(), on_value_change.as_ref());
                    window.blur();
                })
            })
            .collect::<Vec<_>>();

        let menu = div()
            .id(self.id.clone())
            .occlude()
            .w_full()
            .flex()
            .flex_col()
            .p(padding)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border_color(border_color)
                    .border(px(1.))
                    .border_inside(),
            )
            .children(rows);

        self.apply_deferred(menu)
    }
}
