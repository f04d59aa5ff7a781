use std::{f32::consts::PI, rc::Rc, time::Duration};

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, KeyDownEvent, Length,
    MouseButton, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled,
    Window, div, prelude::FluentBuilder, px, radians, relative,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    ElementIdExt, MosaicIconKind,
    components::{Icon, IconSource},
    conditional_transition,
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt},
    theme::{ThemeExt, ThemeLayerKind},
    tokens::{Sizing, component_class_name, rgba_for_token},
    utils::{PixelsExt, disabled_transition},
};

mod options;
pub use options::*;

mod state;
pub use state::*;

mod item;
pub use item::*;

mod menu;
pub use menu::*;

pub const DEFAULT_PLACEHOLDER: &str = "Select...";

struct SelectStyles {
    width: Length,
}

impl Default for SelectStyles {
    fn default() -> Self {
        Self {
            width: Length::Auto,
        }
    }
}

/// A select control whose option list is narrowed down by typing.
///
/// Uncontrolled by default: the control keeps its own value, seeded from
/// [`SearchSelect::default_value`]. Passing [`SearchSelect::value`] makes
/// the caller the owner of the value, which should then be updated from
/// [`SearchSelect::on_value_change`].
#[derive(IntoElement)]
pub struct SearchSelect {
    id: ElementId,
    options: Vec<SelectOption>,
    default_value: Option<SharedString>,
    value: Option<SharedString>,
    on_value_change: Option<OnValueChangeFn>,
    placeholder: SharedString,
    disabled: bool,
    icon: Option<IconSource>,
    enable_clear: bool,
    /// Palette token, e.g. `"blue-500"`, overriding the theme accent.
    accent: Option<SharedString>,
    layer: ThemeLayerKind,
    click_behavior: ClickBehavior,
    style: SelectStyles,
}

impl SearchSelect {
    pub fn new(
        id: impl Into<ElementId>,
        options: impl IntoIterator<Item = impl Into<SelectOption>>,
    ) -> Self {
        Self {
            id: id.into(),
            options: options.into_iter().map(Into::into).collect(),
            default_value: None,
            value: None,
            on_value_change: None,
            placeholder: DEFAULT_PLACEHOLDER.into(),
            disabled: false,
            icon: None,
            enable_clear: true,
            accent: None,
            layer: ThemeLayerKind::Tertiary,
            click_behavior: ClickBehavior::default(),
            style: SelectStyles::default(),
        }
    }

    /// Initial value of an uncontrolled select. Ignored after the first render.
    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Makes the select controlled by the given value.
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_value_change(
        mut self,
        on_value_change: impl Fn(&SharedString, &mut App) + 'static,
    ) -> Self {
        self.on_value_change = Some(Rc::new(on_value_change));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Leading icon, sized and colored by the select.
    pub fn icon(mut self, icon: impl Into<IconSource>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether a clear button is shown while the select has a value.
    pub fn enable_clear(mut self, enable_clear: bool) -> Self {
        self.enable_clear = enable_clear;
        self
    }

    pub fn accent(mut self, token: impl Into<SharedString>) -> Self {
        self.accent = Some(token.into());
        self
    }

    pub fn option(mut self, option: impl Into<SelectOption>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = impl Into<SelectOption>>) -> Self {
        self.options.extend(options.into_iter().map(Into::into));
        self
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn w(mut self, width: impl Into<Length>) -> Self {
        self.style.width = width.into();
        self
    }

    /// Sizes the select to its content.
    pub fn w_auto(mut self) -> Self {
        self.style.width = Length::Auto;
        self
    }

    pub fn w_full(mut self) -> Self {
        self.style.width = relative(100.).into();
        self
    }
}

impl ClickBehaviorExt for SearchSelect {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

impl RenderOnce for SearchSelect {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.get_theme();
        let colors = &theme.variants.active(cx).colors;
        let primary_text_color = colors.text.primary;
        let secondary_text_color = colors.text.secondary;
        let subtle_text_color = colors.text.subtle;
        let theme_accent_color = colors.accent.primary;
        let font_family = theme.layout.text.default_font.family[0].clone();
        let line_height = theme.layout.text.default_font.line_height;
        let text_size = theme.layout.text.default_font.sizes.body;
        let corner_radius = theme.layout.corner_radii.md;
        let horizontal_padding = theme.layout.padding.lg;
        let menu_gap = theme.layout.padding.md;
        let control_height = theme.layout.size.lg;

        let background_color = self.layer.resolve(cx);
        let border_color = self.layer.next().resolve(cx);
        let border_hover_color = border_color.lerp(&primary_text_color, 0.07);
        let vertical_padding =
            control_height.padding_needed_for_height(window, text_size, line_height);

        let accent_color = match self.accent.as_ref() {
            Some(token) => rgba_for_token(token).unwrap_or_else(|| {
                tracing::warn!(%token, "accent token did not resolve, using theme accent");
                theme_accent_color
            }),
            None => theme_accent_color,
        };

        let state =
            SearchSelectState::from_window(self.id.clone(), window, cx, self.default_value.clone());
        state.sync_controlled_value(cx, self.value.clone());

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();

        let is_disabled = self.disabled;
        let is_focus = focus_handle.contains_focused(window, cx);

        if is_disabled && is_focus {
            window.blur();
        }

        let is_focus = is_focus && !is_disabled;

        if !is_focus {
            state.abandon_query(cx);
        }

        let selection = state.selection.read(cx);
        let query = selection.query().to_string();
        let is_editing = selection.is_editing();
        let value = selection.value().clone();

        let filtered = filter_options(&query, &self.options);
        let labels = LabelMap::build(&self.options);
        let filtered_len = filtered.len();

        let (display_text, display_color) = if is_editing && !query.is_empty() {
            (SharedString::from(query), primary_text_color)
        } else {
            match labels.label(value.clone()) {
                label if label.is_empty() => (self.placeholder.clone(), subtle_text_color),
                label => (label, primary_text_color),
            }
        };

        let menu_open = is_focus && filtered_len > 0;
        let show_clear = self.enable_clear && !value.is_empty() && !is_disabled;

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        let border_color_transition = conditional_transition!(
            self.id.with_suffix("state:transition:border_color"),
            window,
            cx,
            Duration::from_millis(400),
            {
                is_focus => accent_color,
                is_hover => border_hover_color,
                _ => border_color
            }
        );

        let menu_visible_transition = conditional_transition!(
            self.id.with_suffix("state:transition:menu_visible"),
            window,
            cx,
            Duration::from_millis(250),
            {
                menu_open => 1_f32,
                _ => 0.
            }
        );
        let menu_visible_delta = *menu_visible_transition.evaluate(window, cx);

        div()
            .id(self.id.clone())
            .key_context("SearchSelect")
            .debug_selector(|| component_class_name("SearchSelect", "root"))
            .cursor(if is_disabled {
                gpui::CursorStyle::OperationNotAllowed
            } else {
                gpui::CursorStyle::IBeam
            })
            .w(self.style.width)
            .h_auto()
            .pl(horizontal_padding)
            .pr(horizontal_padding)
            .pt(vertical_padding)
            .pb(vertical_padding)
            .gap(horizontal_padding)
            .flex()
            .items_center()
            .opacity(*disabled_transition.evaluate(window, cx))
            .text_size(text_size)
            .font_family(font_family)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(*border_color_transition.evaluate(window, cx)),
            )
            .when_some(self.icon.as_ref(), |this, icon| {
                this.child(
                    icon.resolve()
                        .size(Sizing::Lg.pixels())
                        .color(secondary_text_color)
                        .flex_none(),
                )
            })
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .truncate()
                    .text_color(display_color)
                    .child(display_text),
            )
            .when(show_clear, |this| {
                let state = state.clone();
                let on_value_change = self.on_value_change.clone();

                this.child(
                    div()
                        .id(self
                            .id
                            .with_suffix(component_class_name("SearchSelect", "clearIcon")))
                        .debug_selector(|| component_class_name("SearchSelect", "clearIcon"))
                        .flex_none()
                        .cursor_pointer()
                        .child(
                            Icon::new(MosaicIconKind::XCircle)
                                .size(px(14.))
                                .color(secondary_text_color),
                        )
                        .on_mouse_down(MouseButton::Left, |_event, window, cx| {
                            window.prevent_default();
                            cx.stop_propagation();
                        })
                        .on_click(move |_event, _window, cx| {
                            cx.stop_propagation();
                            state.clear(cx, on_value_change.as_ref());
                        }),
                )
            })
            .child(
                Icon::new(MosaicIconKind::ArrowDown)
                    .size(px(11.))
                    .color(secondary_text_color)
                    .flex_none()
                    .rotate(radians(menu_visible_delta * PI)),
            )
            .when(menu_visible_delta != 0., |this| {
                this.child(
                    div()
                        .absolute()
                        .top_full()
                        .left_0()
                        .w_full()
                        .pt(menu_gap)
                        .opacity(menu_visible_delta)
                        .child(
                            SelectMenu::new(
                                self.id.with_suffix("menu"),
                                state.clone(),
                                filtered.clone(),
                            )
                            .layer(self.layer)
                            .on_value_change(self.on_value_change.clone()),
                        ),
                )
            })
            .when(!is_disabled, |this| {
                let behavior = self.click_behavior;
                let focus_handle_on_mouse_down = focus_handle.clone();

                let state_on_key = state.clone();
                let state_on_up = state.clone();
                let state_on_down = state.clone();
                let state_on_confirm = state.clone();
                let state_on_dismiss = state.clone();
                let on_value_change = self.on_value_change.clone();

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, cx| {
                        *this = *hover;
                        cx.notify();
                    });
                })
                .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                    behavior.apply(window, cx);
                    focus_handle_on_mouse_down.focus(window, cx);
                })
                .on_action(move |_: &MoveUp, _window, cx| {
                    state_on_up.move_highlight_up(cx, filtered_len);
                })
                .on_action(move |_: &MoveDown, _window, cx| {
                    state_on_down.move_highlight_down(cx, filtered_len);
                })
                .on_action(move |_: &Confirm, window, cx| {
                    let Some(option) = state_on_confirm
                        .highlighted(cx)
                        .and_then(|index| filtered.get(index))
                    else {
                        return;
                    };

                    state_on_confirm.commit(cx, option.value.clone(), on_value_change.as_ref());
                    window.blur();
                })
                .on_action(move |_: &Dismiss, window, cx| {
                    state_on_dismiss.abandon_query(cx);
                    window.blur();
                })
                .on_key_down(move |event: &KeyDownEvent, _window, cx| {
                    let keystroke = &event.keystroke;
                    let modifiers = &keystroke.modifiers;

                    if modifiers.control || modifiers.platform || modifiers.function {
                        return;
                    }

                    if keystroke.key == "backspace" {
                        state_on_key.edit_query(cx, |query| {
                            query.pop();
                        });
                        cx.stop_propagation();
                        return;
                    }

                    let Some(key_char) = keystroke.key_char.as_ref() else {
                        return;
                    };

                    if key_char.chars().any(char::is_control) {
                        return;
                    }

                    state_on_key.edit_query(cx, |query| query.push_str(key_char));
                    cx.stop_propagation();
                })
                .track_focus(&focus_handle)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_select_defaults() {
        let select = SearchSelect::new("select", ["a", "b"]);

        assert_eq!(select.options.len(), 2);
        assert_eq!(&*select.placeholder, DEFAULT_PLACEHOLDER);
        assert!(select.enable_clear);
        assert!(!select.disabled);
        assert!(select.value.is_none());
        assert!(select.default_value.is_none());
        assert!(matches!(select.layer, ThemeLayerKind::Tertiary));
    }

    #[test]
    fn test_search_select_builder() {
        let select = SearchSelect::new("select", Vec::<SelectOption>::new())
            .option(("a", "Apple"))
            .options([("b", "Banana"), ("c", "Cherry")])
            .default_value("a")
            .value("b")
            .placeholder("Pick a fruit")
            .enable_clear(false)
            .disabled(true)
            .icon(MosaicIconKind::Checkmark)
            .on_value_change(|_value, _cx| {});

        assert_eq!(select.options.len(), 3);
        assert_eq!(&*select.options[1].value, "b");
        assert_eq!(select.default_value.as_deref(), Some("a"));
        assert_eq!(select.value.as_deref(), Some("b"));
        assert_eq!(&*select.placeholder, "Pick a fruit");
        assert!(!select.enable_clear);
        assert!(select.disabled);
        assert!(select.icon.is_some());
        assert!(select.on_value_change.is_some());
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::cell::RefCell;

    use super::*;
    use gpui::{AppContext, Context, Modifiers, TestAppContext, VisualTestContext};

    use crate::theme::Theme;

    type Calls = Rc<RefCell<Vec<SharedString>>>;

    struct SearchSelectTestView {
        disabled: bool,
        enable_clear: bool,
        calls: Calls,
    }

    impl gpui::Render for SearchSelectTestView {
        fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            crate::init_for_window(window, cx);

            let calls = self.calls.clone();

            div().size_full().child(
                SearchSelect::new(
                    "fruit",
                    [("a", "Apple"), ("b", "Banana"), ("c", "Cherry")],
                )
                .default_value("b")
                .icon(IconSource::factory(|| Icon::new(MosaicIconKind::Checkmark)))
                .accent("blue-500")
                .enable_clear(self.enable_clear)
                .disabled(self.disabled)
                .on_value_change(move |value, _cx| calls.borrow_mut().push(value.clone()))
                .w(px(240.)),
            )
        }
    }

    fn open_test_window(
        cx: &mut TestAppContext,
        disabled: bool,
        enable_clear: bool,
    ) -> (VisualTestContext, Calls) {
        let calls = Calls::default();

        let window = cx.update(|cx| {
            crate::init(cx);
            cx.set_theme(Theme::DEFAULT);

            let calls = calls.clone();
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| SearchSelectTestView {
                    disabled,
                    enable_clear,
                    calls,
                })
            })
            .unwrap()
        });

        let mut cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        (cx, calls)
    }

    fn click_part(cx: &mut VisualTestContext, part: &str) {
        let bounds = cx
            .debug_bounds(component_class_name("SearchSelect", part).leak())
            .unwrap_or_else(|| panic!("SearchSelect part `{part}` should be rendered"));

        cx.simulate_click(bounds.center(), Modifiers::none());
        cx.run_until_parked();
    }

    fn is_part_rendered(cx: &mut VisualTestContext, part: &str) -> bool {
        cx.debug_bounds(component_class_name("SearchSelect", part).leak()).is_some()
    }

    #[gpui::test]
    fn test_typing_filters_and_enter_commits(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, false, true);

        click_part(&mut cx, "root");
        cx.simulate_keystrokes("c h");
        cx.simulate_keystrokes("enter");

        // "Cherry" is the only match, so the first highlighted row is "c".
        assert_eq!(*calls.borrow(), vec![SharedString::from("c")]);
    }

    #[gpui::test]
    fn test_arrow_keys_pick_a_row(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, false, true);

        click_part(&mut cx, "root");
        cx.simulate_keystrokes("down down enter");

        assert_eq!(*calls.borrow(), vec![SharedString::from("b")]);
    }

    #[gpui::test]
    fn test_backspace_widens_the_filter(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, false, true);

        click_part(&mut cx, "root");
        cx.simulate_keystrokes("c x backspace enter");

        assert_eq!(*calls.borrow(), vec![SharedString::from("c")]);
    }

    #[gpui::test]
    fn test_escape_drops_query_and_highlight(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, false, true);

        click_part(&mut cx, "root");
        cx.simulate_keystrokes("c h escape");

        click_part(&mut cx, "root");
        cx.simulate_keystrokes("enter");

        assert!(
            calls.borrow().is_empty(),
            "Enter without a highlighted row should not commit"
        );
    }

    #[gpui::test]
    fn test_clear_button_invokes_callback_once(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, false, true);

        assert!(is_part_rendered(&mut cx, "clearIcon"));
        click_part(&mut cx, "clearIcon");

        assert_eq!(*calls.borrow(), vec![SharedString::default()]);
        assert!(
            !is_part_rendered(&mut cx, "clearIcon"),
            "Clear button should disappear once the value is empty"
        );
    }

    #[gpui::test]
    fn test_clear_button_hidden_when_disabled_by_builder(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, false, false);

        assert!(!is_part_rendered(&mut cx, "clearIcon"));
        assert!(calls.borrow().is_empty());
    }

    #[gpui::test]
    fn test_disabled_select_ignores_input(cx: &mut TestAppContext) {
        let (mut cx, calls) = open_test_window(cx, true, true);

        assert!(
            !is_part_rendered(&mut cx, "clearIcon"),
            "Disabled select should not offer clearing"
        );

        click_part(&mut cx, "root");
        cx.simulate_keystrokes("c h enter");

        assert!(calls.borrow().is_empty());
    }
}
