use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Menu, SharedString,
    TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px,
    size,
};

use gpui_mosaic::{
    MosaicAssets, MosaicIconKind, assets,
    components::select::{SearchSelect, SelectOption},
    theme::{Theme, ThemeExt},
};

struct Root {
    focus_handle: FocusHandle,

    fruit: SharedString,
    disabled: bool,
}

actions!(window, [TabNext, TabPrev]);

fn fruits() -> Vec<SelectOption> {
    vec![
        SelectOption::new("apple").label("Apple"),
        SelectOption::new("banana").label("Banana"),
        SelectOption::new("cherry")
            .label("Cherry")
            .icon(MosaicIconKind::Checkmark),
        SelectOption::new("dragonfruit"),
    ]
}

impl Render for Root {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_mosaic::init_for_window(window, cx);

        let theme = cx.get_theme();
        let view = cx.entity();

        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .text_size(theme.layout.text.default_font.sizes.body)
            .text_color(theme.variants.active(cx).colors.text.primary)
            .bg(theme.variants.active(cx).colors.background.primary)
            .flex()
            .flex_col()
            .justify_center()
            .items_center()
            .gap(px(20.))
            .p(px(100.))
            // Uncontrolled.
            .child(
                SearchSelect::new("uncontrolled", fruits())
                    .default_value("banana")
                    .placeholder("Pick a fruit")
                    .icon(MosaicIconKind::ArrowDown)
                    .disabled(self.disabled)
                    .w(px(260.)),
            )
            // Controlled by the view.
            .child(
                SearchSelect::new("controlled", fruits())
                    .value(self.fruit.clone())
                    .accent("emerald-500")
                    .on_value_change(move |value, cx| {
                        view.update(cx, |this, cx| {
                            this.fruit = value.clone();
                            this.disabled = &**value == "dragonfruit";
                            cx.notify();
                        });
                    })
                    .w(px(260.)),
            )
            .child(format!("Controlled value: {:?}", self.fruit))
    }
}

fn main() {
    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![MosaicAssets])
        .run(|cx: &mut App| {
            gpui_mosaic::init(cx);

            cx.set_menus(vec![Menu {
                name: "Mosaic".into(),
                items: vec![],
            }]);

            cx.set_theme(Theme::DEFAULT);

            let bounds = Bounds::centered(None, size(px(620.), px(800.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|cx| Root {
                        focus_handle: cx.focus_handle(),
                        fruit: SharedString::default(),
                        disabled: false,
                    })
                },
            )
            .unwrap();

            cx.bind_keys([
                KeyBinding::new("tab", TabNext, None),
                KeyBinding::new("shift-tab", TabPrev, None),
            ]);

            cx.on_action(|_: &TabNext, cx| {
                cx.defer(|cx| {
                    if let Some(window) = cx.active_window() {
                        let _ = window.update(cx, |_, window, cx| window.focus_next(cx));
                    }
                })
            });

            cx.on_action(|_: &TabPrev, cx| {
                cx.defer(|cx| {
                    if let Some(window) = cx.active_window() {
                        let _ = window.update(cx, |_, window, cx| window.focus_prev(cx));
                    }
                })
            });

            cx.activate(true);
        });
}
