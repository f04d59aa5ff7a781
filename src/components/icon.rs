use std::rc::Rc;

use gpui::{
    Edges, Hsla, IntoElement, Length, Radians, RenderOnce, SharedString, SizeRefinement, Styled,
    Transformation, prelude::FluentBuilder, px, svg,
};

use crate::{MosaicIconKind, theme::ThemeExt};

/// An SVG icon component with configurable size, color, and rotation.
#[derive(IntoElement, Clone)]
pub struct Icon {
    path: SharedString,
    pub(crate) size: SizeRefinement<Length>,
    rotate: Radians,
    color: Option<Hsla>,
    flex_none: bool,
    margin: Edges<Option<Length>>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: SizeRefinement::default(),
            rotate: Radians(0.),
            color: None,
            flex_none: false,
            margin: Edges::default(),
        }
    }

    pub fn path(&self) -> &SharedString {
        &self.path
    }

    pub fn ml(mut self, margin: impl Into<Length>) -> Self {
        self.margin.left = Some(margin.into());
        self
    }

    pub fn mr(mut self, margin: impl Into<Length>) -> Self {
        self.margin.right = Some(margin.into());
        self
    }

    /// Sets uniform width and height for the icon.
    pub fn size(mut self, size: impl Into<Length>) -> Self {
        let size = size.into();
        self.size = SizeRefinement {
            width: Some(size),
            height: Some(size),
        };
        self
    }

    /// Sets a custom color, overriding the theme's primary text color.
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn rotate(mut self, rotate: impl Into<Radians>) -> Self {
        self.rotate = rotate.into();
        self
    }

    /// Prevents the icon from growing or shrinking inside a flex row.
    /// [Docs](https://tailwindcss.com/docs/flex#none)
    pub fn flex_none(mut self) -> Self {
        self.flex_none = true;
        self
    }
}

impl From<MosaicIconKind> for Icon {
    fn from(kind: MosaicIconKind) -> Self {
        Icon::new(kind)
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let width = self.size.width.unwrap_or(px(14.).into());
        let height = self.size.height.unwrap_or(px(14.).into());

        svg()
            .path(self.path)
            .text_color(primary_text_color)
            .w(width)
            .min_w(width)
            .h(height)
            .min_h(height)
            .when_some(self.margin.left, |this, v| this.ml(v))
            .when_some(self.margin.right, |this, v| this.mr(v))
            .with_transformation(Transformation::rotate(self.rotate))
            .when_some(self.color, |this, color| this.text_color(color))
            .when(self.flex_none, |this| this.flex_none())
    }
}

/// An icon given to a component, either ready-made or built on demand.
///
/// The component resolves it once per render and then applies its own
/// sizing and color on top.
#[derive(Clone)]
pub enum IconSource {
    Prebuilt(Icon),
    Factory(Rc<dyn Fn() -> Icon>),
}

impl IconSource {
    pub fn factory(factory: impl Fn() -> Icon + 'static) -> Self {
        Self::Factory(Rc::new(factory))
    }

    pub fn resolve(&self) -> Icon {
        match self {
            Self::Prebuilt(icon) => icon.clone(),
            Self::Factory(factory) => factory(),
        }
    }
}

impl From<Icon> for IconSource {
    fn from(icon: Icon) -> Self {
        Self::Prebuilt(icon)
    }
}

impl From<MosaicIconKind> for IconSource {
    fn from(kind: MosaicIconKind) -> Self {
        Self::Prebuilt(kind.into())
    }
}
