#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Pixels, px};

use super::TokenError;

/// Pixels per step of the spacing scale.
pub const SPACING_UNIT: u32 = 4;

/// Reads the pixel value of a spacing or sizing class such as `"mt-4"`.
///
/// The trailing numeral is multiplied by [`SPACING_UNIT`]. A non-numeric
/// trailing segment (`"mt-x"`, `"w-full"`) is a configuration error.
/// Fractional steps such as `"p-0.5"` are not supported and are reported
/// the same way.
pub fn pixels_from_class_name(class_name: &str) -> Result<u32, TokenError> {
    let last = class_name.rsplit('-').next().unwrap_or(class_name);

    last.parse::<u32>()
        .ok()
        .and_then(|steps| steps.checked_mul(SPACING_UNIT))
        .ok_or_else(|| TokenError::InvalidDimension(class_name.to_string()))
}

/// Named steps of the spacing scale used for paddings and margins.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn step(&self) -> u32)]
pub enum Spacing {
    #[assoc(step = 1)]
    TwoXs,
    #[assoc(step = 2)]
    Xs,
    #[assoc(step = 3)]
    Sm,
    #[assoc(step = 4)]
    Md,
    #[assoc(step = 5)]
    Lg,
    #[assoc(step = 6)]
    Xl,
    #[assoc(step = 8)]
    TwoXl,
    #[assoc(step = 10)]
    ThreeXl,
    #[assoc(step = 12)]
    FourXl,
}

impl Spacing {
    fn class(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.step())
    }

    pub fn padding_left(&self) -> String {
        self.class("pl")
    }

    pub fn padding_right(&self) -> String {
        self.class("pr")
    }

    pub fn padding_top(&self) -> String {
        self.class("pt")
    }

    pub fn padding_bottom(&self) -> String {
        self.class("pb")
    }

    pub fn padding_x(&self) -> String {
        self.class("px")
    }

    pub fn padding_y(&self) -> String {
        self.class("py")
    }

    pub fn margin_left(&self) -> String {
        self.class("ml")
    }

    pub fn margin_right(&self) -> String {
        self.class("mr")
    }

    pub fn margin_top(&self) -> String {
        self.class("mt")
    }

    pub fn margin_bottom(&self) -> String {
        self.class("mb")
    }

    pub fn pixels(&self) -> Pixels {
        px((self.step() * SPACING_UNIT) as f32)
    }
}

/// Named steps of the sizing scale used for icons and fixed-size elements.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn step(&self) -> u32)]
pub enum Sizing {
    #[assoc(step = 3)]
    Xs,
    #[assoc(step = 4)]
    Sm,
    #[assoc(step = 5)]
    Md,
    #[assoc(step = 6)]
    Lg,
    #[assoc(step = 8)]
    Xl,
}

impl Sizing {
    pub fn height(&self) -> String {
        format!("h-{}", self.step())
    }

    pub fn width(&self) -> String {
        format!("w-{}", self.step())
    }

    pub fn pixels(&self) -> Pixels {
        px((self.step() * SPACING_UNIT) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_from_class_name() {
        assert_eq!(pixels_from_class_name("mt-4"), Ok(16));
        assert_eq!(pixels_from_class_name("pl-0"), Ok(0));
        assert_eq!(pixels_from_class_name("-mt-2"), Ok(8));
        assert_eq!(pixels_from_class_name("12"), Ok(48));
    }

    #[test]
    fn test_pixels_from_class_name_rejects_non_numeric() {
        assert_eq!(
            pixels_from_class_name("mt-x"),
            Err(TokenError::InvalidDimension("mt-x".into()))
        );
        assert!(pixels_from_class_name("w-full").is_err());
        assert!(pixels_from_class_name("mt-").is_err());
        assert!(pixels_from_class_name("p-0.5").is_err());
    }

    #[test]
    fn test_spacing_classes() {
        assert_eq!(Spacing::Md.padding_left(), "pl-4");
        assert_eq!(Spacing::Md.pixels(), px(16.));
        assert_eq!(Spacing::FourXl.margin_right(), "mr-12");
        assert_eq!(Spacing::TwoXs.margin_top(), "mt-1");
    }

    #[test]
    fn test_spacing_classes_parse_back_to_pixels() {
        let scale = [
            Spacing::TwoXs,
            Spacing::Xs,
            Spacing::Sm,
            Spacing::Md,
            Spacing::Lg,
            Spacing::Xl,
            Spacing::TwoXl,
            Spacing::ThreeXl,
            Spacing::FourXl,
        ];

        for spacing in scale {
            for class in [
                spacing.padding_x(),
                spacing.padding_y(),
                spacing.margin_bottom(),
            ] {
                let pixels = pixels_from_class_name(&class).unwrap();
                assert_eq!(px(pixels as f32), spacing.pixels(), "{class}");
            }
        }
    }

    #[test]
    fn test_sizing_classes() {
        assert_eq!(Sizing::Lg.height(), "h-6");
        assert_eq!(Sizing::Lg.width(), "w-6");
        assert_eq!(pixels_from_class_name(&Sizing::Xl.width()), Ok(32));
        assert_eq!(Sizing::Sm.pixels(), px(16.));
    }
}
