use gpui::{AbsoluteLength, DefiniteLength, Pixels, Window};

pub trait PixelsExt {
    /// Vertical padding that makes a single line of text fill this height.
    fn padding_needed_for_height(
        self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels;
}

impl PixelsExt for Pixels {
    fn padding_needed_for_height(
        self,
        window: &Window,
        text_size: AbsoluteLength,
        line_height: DefiniteLength,
    ) -> Pixels {
        let rem_size = window.rem_size();
        let text_size = text_size.to_pixels(rem_size);

        let line_height = match line_height {
            DefiniteLength::Absolute(length) => length.to_pixels(rem_size),
            DefiniteLength::Fraction(fraction) => text_size * fraction,
        };

        let padding = (self - line_height) / 2.;

        if padding < Pixels::ZERO {
            Pixels::ZERO
        } else {
            padding
        }
    }
}
