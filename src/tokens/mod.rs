//! Design tokens.
//!
//! Tokens are short strings such as `"blue-500"`, `"bg-blue-500"` or `"mt-4"`
//! that encode a design value. This module resolves them into Tailwind
//! class-name bundles, hex strings and pixel values. All lookups run over
//! static tables and never panic: malformed tokens surface as a
//! [`TokenError`] or as the documented empty-string sentinel.

mod error;
pub use error::*;

mod palette;
pub use palette::*;

mod dimension;
pub use dimension::*;

mod class_names;
pub use class_names::*;
