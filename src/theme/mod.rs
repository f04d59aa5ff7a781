//! Theme system providing colors, typography, and layout dimensions.
//!
//! A theme is loaded from JSON and installed as a `gpui` global. It can carry
//! several variants (e.g. dark and light) sharing one set of semantic color
//! tokens; the active one is picked through [`ActiveVariantId`].

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
