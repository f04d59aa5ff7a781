mod assets;
pub use assets::*;

mod mosaic_assets;
pub use mosaic_assets::*;
