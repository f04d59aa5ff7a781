pub mod components;

pub mod extensions;

pub mod theme;

pub mod tokens;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
