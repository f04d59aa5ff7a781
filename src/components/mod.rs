mod icon;
pub use icon::*;

pub mod select;
