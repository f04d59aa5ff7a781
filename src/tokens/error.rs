use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("\"{0}\" is not a palette key.")]
    UnknownPalette(String),
    #[error("Palette key \"{base}\" has no shade \"{shade}\".")]
    UnknownShade { base: String, shade: String },
    #[error("Could not read a dimension from \"{0}\".")]
    InvalidDimension(String),
}
