//! Rendering errors.

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Scale domain is empty: {0}")]
    EmptyDomain(&'static str),

    #[error("Palette needs at least {min} colors, got {got}")]
    PaletteTooSmall { min: usize, got: usize },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("SVG parse failed: {0}")]
    SvgParse(String),

    #[error("Rasterization failed: {0}")]
    Raster(String),
}
