//! Error types for the render core.
//!
//! Every variant is raised while the render is being set up, before any
//! pixel is written. Stamping and walking never fail.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("geometry contains no points")]
    EmptyGeometry,

    #[error("geometry has zero extent on both axes, cannot derive a scale")]
    DegenerateGeometry,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
