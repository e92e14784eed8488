//! ishihara-map - render vector geometry as Ishihara-style dot plates

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layers;
pub mod raster;
pub mod render;

pub use error::{RenderError, Result};
pub use render::{RenderStats, Rendered, render};
