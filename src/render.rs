//! Full plate render: background circle first, geometry dots on top.

use crate::config::RenderConfig;
use crate::domain::Shape;
use crate::error::Result;
use crate::geometry::{Bounds, Transform};
use crate::layers::{fill_background, walk};
use crate::raster::{Canvas, WHITE};

/// Counters describing a finished render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub bounds: Bounds,
    /// Pixels per source unit
    pub scale: f64,
    pub background_dots: usize,
    pub geometry_dots: usize,
}

#[derive(Debug, Clone)]
pub struct Rendered {
    pub canvas: Canvas,
    pub stats: RenderStats,
}

/// Render `shape` as a dot plate
///
/// Configuration, bounds and transform are all resolved before the canvas is
/// allocated, so an error never leaves a half-painted canvas behind.
/// The background must be painted before the geometry walk: geometry dots
/// overwrite background dots, never the other way around.
pub fn render(shape: &Shape, config: &RenderConfig) -> Result<Rendered> {
    config.validate()?;

    let bounds = Bounds::of(shape)?;
    let transform = Transform::fit(
        &bounds,
        config.canvas_size,
        f64::from(config.circle_radius),
        config.padding_factor,
    )?;
    log::debug!(
        "bounds {:.3}x{:.3}, scale {:.6} px/unit",
        bounds.width(),
        bounds.height(),
        transform.scale_factor()
    );

    let mut canvas = Canvas::new(config.canvas_size, config.canvas_size, WHITE);
    let background_dots = fill_background(&mut canvas, config);
    let geometry_dots = walk(
        shape,
        &transform,
        config.dot_radius,
        config.geometry_color(),
        &mut canvas,
    );

    Ok(Rendered {
        canvas,
        stats: RenderStats {
            bounds,
            scale: transform.scale_factor(),
            background_dots,
            geometry_dots,
        },
    })
}
