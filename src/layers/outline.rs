use crate::domain::Shape;
use crate::geometry::Transform;
use crate::raster::{Canvas, Color, stamp_dot};

/// Stamp one dot on every vertex of `shape`
///
/// Lines and rings are walked in order; polygon holes get exactly the same
/// treatment as the exterior ring. No interpolation between vertices, so the
/// outline is only as continuous as the input is dense.
///
/// # Returns
/// Number of dots stamped (one per vertex, including clipped ones)
pub fn walk(
    shape: &Shape,
    transform: &Transform,
    dot_radius: u32,
    color: Color,
    canvas: &mut Canvas,
) -> usize {
    let mut dots = 0;
    shape.for_each_path(|path| {
        for &coord in &path.0 {
            stamp_dot(canvas, transform.project(coord), dot_radius, color);
            dots += 1;
        }
    });
    log::debug!("outline: {} dots for {}", dots, shape.kind());
    dots
}
