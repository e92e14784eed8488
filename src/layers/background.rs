use crate::config::RenderConfig;
use crate::raster::{Canvas, stamp_dot};
use image::Rgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grid positions inside the background circle, column by column
///
/// Steps `dot_spacing` from 0 across the whole canvas and keeps points with
/// `(x - c)² + (y - c)² <= circle_radius²`, `c = canvas_size / 2`.
pub fn background_grid(config: &RenderConfig) -> Vec<(i64, i64)> {
    let size = i64::from(config.canvas_size);
    let step = config.dot_spacing.max(1) as usize;
    let center = size / 2;
    let r2 = i64::from(config.circle_radius).pow(2);

    let mut points = Vec::new();
    for x in (0..size).step_by(step) {
        for y in (0..size).step_by(step) {
            let dx = x - center;
            let dy = y - center;
            if dx * dx + dy * dy <= r2 {
                points.push((x, y));
            }
        }
    }
    points
}

/// Paint the dotted background circle
///
/// Each dot gets a color drawn per channel from `[low, high)` by an RNG
/// seeded with `rng_seed`, so the same config always paints the same pixels.
///
/// # Returns
/// Number of dots stamped
pub fn fill_background(canvas: &mut Canvas, config: &RenderConfig) -> usize {
    let [low, high] = config.background_color_range;
    let mut rng = StdRng::seed_from_u64(config.rng_seed);

    if config.background_dots_overlap() {
        log::warn!(
            "dot_spacing {} <= 2 * dot_radius {}: background dots will overlap",
            config.dot_spacing,
            config.dot_radius
        );
    }

    let grid = background_grid(config);
    for &center in &grid {
        let color = Rgb([
            rng.gen_range(low..high),
            rng.gen_range(low..high),
            rng.gen_range(low..high),
        ]);
        stamp_dot(canvas, center, config.dot_radius, color);
    }

    log::debug!("background: {} dots", grid.len());
    grid.len()
}
