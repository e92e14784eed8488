use super::Bounds;
use crate::error::{RenderError, Result};
use geo::Coord;

/// Uniform scale + translate from source coordinates to canvas pixels
///
/// The same factor is applied on both axes so the geometry keeps its aspect
/// ratio. Y is flipped: source Y grows upward, raster rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Pixels per source unit
    scale: f64,
    /// Center of the source bounds
    center_src: Coord<f64>,
    /// Canvas center in pixels (`canvas_size / 2`, integer division)
    center_dst: Coord<f64>,
}

impl Transform {
    /// Fit `bounds` into a circle of `target_radius` pixels on a square canvas
    ///
    /// The scale is the smaller of the two per-axis candidates
    /// `(target_radius * padding_factor) / extent`. An axis with zero extent
    /// contributes no candidate; if both axes are zero there is no finite
    /// scale and the fit fails with `DegenerateGeometry`.
    pub fn fit(
        bounds: &Bounds,
        canvas_size: u32,
        target_radius: f64,
        padding_factor: f64,
    ) -> Result<Self> {
        let extent = target_radius * padding_factor;
        let scale_x = axis_candidate(extent, bounds.width());
        let scale_y = axis_candidate(extent, bounds.height());
        let scale = scale_x.min(scale_y);

        if scale.is_infinite() {
            return Err(RenderError::DegenerateGeometry);
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::InvalidConfiguration(format!(
                "derived scale {scale} is not a positive finite number"
            )));
        }

        let half = f64::from(canvas_size / 2);
        Ok(Self {
            scale,
            center_src: bounds.center(),
            center_dst: Coord { x: half, y: half },
        })
    }

    /// Map a source coordinate to a pixel.
    ///
    /// The fractional result is truncated toward zero (`as i64`), not rounded,
    /// so `-0.7` lands on column 0 and `12.9` on column 12.
    pub fn project(&self, coord: Coord<f64>) -> (i64, i64) {
        let px = (coord.x - self.center_src.x) * self.scale + self.center_dst.x;
        let py = (coord.y - self.center_src.y) * -self.scale + self.center_dst.y;
        (px as i64, py as i64)
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale
    }
}

fn axis_candidate(extent: f64, span: f64) -> f64 {
    if span > 0.0 {
        extent / span
    } else {
        f64::INFINITY
    }
}
