use crate::domain::Shape;
use geo::Coord;
use serde::Deserialize;
use std::f64::consts::FRAC_PI_4;

/// Spherical Web Mercator (EPSG:3857) from WGS84 lon/lat degrees to meters
///
/// - x = R * lon
/// - y = R * ln(tan(pi/4 + lat/2))
///
/// Latitude is clamped to the Web Mercator limit so the poles stay finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Semi-major axis of WGS84 in meters
    pub const EARTH_RADIUS: f64 = 6_378_137.0;
    /// Latitude where the projected square ends
    pub const MAX_LATITUDE: f64 = 85.051_128_78;

    /// Project a (lon, lat) coordinate to meters
    pub fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        let lat = coord.y.clamp(-Self::MAX_LATITUDE, Self::MAX_LATITUDE);
        Coord {
            x: Self::EARTH_RADIUS * coord.x.to_radians(),
            y: Self::EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
        }
    }

    pub fn project_shape(&self, shape: &Shape) -> Shape {
        shape.map_coords(|c| self.project(c))
    }
}

/// How input coordinates are turned into the planar system the renderer expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// Input is lon/lat degrees, project to Web Mercator meters
    #[default]
    WebMercator,
    /// Input is already planar
    Planar,
}

impl Projection {
    pub fn apply(self, shape: &Shape) -> Shape {
        match self {
            Projection::WebMercator => WebMercator.project_shape(shape),
            Projection::Planar => shape.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn test_origin_maps_to_origin() {
        let c = WebMercator.project(Coord { x: 0.0, y: 0.0 });
        assert!(c.x.abs() < 1e-9);
        assert!(c.y.abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_x() {
        let c = WebMercator.project(Coord { x: 180.0, y: 0.0 });
        assert!((c.x - 20_037_508.342_789_244).abs() < 1e-6);
    }

    #[test]
    fn test_tbilisi() {
        // 44.7833 E, 41.7167 N
        let c = WebMercator.project(Coord { x: 44.7833, y: 41.7167 });
        assert!((c.x - 4_985_254.15).abs() < 1.0);
        assert!((c.y - 5_118_636.49).abs() < 1.0);
    }

    #[test]
    fn test_poles_are_clamped() {
        let c = WebMercator.project(Coord { x: 0.0, y: 90.0 });
        assert!(c.y.is_finite());
        assert!((c.y - 20_037_508.34).abs() < 1.0);
    }

    #[test]
    fn test_planar_is_identity() {
        let shape = Shape::from(line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)]);
        assert_eq!(Projection::Planar.apply(&shape), shape);
    }
}
