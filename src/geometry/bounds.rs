use crate::domain::Shape;
use crate::error::{RenderError, Result};
use geo::Coord;

/// Axis-aligned bounding box in source (planar) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Compute the tight bounds of every vertex reachable in `shape`
    pub fn of(shape: &Shape) -> Result<Self> {
        let mut bounds: Option<Bounds> = None;

        shape.for_each_path(|path| {
            for &coord in &path.0 {
                bounds = Some(match bounds {
                    Some(mut b) => {
                        b.include(coord);
                        b
                    }
                    None => Bounds::from_coord(coord),
                });
            }
        });

        bounds.ok_or(RenderError::EmptyGeometry)
    }

    fn from_coord(coord: Coord<f64>) -> Self {
        Self {
            min_x: coord.x,
            min_y: coord.y,
            max_x: coord.x,
            max_y: coord.y,
        }
    }

    fn include(&mut self, coord: Coord<f64>) {
        self.min_x = self.min_x.min(coord.x);
        self.max_x = self.max_x.max(coord.x);
        self.min_y = self.min_y.min(coord.y);
        self.max_y = self.max_y.max(coord.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Coord<f64> {
        Coord {
            x: (self.min_x + self.max_x) / 2.0,
            y: (self.min_y + self.max_y) / 2.0,
        }
    }

    pub fn contains(&self, coord: Coord<f64>) -> bool {
        coord.x >= self.min_x
            && coord.x <= self.max_x
            && coord.y >= self.min_y
            && coord.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, MultiLineString, MultiPolygon, line_string, polygon};

    #[test]
    fn test_bounds_of_line() {
        let shape = Shape::from(line_string![
            (x: 0.0, y: 0.0),
            (x: 1000.0, y: 2000.0),
            (x: 500.0, y: 1000.0),
        ]);
        let bounds = Bounds::of(&shape).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 1000.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 2000.0);
    }

    #[test]
    fn test_bounds_include_holes_and_all_parts() {
        let shape = Shape::from(MultiPolygon::new(vec![
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)],
            polygon!(
                exterior: [(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0)],
                interiors: [[(x: -3.0, y: 9.0), (x: -2.0, y: 9.0), (x: -2.0, y: 8.0)]],
            ),
        ]));
        let bounds = Bounds::of(&shape).unwrap();

        assert_eq!(
            bounds,
            Bounds {
                min_x: -3.0,
                min_y: 0.0,
                max_x: 6.0,
                max_y: 9.0
            }
        );
    }

    #[test]
    fn test_every_vertex_inside_bounds() {
        let shape = Shape::from(MultiLineString::new(vec![
            line_string![(x: -7.5, y: 3.25), (x: 2.0, y: -1.0), (x: 0.1, y: 0.2)],
            line_string![(x: 12.0, y: 4.0), (x: 3.0, y: 3.0)],
        ]));
        let bounds = Bounds::of(&shape).unwrap();

        assert!(bounds.min_x <= bounds.max_x);
        assert!(bounds.min_y <= bounds.max_y);
        shape.for_each_path(|path| {
            for &c in &path.0 {
                assert!(bounds.contains(c));
            }
        });
    }

    #[test]
    fn test_empty_geometry_fails() {
        let empty = Shape::from(LineString::<f64>::new(vec![]));
        assert_eq!(Bounds::of(&empty), Err(RenderError::EmptyGeometry));

        let no_parts = Shape::from(MultiLineString::<f64>::new(vec![]));
        assert_eq!(Bounds::of(&no_parts), Err(RenderError::EmptyGeometry));
    }

    #[test]
    fn test_single_point_bounds_are_degenerate_not_empty() {
        let shape = Shape::from(line_string![(x: 4.0, y: 2.0), (x: 4.0, y: 2.0)]);
        let bounds = Bounds::of(&shape).unwrap();

        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert_eq!(bounds.center(), Coord { x: 4.0, y: 2.0 });
    }
}
