use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};

/// A renderable geometry: lines, polygons and their multi-part forms.
///
/// Points are plain `geo::Coord<f64>` values. Polygon rings are kept in their
/// declared order, exterior first, then holes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    LineString(LineString<f64>),
    Polygon(Polygon<f64>),
    MultiLineString(MultiLineString<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Shape {
    /// Short name of the variant, for log output
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::LineString(_) => "LineString",
            Shape::Polygon(_) => "Polygon",
            Shape::MultiLineString(_) => "MultiLineString",
            Shape::MultiPolygon(_) => "MultiPolygon",
        }
    }

    /// Visit every vertex sequence (line or ring) in traversal order.
    ///
    /// Polygons yield the exterior ring followed by each interior ring;
    /// multi-part shapes yield their parts in declared order.
    pub fn for_each_path<F>(&self, mut f: F)
    where
        F: FnMut(&LineString<f64>),
    {
        self.visit_paths(&mut f);
    }

    fn visit_paths<F>(&self, f: &mut F)
    where
        F: FnMut(&LineString<f64>),
    {
        match self {
            Shape::LineString(line) => f(line),
            Shape::Polygon(polygon) => visit_polygon(polygon, f),
            Shape::MultiLineString(lines) => {
                for line in &lines.0 {
                    f(line);
                }
            }
            Shape::MultiPolygon(polygons) => {
                for polygon in &polygons.0 {
                    visit_polygon(polygon, f);
                }
            }
        }
    }

    /// Total number of vertices across all paths
    pub fn vertex_count(&self) -> usize {
        let mut count = 0;
        self.for_each_path(|path| count += path.0.len());
        count
    }

    /// Apply `f` to every coordinate, returning a new shape of the same kind
    pub fn map_coords<F>(&self, f: F) -> Shape
    where
        F: Fn(Coord<f64>) -> Coord<f64>,
    {
        let line =
            |l: &LineString<f64>| -> LineString<f64> { l.0.iter().map(|&c| f(c)).collect() };
        let polygon = |p: &Polygon<f64>| -> Polygon<f64> {
            Polygon::new(
                line(p.exterior()),
                p.interiors().iter().map(|r| line(r)).collect(),
            )
        };

        match self {
            Shape::LineString(l) => Shape::LineString(line(l)),
            Shape::Polygon(p) => Shape::Polygon(polygon(p)),
            Shape::MultiLineString(ls) => {
                Shape::MultiLineString(MultiLineString::new(ls.0.iter().map(line).collect()))
            }
            Shape::MultiPolygon(ps) => {
                Shape::MultiPolygon(MultiPolygon::new(ps.0.iter().map(polygon).collect()))
            }
        }
    }
}

fn visit_polygon<F>(polygon: &Polygon<f64>, f: &mut F)
where
    F: FnMut(&LineString<f64>),
{
    f(polygon.exterior());
    for hole in polygon.interiors() {
        f(hole);
    }
}

impl From<LineString<f64>> for Shape {
    fn from(value: LineString<f64>) -> Self {
        Shape::LineString(value)
    }
}

impl From<Polygon<f64>> for Shape {
    fn from(value: Polygon<f64>) -> Self {
        Shape::Polygon(value)
    }
}

impl From<MultiLineString<f64>> for Shape {
    fn from(value: MultiLineString<f64>) -> Self {
        Shape::MultiLineString(value)
    }
}

impl From<MultiPolygon<f64>> for Shape {
    fn from(value: MultiPolygon<f64>) -> Self {
        Shape::MultiPolygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, polygon};

    #[test]
    fn test_polygon_paths_exterior_then_holes() {
        let poly = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0)]],
        );
        let shape = Shape::from(poly);

        let mut firsts = Vec::new();
        shape.for_each_path(|path| firsts.push(path.0[0]));

        assert_eq!(firsts, vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 }]);
    }

    #[test]
    fn test_multi_line_keeps_part_order() {
        let shape = Shape::from(MultiLineString::new(vec![
            line_string![(x: 5.0, y: 5.0), (x: 6.0, y: 6.0)],
            line_string![(x: 1.0, y: 1.0), (x: 2.0, y: 2.0)],
        ]));

        let mut firsts = Vec::new();
        shape.for_each_path(|path| firsts.push(path.0[0].x));

        assert_eq!(firsts, vec![5.0, 1.0]);
        assert_eq!(shape.vertex_count(), 4);
    }

    #[test]
    fn test_map_coords_preserves_kind() {
        let shape = Shape::from(line_string![(x: 1.0, y: 2.0), (x: 3.0, y: 4.0)]);
        let doubled = shape.map_coords(|c| Coord { x: c.x * 2.0, y: c.y * 2.0 });

        assert_eq!(doubled.kind(), "LineString");
        assert_eq!(
            doubled,
            Shape::from(line_string![(x: 2.0, y: 4.0), (x: 6.0, y: 8.0)])
        );
    }

    #[test]
    fn test_empty_multi_polygon_has_no_paths() {
        let shape = Shape::from(MultiPolygon::<f64>::new(vec![]));
        assert_eq!(shape.vertex_count(), 0);
    }
}
