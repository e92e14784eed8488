//! GeoJSON reader
//!
//! Flattens a `Geometry`, `Feature`, `FeatureCollection` or
//! `GeometryCollection` into a single [`Shape`]. Polygonal parts merge into a
//! multi-polygon and linear parts into a multi-line string, in document order.
//! Point geometries carry no outline and are skipped.

use crate::domain::Shape;
use anyhow::{Context, Result, anyhow, bail};
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Polygon};
use serde_json::Value;
use std::path::Path;

/// One outline-bearing piece of the document
#[derive(Debug)]
enum Part {
    Line(LineString<f64>),
    Polygon(Polygon<f64>),
}

/// Read and flatten a GeoJSON file
pub fn load_shape(path: &Path) -> Result<Shape> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
    parse_shape(&contents).with_context(|| format!("Invalid GeoJSON in {}", path.display()))
}

/// Parse GeoJSON text into a single shape
pub fn parse_shape(text: &str) -> Result<Shape> {
    let root: Value = serde_json::from_str(text).context("Failed to parse GeoJSON JSON")?;

    let mut parts = Vec::new();
    collect_parts(&root, &mut parts)?;
    merge_parts(parts)
}

fn collect_parts(value: &Value, parts: &mut Vec<Part>) -> Result<()> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("GeoJSON object has no \"type\""))?;

    match kind {
        "FeatureCollection" => {
            let features = value
                .get("features")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("FeatureCollection without \"features\" array"))?;
            for (i, feature) in features.iter().enumerate() {
                collect_parts(feature, parts).with_context(|| format!("feature {}", i))?;
            }
        }
        "Feature" => match value.get("geometry") {
            Some(Value::Null) | None => log::warn!("Skipping feature without geometry"),
            Some(geometry) => collect_parts(geometry, parts)?,
        },
        "GeometryCollection" => {
            let geometries = value
                .get("geometries")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("GeometryCollection without \"geometries\" array"))?;
            for geometry in geometries {
                collect_parts(geometry, parts)?;
            }
        }
        "LineString" => parts.push(Part::Line(parse_line(coordinates(value)?)?)),
        "MultiLineString" => {
            for line in as_array(coordinates(value)?)? {
                parts.push(Part::Line(parse_line(line)?));
            }
        }
        "Polygon" => parts.push(Part::Polygon(parse_polygon(coordinates(value)?)?)),
        "MultiPolygon" => {
            for polygon in as_array(coordinates(value)?)? {
                parts.push(Part::Polygon(parse_polygon(polygon)?));
            }
        }
        "Point" | "MultiPoint" => log::warn!("Skipping {} geometry, it has no outline", kind),
        other => bail!("Unsupported GeoJSON type: {}", other),
    }

    Ok(())
}

fn merge_parts(parts: Vec<Part>) -> Result<Shape> {
    let mut lines = Vec::new();
    let mut polygons = Vec::new();

    for part in parts {
        match part {
            Part::Line(l) => lines.push(l),
            Part::Polygon(p) => polygons.push(p),
        }
    }

    match (lines.len(), polygons.len()) {
        (0, 0) => bail!("GeoJSON contains no line or polygon geometry"),
        (1, 0) => Ok(Shape::LineString(lines.remove(0))),
        (_, 0) => Ok(Shape::MultiLineString(MultiLineString::new(lines))),
        (0, 1) => Ok(Shape::Polygon(polygons.remove(0))),
        (0, _) => Ok(Shape::MultiPolygon(MultiPolygon::new(polygons))),
        (l, p) => bail!(
            "GeoJSON mixes {} line and {} polygon geometries; render them separately",
            l,
            p
        ),
    }
}

fn coordinates(value: &Value) -> Result<&Value> {
    value
        .get("coordinates")
        .ok_or_else(|| anyhow!("geometry without \"coordinates\""))
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| anyhow!("expected an array of coordinates"))
}

fn parse_position(value: &Value) -> Result<Coord<f64>> {
    let position = as_array(value)?;
    let x = position.first().and_then(Value::as_f64);
    let y = position.get(1).and_then(Value::as_f64);
    match (x, y) {
        (Some(x), Some(y)) => Ok(Coord { x, y }),
        _ => bail!("invalid position: {}", value),
    }
}

fn parse_line(value: &Value) -> Result<LineString<f64>> {
    as_array(value)?
        .iter()
        .map(parse_position)
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn parse_polygon(value: &Value) -> Result<Polygon<f64>> {
    let mut rings = as_array(value)?
        .iter()
        .map(parse_line)
        .collect::<Result<Vec<_>>>()?;

    if rings.is_empty() {
        bail!("polygon without rings");
    }
    let exterior = rings.remove(0);
    Ok(Polygon::new(exterior, rings))
}
