use std::str::FromStr;

use wkt::{Geometry, Wkt};

use crate::{Coordinate, QuadtreeError, Result};

/// Read every point of a WKT text.
///
/// Accepts `POINT`, `MULTIPOINT` and `GEOMETRYCOLLECTION`s of those.
/// `POINT EMPTY` contributes nothing; any other geometry is an error.
pub fn parse_points(wkt_str: &str) -> Result<Vec<Coordinate>> {
    let parsed: Wkt<f64> =
        Wkt::from_str(wkt_str).map_err(|e| QuadtreeError::Wkt(e.to_string()))?;
    let mut coords = Vec::new();
    for geometry in &parsed.items {
        collect_points(geometry, &mut coords)?;
    }
    Ok(coords)
}

fn collect_points(geometry: &Geometry<f64>, coords: &mut Vec<Coordinate>) -> Result<()> {
    match geometry {
        Geometry::Point(point) => {
            if let Some(coord) = &point.0 {
                coords.push(Coordinate::new(coord.x, coord.y));
            }
        }
        Geometry::MultiPoint(multi) => {
            coords.extend(
                multi
                    .0
                    .iter()
                    .filter_map(|p| p.0.as_ref())
                    .map(|c| Coordinate::new(c.x, c.y)),
            );
        }
        Geometry::GeometryCollection(collection) => {
            for inner in &collection.0 {
                collect_points(inner, coords)?;
            }
        }
        _ => {
            return Err(QuadtreeError::Wkt(
                "only point geometries can be indexed".to_string(),
            ))
        }
    }
    Ok(())
}
