use crate::brackets::{split_rings, strip_all_brackets, unwrap_outer};
use crate::config::ParseOptions;
use crate::result::{Result, Warning};
use crate::tuple::{parse_coordinate, parse_tuple_list};
use crate::types::{CoordinateSet, Dimension, GeometryKind};

/// Builds the coordinate sets for one geometry.
///
/// `body` is the geometry text from its first `(` on. Single geometries give
/// one set, multi geometries give one set per part. Sets that end up with no
/// coordinates are left out.
pub fn assemble(
    kind: GeometryKind,
    dimension: Dimension,
    body: &str,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<CoordinateSet>> {
    let inner = unwrap_outer(body);
    let sets = match kind {
        GeometryKind::Point => vec![point(inner, dimension, options, warnings)?],
        GeometryKind::LineString => vec![line_string(inner, dimension, options, warnings)?],
        GeometryKind::Polygon => vec![polygon(inner, dimension, options, warnings)?],
        GeometryKind::MultiPoint => {
            let mut sets = Vec::new();
            for tuple in strip_all_brackets(inner).split(',') {
                sets.push(point(tuple, dimension, options, warnings)?);
            }
            sets
        }
        GeometryKind::MultiLineString => {
            let mut sets = Vec::new();
            for part in split_rings(inner) {
                let line = strip_all_brackets(part);
                sets.push(line_string(&line, dimension, options, warnings)?);
            }
            sets
        }
        GeometryKind::MultiPolygon => {
            let mut sets = Vec::new();
            for part in split_rings(inner) {
                sets.push(polygon(unwrap_outer(part), dimension, options, warnings)?);
            }
            sets
        }
    };
    Ok(sets.into_iter().filter(|s| !s.is_empty()).collect())
}

fn point(
    inner: &str,
    dimension: Dimension,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<CoordinateSet> {
    let coordinates = parse_coordinate(inner, dimension, options, warnings)?
        .into_iter()
        .collect();
    Ok(CoordinateSet::new(coordinates))
}

fn line_string(
    inner: &str,
    dimension: Dimension,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<CoordinateSet> {
    Ok(CoordinateSet::new(parse_tuple_list(
        inner, dimension, options, warnings,
    )?))
}

// first ring is the exterior, every later ring is a hole, in input order
fn polygon(
    inner: &str,
    dimension: Dimension,
    options: &ParseOptions,
    warnings: &mut Vec<Warning>,
) -> Result<CoordinateSet> {
    let mut set = CoordinateSet::default();
    for (i, ring) in split_rings(inner).into_iter().enumerate() {
        let coords = parse_tuple_list(&strip_all_brackets(ring), dimension, options, warnings)?;
        if i == 0 {
            if coords.is_empty() {
                // holes without an exterior are not a polygon
                tracing::warn!("polygon exterior has no coordinates, dropping it");
                return Ok(CoordinateSet::default());
            }
            set.coordinates = coords;
        } else if !coords.is_empty() {
            set.holes.push(coords);
        }
    }
    Ok(set)
}
