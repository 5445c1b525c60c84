use geo_types::{coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::result::Error;
use crate::types::{Coordinate, CoordinateSet, Geometry, GeometryKind};

impl From<&Coordinate> for geo_types::Coord<f64> {
    fn from(c: &Coordinate) -> Self {
        coord! {x: c.x, y: c.y}
    }
}

fn line_string(coords: &[Coordinate]) -> LineString<f64> {
    LineString::new(coords.iter().map(Into::into).collect())
}

fn polygon(set: &CoordinateSet) -> Polygon<f64> {
    Polygon::new(
        line_string(&set.coordinates),
        set.holes.iter().map(|ring| line_string(ring)).collect(),
    )
}

fn point(set: &CoordinateSet) -> Option<Point<f64>> {
    set.coordinates.first().map(|c| Point::from(geo_types::Coord::from(c)))
}

// geo-types is two dimensional, Z and M are dropped
impl TryFrom<&Geometry> for geo_types::Geometry<f64> {
    type Error = Error;

    fn try_from(geom: &Geometry) -> Result<Self, Self::Error> {
        let missing =
            || Error::MalformedStructure(format!("{} has no coordinates", geom.geometry_type));
        let first = geom.sets.first();
        let out = match geom.kind() {
            GeometryKind::Point => {
                geo_types::Geometry::Point(first.and_then(point).ok_or_else(missing)?)
            }
            GeometryKind::LineString => geo_types::Geometry::LineString(line_string(
                &first.ok_or_else(missing)?.coordinates,
            )),
            GeometryKind::Polygon => {
                geo_types::Geometry::Polygon(polygon(first.ok_or_else(missing)?))
            }
            GeometryKind::MultiPoint => geo_types::Geometry::MultiPoint(MultiPoint::new(
                geom.sets.iter().filter_map(point).collect(),
            )),
            GeometryKind::MultiLineString => {
                geo_types::Geometry::MultiLineString(MultiLineString::new(
                    geom.sets.iter().map(|s| line_string(&s.coordinates)).collect(),
                ))
            }
            GeometryKind::MultiPolygon => geo_types::Geometry::MultiPolygon(MultiPolygon::new(
                geom.sets.iter().map(polygon).collect(),
            )),
        };
        Ok(out)
    }
}
