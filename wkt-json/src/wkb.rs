use crate::result::Result;
use crate::types::{Coordinate, CoordinateSet, Dimension, Geometry, GeometryKind};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// ISO WKB type code for a kind in a given dimension, e.g. 1002 for `LINESTRING Z`.
pub fn type_code(kind: GeometryKind, dimension: Dimension) -> u32 {
    let base = match kind {
        GeometryKind::Point => 1,
        GeometryKind::LineString => 2,
        GeometryKind::Polygon => 3,
        GeometryKind::MultiPoint => 4,
        GeometryKind::MultiLineString => 5,
        GeometryKind::MultiPolygon => 6,
    };
    let offset = match dimension {
        Dimension::XY => 0,
        Dimension::XYZ => 1000,
        Dimension::XYM => 2000,
        Dimension::XYZM => 3000,
    };
    base + offset
}

// a trait meant to be used internally for the pieces a geometry body is made of,
// the dimension decides how many ordinates each coordinate writes
trait WKBBytesRaw {
    fn write_as_bytes(&self, dim: Dimension, w: &mut impl Write) -> Result<()>;
}

impl WKBBytesRaw for Coordinate {
    fn write_as_bytes(&self, dim: Dimension, w: &mut impl Write) -> Result<()> {
        w.write_f64::<LittleEndian>(self.x)?;
        w.write_f64::<LittleEndian>(self.y)?;
        if dim.has_z() {
            w.write_f64::<LittleEndian>(self.z)?;
        }
        if dim.has_m() {
            w.write_f64::<LittleEndian>(self.m)?;
        }
        Ok(())
    }
}

// a ring or point list
impl WKBBytesRaw for [Coordinate] {
    fn write_as_bytes(&self, dim: Dimension, w: &mut impl Write) -> Result<()> {
        w.write_u32::<LittleEndian>(self.len() as u32)?;
        for c in self {
            c.write_as_bytes(dim, w)?;
        }
        Ok(())
    }
}

// a polygon, exterior then holes
impl WKBBytesRaw for CoordinateSet {
    fn write_as_bytes(&self, dim: Dimension, w: &mut impl Write) -> Result<()> {
        w.write_u32::<LittleEndian>((self.holes.len() + 1) as u32)?;
        self.coordinates.write_as_bytes(dim, w)?;
        for ring in &self.holes {
            ring.write_as_bytes(dim, w)?;
        }
        Ok(())
    }
}

fn write_header(kind: GeometryKind, dim: Dimension, w: &mut impl Write) -> Result<()> {
    // we will always write as little endian
    w.write_u8(1)?;
    w.write_u32::<LittleEndian>(type_code(kind, dim))?;
    Ok(())
}

// an empty point is written with NaN ordinates
fn write_point(set: &CoordinateSet, dim: Dimension, w: &mut impl Write) -> Result<()> {
    write_header(GeometryKind::Point, dim, w)?;
    let empty = Coordinate {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
        m: f64::NAN,
    };
    set.coordinates
        .first()
        .unwrap_or(&empty)
        .write_as_bytes(dim, w)
}

impl Geometry {
    /// Writes the geometry as little endian ISO WKB.
    pub fn write_as_wkb(&self, w: &mut impl Write) -> Result<()> {
        let dim = self.dimension();
        let empty = CoordinateSet::default();
        let first = self.sets.first().unwrap_or(&empty);
        match self.kind() {
            GeometryKind::Point => write_point(first, dim, w),
            GeometryKind::LineString => {
                write_header(GeometryKind::LineString, dim, w)?;
                first.coordinates.write_as_bytes(dim, w)
            }
            GeometryKind::Polygon => {
                write_header(GeometryKind::Polygon, dim, w)?;
                first.write_as_bytes(dim, w)
            }
            GeometryKind::MultiPoint => {
                write_header(GeometryKind::MultiPoint, dim, w)?;
                w.write_u32::<LittleEndian>(self.sets.len() as u32)?;
                for set in &self.sets {
                    write_point(set, dim, w)?;
                }
                Ok(())
            }
            GeometryKind::MultiLineString => {
                write_header(GeometryKind::MultiLineString, dim, w)?;
                w.write_u32::<LittleEndian>(self.sets.len() as u32)?;
                for set in &self.sets {
                    write_header(GeometryKind::LineString, dim, w)?;
                    set.coordinates.write_as_bytes(dim, w)?;
                }
                Ok(())
            }
            GeometryKind::MultiPolygon => {
                write_header(GeometryKind::MultiPolygon, dim, w)?;
                w.write_u32::<LittleEndian>(self.sets.len() as u32)?;
                for set in &self.sets {
                    write_header(GeometryKind::Polygon, dim, w)?;
                    set.write_as_bytes(dim, w)?;
                }
                Ok(())
            }
        }
    }

    pub fn to_wkb(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_as_wkb(&mut buf)?;
        Ok(buf)
    }
}
