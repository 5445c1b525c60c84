use serde::{Serialize, Serializer};
use std::fmt;

/// A single position. `z` and `m` hold 0.0 unless the owning geometry's
/// [Dimension] carries them.
///
/// The measure is kept in the model but is not part of the exported JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinate {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
    #[serde(skip)]
    pub m: f64,
}

impl Coordinate {
    pub fn xy(x: f64, y: f64) -> Self {
        Coordinate {
            x,
            y,
            ..Default::default()
        }
    }
}

/// The positions of one geometry part.
///
/// `coordinates` is the point list or exterior ring, in input order. `holes`
/// holds the interior rings of a polygon, one entry per ring, and is empty for
/// every other kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoordinateSet {
    #[serde(rename = "Coordinates")]
    pub coordinates: Vec<Coordinate>,
    #[serde(rename = "Holes", skip_serializing_if = "Vec::is_empty")]
    pub holes: Vec<Vec<Coordinate>>,
}

impl CoordinateSet {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        CoordinateSet {
            coordinates,
            holes: Vec::new(),
        }
    }

    /// Every hole coordinate, ring after ring, as one flat sequence.
    pub fn hole_coordinates(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.holes.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty() && self.holes.iter().all(Vec::is_empty)
    }
}

/// Which ordinates a coordinate carries beyond X and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    XY,
    XYZ,
    XYM,
    XYZM,
}

impl Dimension {
    /// Reads the dimension suffix that follows `keyword` at the start of `wkt`.
    ///
    /// `keyword` is expected upper case, as the caller already matched it.
    /// ` ZM` is tested before ` Z` since `POINT ZM` also starts with `POINT Z`.
    /// # Examples
    /// ```
    /// use wkt_json::types::Dimension;
    /// assert_eq!(Dimension::resolve("POINT ZM(1 2 3 4)", "POINT"), Dimension::XYZM);
    /// assert_eq!(Dimension::resolve("POINT(1 2)", "POINT"), Dimension::XY);
    /// ```
    pub fn resolve(wkt: &str, keyword: &str) -> Dimension {
        let rest = match wkt.strip_prefix(keyword) {
            Some(rest) => rest,
            None => return Dimension::XY,
        };
        if rest.starts_with(" ZM") {
            Dimension::XYZM
        } else if rest.starts_with(" Z") {
            Dimension::XYZ
        } else if rest.starts_with(" M") {
            Dimension::XYM
        } else {
            Dimension::XY
        }
    }

    /// Number of ordinates a tuple must have.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ | Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The WKT suffix, empty for XY
    pub fn suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => " Z",
            Dimension::XYM => " M",
            Dimension::XYZM => " ZM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

/// The full type tag of a geometry, e.g. `LINESTRING Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryType {
    pub kind: GeometryKind,
    pub dimension: Dimension,
}

impl GeometryType {
    pub fn new(kind: GeometryKind, dimension: Dimension) -> Self {
        GeometryType { kind, dimension }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.keyword(), self.dimension.suffix())
    }
}

impl Serialize for GeometryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A parsed geometry: its type tag and one coordinate set per part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    #[serde(rename = "WTKType")]
    pub geometry_type: GeometryType,
    #[serde(rename = "Geometry")]
    pub sets: Vec<CoordinateSet>,
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        self.geometry_type.kind
    }

    pub fn dimension(&self) -> Dimension {
        self.geometry_type.dimension
    }
}
