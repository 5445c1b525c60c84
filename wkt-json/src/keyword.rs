use crate::result::{Error, Result};
use crate::types::GeometryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    // recognized, never assembled
    Geometry,
    Triangle,
    Tin,
    CircularString,
    CompoundCurve,
    Curve,
    MultiCurve,
    CurvePolygon,
    Surface,
    MultiSurface,
    PolyhedralSurface,
}

impl Keyword {
    /// Matches a whole word, so `MULTIPOINT` never reads as `POINT`.
    pub fn from_word(word: &str) -> Option<Keyword> {
        let kw = match word {
            "POINT" => Keyword::Point,
            "LINESTRING" => Keyword::LineString,
            "POLYGON" => Keyword::Polygon,
            "MULTIPOINT" => Keyword::MultiPoint,
            "MULTILINESTRING" => Keyword::MultiLineString,
            "MULTIPOLYGON" => Keyword::MultiPolygon,
            "GEOMETRYCOLLECTION" => Keyword::GeometryCollection,
            "GEOMETRY" => Keyword::Geometry,
            "TRIANGLE" => Keyword::Triangle,
            "TIN" => Keyword::Tin,
            "CIRCULARSTRING" => Keyword::CircularString,
            "COMPOUNDCURVE" => Keyword::CompoundCurve,
            "CURVE" => Keyword::Curve,
            "MULTICURVE" => Keyword::MultiCurve,
            "CURVEPOLYGON" => Keyword::CurvePolygon,
            "SURFACE" => Keyword::Surface,
            "MULTISURFACE" => Keyword::MultiSurface,
            "POLYHEDRALSURFACE" => Keyword::PolyhedralSurface,
            _ => return None,
        };
        Some(kw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Point => "POINT",
            Keyword::LineString => "LINESTRING",
            Keyword::Polygon => "POLYGON",
            Keyword::MultiPoint => "MULTIPOINT",
            Keyword::MultiLineString => "MULTILINESTRING",
            Keyword::MultiPolygon => "MULTIPOLYGON",
            Keyword::GeometryCollection => "GEOMETRYCOLLECTION",
            Keyword::Geometry => "GEOMETRY",
            Keyword::Triangle => "TRIANGLE",
            Keyword::Tin => "TIN",
            Keyword::CircularString => "CIRCULARSTRING",
            Keyword::CompoundCurve => "COMPOUNDCURVE",
            Keyword::Curve => "CURVE",
            Keyword::MultiCurve => "MULTICURVE",
            Keyword::CurvePolygon => "CURVEPOLYGON",
            Keyword::Surface => "SURFACE",
            Keyword::MultiSurface => "MULTISURFACE",
            Keyword::PolyhedralSurface => "POLYHEDRALSURFACE",
        }
    }

    /// The kind to assemble, `None` for collections and unmodeled kinds.
    pub fn kind(&self) -> Option<GeometryKind> {
        match self {
            Keyword::Point => Some(GeometryKind::Point),
            Keyword::LineString => Some(GeometryKind::LineString),
            Keyword::Polygon => Some(GeometryKind::Polygon),
            Keyword::MultiPoint => Some(GeometryKind::MultiPoint),
            Keyword::MultiLineString => Some(GeometryKind::MultiLineString),
            Keyword::MultiPolygon => Some(GeometryKind::MultiPolygon),
            _ => None,
        }
    }
}

/// Words that may follow a keyword without starting a new geometry.
pub(crate) fn is_modifier(word: &str) -> bool {
    matches!(word, "Z" | "M" | "ZM" | "EMPTY")
}

/// Splits off the leading alphabetic word of `s`, after any leading whitespace.
pub(crate) fn leading_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Reads the keyword a WKT fragment starts with and returns it with the rest of the text.
pub fn leading_keyword(wkt: &str) -> Result<(Keyword, &str)> {
    let (word, rest) = leading_word(wkt);
    if word.is_empty() {
        return Err(Error::MalformedStructure(format!(
            "expected a geometry keyword at '{}'",
            wkt.trim()
        )));
    }
    Keyword::from_word(word)
        .map(|kw| (kw, rest))
        .ok_or_else(|| Error::UnknownGeometryKind(word.to_owned()))
}

/// True when the text after the keyword declares an empty geometry, e.g. `POINT Z EMPTY`.
pub(crate) fn is_empty_body(rest: &str) -> bool {
    let mut rest = rest;
    loop {
        let (word, tail) = leading_word(rest);
        match word {
            "EMPTY" => return true,
            "Z" | "M" | "ZM" => rest = tail,
            _ => return false,
        }
    }
}
