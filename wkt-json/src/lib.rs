//! Converts Well-Known Text geometry, as a spatial database exports it, into a
//! dimensionally typed geometry model and its JSON form.
//!
//! # Examples
//! ```
//! use wkt_json::{convert, ParseOptions};
//!
//! let result = convert("LINESTRING Z (30 10 5, 10 30 5, 40 40 5)", &ParseOptions::default()).unwrap();
//! assert_eq!(result.geometries[0].geometry_type.to_string(), "LINESTRING Z");
//! assert_eq!(result.geometries[0].sets[0].coordinates.len(), 3);
//! ```
pub mod assemble;
pub mod brackets;
pub mod collection;
pub mod config;
pub mod interop;
pub mod keyword;
pub mod response;
pub mod result;
pub mod service;
pub mod source;
pub mod tuple;
pub mod types;
pub mod wkb;

use std::time::Instant;

use crate::assemble::assemble;
use crate::brackets::check_balanced;
use crate::collection::{is_geometry_collection, split_collection};
use crate::keyword::{is_empty_body, leading_keyword, Keyword};

pub use crate::config::{NumericPolicy, ParseOptions};
pub use crate::response::{ErrorBody, ParseResult};
pub use crate::result::{Error, Result, Warning};
pub use crate::types::{Coordinate, CoordinateSet, Dimension, Geometry, GeometryKind, GeometryType};

/// Converts one WKT string, timing from now.
pub fn convert(wkt: &str, options: &ParseOptions) -> Result<ParseResult> {
    convert_at(wkt, options, Instant::now())
}

/// Converts one WKT string, timing from `started`, the start of the request.
///
/// Structural problems fail the whole conversion. Problems inside a single
/// tuple or fragment are recovered from and listed in
/// [ParseResult::warnings].
pub fn convert_at(wkt: &str, options: &ParseOptions, started: Instant) -> Result<ParseResult> {
    let wkt = options.sanitize(wkt);
    let wkt = wkt.trim();
    check_balanced(wkt)?;

    let mut geometries = Vec::new();
    let mut warnings = Vec::new();
    parse_fragment(wkt, options, &mut geometries, &mut warnings)?;

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "conversion recovered from bad input");
    }
    Ok(ParseResult::assemble(geometries, warnings, started))
}

// appends the geometries of one fragment, recursing into collections
fn parse_fragment(
    wkt: &str,
    options: &ParseOptions,
    geometries: &mut Vec<Geometry>,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    let (keyword, rest) = leading_keyword(wkt)?;
    if is_empty_body(rest) {
        tracing::debug!(keyword = keyword.as_str(), "empty geometry");
        warnings.push(Warning::EmptyGeometry {
            keyword: keyword.as_str().to_owned(),
        });
        return Ok(());
    }

    if is_geometry_collection(wkt) {
        if keyword != Keyword::GeometryCollection {
            return Err(Error::MalformedStructure(format!(
                "GEOMETRYCOLLECTION nested inside {}",
                keyword.as_str()
            )));
        }
        for fragment in split_collection(wkt)? {
            parse_fragment(fragment.text, options, geometries, warnings)?;
        }
        return Ok(());
    }

    let kind = match keyword.kind() {
        Some(kind) => kind,
        None => {
            tracing::warn!(keyword = keyword.as_str(), "skipping unsupported geometry");
            warnings.push(Warning::UnsupportedGeometry {
                keyword: keyword.as_str().to_owned(),
            });
            return Ok(());
        }
    };

    let open = rest.find('(').ok_or_else(|| {
        Error::MalformedStructure(format!("no '(' after {}", keyword.as_str()))
    })?;
    let dimension = Dimension::resolve(wkt, keyword.as_str());
    let geometry_type = GeometryType::new(kind, dimension);
    tracing::debug!(%geometry_type, "assembling geometry");

    let sets = assemble(kind, dimension, &rest[open..], options, warnings)?;
    if sets.is_empty() {
        warnings.push(Warning::EmptyGeometry {
            keyword: geometry_type.to_string(),
        });
        return Ok(());
    }
    geometries.push(Geometry {
        geometry_type,
        sets,
    });
    Ok(())
}
