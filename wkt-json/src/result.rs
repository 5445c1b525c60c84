use std::fmt;

use serde::{Serialize, Serializer};

/// The result returned by many methods within the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Conditions that fail a whole conversion. No partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed WKT structure: {0}")]
    MalformedStructure(String),
    #[error("Unknown WKT geometry kind: {0}")]
    UnknownGeometryKind(String),
    #[error("Invalid numeric value in WKT: {0}")]
    InvalidNumber(String),
    #[error("Error encoding WKB geometry")]
    GeomEncodeError(#[from] std::io::Error),
    #[error("Error when accessing the SQLite database")]
    SQLiteError(#[from] rusqlite::Error),
    #[error("Invalid parse options: {0}")]
    Config(#[from] serde_json::Error),
}

/// A condition that was recovered from locally while parsing.
///
/// Warnings never fail a conversion. They are collected on the
/// [ParseResult](crate::ParseResult) so a caller can tell an empty result apart
/// from a result that lost data.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A recognized keyword whose geometry kind is not modeled, the fragment was dropped.
    UnsupportedGeometry { keyword: String },
    /// The fragment held no coordinates, e.g. `POINT EMPTY`.
    EmptyGeometry { keyword: String },
    /// A tuple had fewer ordinates than its dimension needs and was skipped.
    CoordinateUnderflow {
        tuple: String,
        expected: usize,
        found: usize,
    },
    /// A tuple with no ordinates at all, e.g. from `1 2,,3 4`.
    EmptyTuple,
    /// A token that is not a number, read as 0.0.
    NumericParseFailure { token: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedGeometry { keyword } => {
                write!(f, "unsupported geometry kind {} was skipped", keyword)
            }
            Warning::EmptyGeometry { keyword } => {
                write!(f, "{} geometry has no coordinates", keyword)
            }
            Warning::CoordinateUnderflow {
                tuple,
                expected,
                found,
            } => write!(
                f,
                "tuple '{}' has {} of {} ordinates and was skipped",
                tuple, found, expected
            ),
            Warning::EmptyTuple => write!(f, "empty tuple was skipped"),
            Warning::NumericParseFailure { token } => {
                write!(f, "'{}' is not a number, read as 0.0", token)
            }
        }
    }
}

// warnings go out on the wire as plain messages
impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
