use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};

use crate::result::Warning;
use crate::types::Geometry;

/// Everything one conversion produced, ready to be written out as JSON.
///
/// The exported form is
/// `{"WTKGeoms": [...], "Elapsed": <ms>, "Warnings": [...]}` where `Warnings`
/// is left out when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    #[serde(rename = "WTKGeoms")]
    pub geometries: Vec<Geometry>,
    #[serde(rename = "Elapsed", serialize_with = "as_millis")]
    pub elapsed: Duration,
    #[serde(rename = "Warnings", skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

impl ParseResult {
    /// Pairs the parsed geometries with the time spent since `started`, the
    /// start of the request rather than of the parse.
    pub fn assemble(geometries: Vec<Geometry>, warnings: Vec<Warning>, started: Instant) -> Self {
        ParseResult {
            geometries,
            elapsed: started.elapsed(),
            warnings,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// whole milliseconds, i.e. nanoseconds / 1_000_000
fn as_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64((elapsed.as_nanos() / 1_000_000) as u64)
}

/// The body sent instead of a result when a lookup or conversion fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorBody {
            error: error.into(),
        }
    }
}
