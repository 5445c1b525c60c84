use serde::Serialize;
use std::time::Instant;

use crate::config::ParseOptions;
use crate::response::{ErrorBody, ParseResult};
use crate::source::GeometrySource;

/// The parameters of one lookup request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    pub table: Option<String>,
    pub id: String,
}

/// The response body, either a result or an error object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Ok(ParseResult),
    Error(ErrorBody),
}

impl Response {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Looks up and converts one feature.
///
/// A request without a table gets no body at all. Elapsed time is measured
/// from the start of this call, so it includes the fetch.
pub fn lookup<S: GeometrySource>(
    source: &S,
    request: &LookupRequest,
    options: &ParseOptions,
) -> Option<Response> {
    let started = Instant::now();
    let table = request.table.as_deref().filter(|t| !t.is_empty())?;

    let row = match source.fetch(table, &request.id) {
        Ok(Some(row)) => row,
        Ok(None) => {
            tracing::info!(table, id = %request.id, "no feature found");
            return Some(Response::Error(ErrorBody::new("No ID by that number")));
        }
        Err(e) => {
            tracing::error!(table, id = %request.id, error = %e, "geometry lookup failed");
            return Some(Response::Error(ErrorBody::new(e.to_string())));
        }
    };

    match crate::convert_at(&row.wkt, options, started) {
        Ok(result) => Some(Response::Ok(result)),
        Err(e) => {
            tracing::error!(table, id = row.id, error = %e, "conversion failed");
            Some(Response::Error(ErrorBody::new(e.to_string())))
        }
    }
}
