//! # Function Response
//!
//! The HTTP-shaped value returned to the Lambda platform. The field names follow
//! the API Gateway proxy integration (`statusCode`, `headers`, `body`), so the
//! function can sit behind API Gateway or a function URL unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};
use tracing::error;

use crate::error::ProbeResult;
use crate::utils::constant::*;

/// Millisecond-precision UTC, the same shape `Date.prototype.toJSON` produces.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON document, serialized to a string.
    pub body: String,
}

/// Body of a 200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub message: String,
    pub timestamp: String,
}

/// Body of a 500 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl Response {
    pub fn success(server_time: OffsetDateTime) -> Self {
        let body = SuccessBody {
            message: SUCCESS_MESSAGE.to_string(),
            timestamp: format_timestamp(server_time),
        };
        Self::with_body(200, &body)
    }

    pub fn failure(details: impl Into<String>) -> Self {
        let body = ErrorBody {
            error: FAILURE_MESSAGE.to_string(),
            details: details.into(),
        };
        Self::with_body(500, &body)
    }

    /// Converts the outcome of a probe into its wire representation.
    pub fn from_probe(result: &ProbeResult<OffsetDateTime>) -> Self {
        match result {
            Ok(server_time) => Self::success(*server_time),
            Err(e) => Self::failure(e.to_string()),
        }
    }

    fn with_body(status_code: u16, body: &impl Serialize) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize response body");
            String::new()
        });

        Self {
            status_code,
            headers: cors_headers(),
            body,
        }
    }
}

pub fn cors_headers() -> BTreeMap<String, String> {
    CORS_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn format_timestamp(server_time: OffsetDateTime) -> String {
    let utc = server_time.to_offset(UtcOffset::UTC);
    utc.format(TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| utc.to_string())
}
