//! # Local HTTP Shim
//!
//! Serves the probe over plain HTTP when the binary runs outside Lambda, so the
//! function can be exercised with curl during development.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use tracing::{debug, instrument, warn};

use crate::handlers::invoke;
use crate::models::{AppState, Response, cors_headers};

/// `GET /` and `POST /`: runs one probe and maps the response onto HTTP.
#[instrument(skip_all)]
pub async fn invoke_probe(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Local invocation");
    into_http(invoke(&state).await)
}

/// `GET /health-check`: liveness of the shim itself, no secret or database I/O.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Liveness check");
    StatusCode::OK
}

/// `OPTIONS /`: CORS preflight, answered without running a probe.
#[instrument]
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, header_map(&cors_headers()))
}

fn into_http(response: Response) -> impl IntoResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = header_map(&response.headers);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    (status, headers, response.body)
}

fn header_map(pairs: &BTreeMap<String, String>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!(%name, "Dropping header that is not valid HTTP"),
        }
    }
    headers
}
