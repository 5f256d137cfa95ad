//! # Probe Handler
//!
//! Fetches the database credentials, connects, asks the server for its
//! current time, and reports the outcome. Every failure is turned into a 500
//! [`Response`]; the platform never sees an error from [`handler`].

use lambda_runtime::LambdaEvent;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{ProbeError, ProbeResult};
use crate::models::{AppState, DbCredentials, Response};

/// Runs the fetch → parse → connect → query chain, stopping at the first failure.
///
/// A connection that was opened is closed before returning, including when the
/// query fails. If both the query and the close fail, the query error wins.
#[instrument(skip_all)]
pub async fn probe(state: &AppState) -> ProbeResult<OffsetDateTime> {
    let secret_id = state
        .secret_id
        .as_deref()
        .ok_or(ProbeError::MissingSecretId)?;

    let raw_secret = state.secret_store.fetch_secret_string(secret_id).await?;
    debug!("Secret fetched");

    let credentials = DbCredentials::from_json(&raw_secret)?;
    debug!(host = %credentials.host, "Credentials parsed");

    let mut session = state.database.connect(&credentials).await?;

    let queried = session.server_time().await;
    let closed = session.close().await;

    match (queried, closed) {
        (Ok(server_time), Ok(())) => Ok(server_time),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(query_err), Ok(())) => Err(query_err),
        (Err(query_err), Err(close_err)) => {
            warn!(error = %close_err, "Failed to close connection after query error");
            Err(query_err)
        }
    }
}

/// Runs one probe and converts the outcome to a response, logging failures.
pub async fn invoke(state: &AppState) -> Response {
    let result = probe(state).await;

    match &result {
        Ok(server_time) => info!(%server_time, "Probe succeeded"),
        Err(e) => error!(error = %e, "Probe failed"),
    }

    Response::from_probe(&result)
}

/// Lambda entry point. The event payload is ignored.
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Response, lambda_runtime::Error> {
    Ok(invoke(state).await)
}
