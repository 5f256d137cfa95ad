//! # rds-probe - RDS Connectivity Check Function
//!
//! A Lambda function that reads PostgreSQL credentials from Secrets Manager,
//! connects, runs `SELECT NOW()`, and answers with an HTTP-shaped JSON response.
//!
//! ## Modules
//!
//! - [`handlers`] - The Lambda handler and the local HTTP shim
//! - [`models`] - Credentials, response, and shared state types
//! - [`services`] - Secret store and database interfaces with their implementations
//! - [`utils`] - Constants, environment helpers, and tracing setup

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::handlers::{health_check, invoke_probe, preflight};
use crate::models::AppState;
use crate::services::secret_store::{AwsSecretStore, LocalSecretStore, SecretStore};
use crate::utils::constant::*;
use crate::utils::secret::local_secret_payload;

/// Creates the router of the local HTTP shim.
///
/// - `GET /`, `POST /` - run one probe
/// - `OPTIONS /` - CORS preflight
/// - `GET /health-check` - liveness, no I/O
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(invoke_probe).post(invoke_probe).options(preflight),
        )
        .route("/health-check", get(health_check))
        .with_state(state)
}

/// Picks the secret store for this process.
///
/// Under Lambda this is always Secrets Manager. Elsewhere a payload from
/// `LOCAL_SECRET_FILE` or `LOCAL_SECRET` takes precedence when present.
pub fn secret_store_from_env(sdk_config: &aws_config::SdkConfig) -> Arc<dyn SecretStore> {
    if !is_lambda() {
        if let Some(payload) = local_secret_payload() {
            return Arc::new(LocalSecretStore::new(payload));
        }
    }
    Arc::new(AwsSecretStore::from_conf(sdk_config))
}

/// Whether the process runs inside a Lambda sandbox.
pub fn is_lambda() -> bool {
    std::env::var_os(LAMBDA_RUNTIME_API_VAR).is_some()
}
