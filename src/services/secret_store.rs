//! # Secret Store
//!
//! Source of the serialized database credentials. The trait keeps the handler
//! independent from AWS so tests and local runs can swap the backend.
//!
//! ## Implementations
//!
//! - [`AwsSecretStore`] - AWS Secrets Manager, used in every Lambda deployment
//! - [`LocalSecretStore`] - Fixed payload taken from the environment, for local development

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata};
use tracing::{debug, error, info, instrument};

use crate::error::{ProbeError, ProbeResult};

#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetches the string value of the secret named `secret_id`.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::SecretStore`] if the store rejects or fails the request
    /// - [`ProbeError::EmptySecret`] if the secret holds no string value
    async fn fetch_secret_string(&self, secret_id: &str) -> ProbeResult<String>;
}

/// Secrets Manager backed store.
///
/// Wraps one SDK client built at process start; the client is safe to share
/// between concurrent invocations.
pub struct AwsSecretStore {
    client: Client,
}

impl AwsSecretStore {
    pub fn new(client: Client) -> Self {
        info!("Initializing Secrets Manager secret store");
        Self { client }
    }

    pub fn from_conf(sdk_config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(sdk_config))
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    #[instrument(skip(self))]
    async fn fetch_secret_string(&self, secret_id: &str) -> ProbeResult<String> {
        debug!("Requesting secret value");

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| {
                let context = DisplayErrorContext(&e).to_string();
                let service_error = e.into_service_error();
                error!(error = %context, "GetSecretValue failed");

                // Prefer the service's own message ("Secrets Manager can't find the
                // specified secret."); dispatch and timeout errors have none.
                ProbeError::SecretStore(
                    service_error
                        .message()
                        .map(str::to_owned)
                        .unwrap_or(context),
                )
            })?;

        let secret = output
            .secret_string()
            .map(str::to_owned)
            .ok_or(ProbeError::EmptySecret)?;

        debug!("Secret value received");
        Ok(secret)
    }
}

/// Development store that returns the same payload for every identifier.
pub struct LocalSecretStore {
    payload: String,
}

impl LocalSecretStore {
    pub fn new(payload: String) -> Self {
        info!("Initializing local secret store (development only)");
        Self { payload }
    }
}

#[async_trait]
impl SecretStore for LocalSecretStore {
    #[instrument(skip(self))]
    async fn fetch_secret_string(&self, secret_id: &str) -> ProbeResult<String> {
        debug!("Serving secret from local payload");
        Ok(self.payload.clone())
    }
}
