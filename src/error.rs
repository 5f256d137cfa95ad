//! # Probe Errors
//!
//! Every way an invocation can fail. All variants collapse into the same 500
//! response at the boundary; the `Display` text becomes the response `details`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("secret identifier is not configured (SECRET_ARN is unset)")]
    MissingSecretId,

    /// The secret store rejected the request or could not be reached.
    #[error("{0}")]
    SecretStore(String),

    #[error("secret has no string value")]
    EmptySecret,

    #[error("{0}")]
    SecretParse(#[from] serde_json::Error),

    /// Connect, query, and disconnect failures alike.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
