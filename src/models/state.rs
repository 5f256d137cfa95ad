use std::env;
use std::sync::Arc;

use tracing::{info, warn};

use crate::services::database::Database;
use crate::services::secret_store::SecretStore;
use crate::utils::constant::*;

/// Process-wide state shared by every invocation. Read-only after start-up.
pub struct AppState {
    /// Identifier of the credential secret, from `SECRET_ARN`.
    pub secret_id: Option<String>,
    /// Built once at start; issues independent requests per invocation.
    pub secret_store: Arc<dyn SecretStore>,
    pub database: Arc<dyn Database>,
}

impl AppState {
    pub fn new(
        secret_id: Option<String>,
        secret_store: Arc<dyn SecretStore>,
        database: Arc<dyn Database>,
    ) -> Self {
        info!(secret_id = ?secret_id, "Initializing application state");
        Self {
            secret_id,
            secret_store,
            database,
        }
    }

    /// Like [`AppState::new`], taking the secret identifier from `SECRET_ARN`.
    pub fn from_env(secret_store: Arc<dyn SecretStore>, database: Arc<dyn Database>) -> Self {
        let secret_id = env::var(SECRET_ARN_VAR).ok();
        if secret_id.is_none() {
            warn!("Env variable `SECRET_ARN` is not set; every invocation will fail");
        }
        Self::new(secret_id, secret_store, database)
    }
}
