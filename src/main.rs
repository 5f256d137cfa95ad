use std::env;
use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use rds_probe::handlers::handler;
use rds_probe::models::AppState;
use rds_probe::services::database::PgDatabase;
use rds_probe::utils::constant::*;
use rds_probe::utils::telemetry::{LogFormat, init_tracing};
use rds_probe::{app, is_lambda, secret_store_from_env};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::from_env());

    let sdk_config = aws_config::load_from_env().await;
    let state = Arc::new(AppState::from_env(
        secret_store_from_env(&sdk_config),
        Arc::new(PgDatabase),
    ));

    if is_lambda() {
        info!("Starting Lambda runtime");
        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
            let state = Arc::clone(&state);
            async move { handler(&state, event).await }
        }))
        .await
    } else {
        let addr =
            env::var(LOCAL_BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_LOCAL_BIND_ADDR.to_string());
        let listener = TcpListener::bind(&addr).await?;
        info!(%addr, "Serving local HTTP shim");

        axum::serve(listener, app(state)).await?;
        Ok(())
    }
}
