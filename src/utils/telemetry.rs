//! # Tracing Setup
//!
//! Inside Lambda, logs go to CloudWatch as one JSON object per line (bunyan
//! format). Locally, a human-readable formatter is used instead.

use std::env;

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::constant::*;

const DEFAULT_FILTER: &str = "info,rds_probe=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Picks the format from `LOG_FORMAT`, falling back to JSON under Lambda
    /// and pretty output everywhere else.
    pub fn from_env() -> Self {
        match env::var(LOG_FORMAT_VAR)
            .map(|v| v.to_ascii_lowercase())
            .as_deref()
        {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ if env::var_os(LAMBDA_RUNTIME_API_VAR).is_some() => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Installs the global subscriber. Must be called once, before any handler runs.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    env!("CARGO_PKG_NAME").to_string(),
                    std::io::stdout,
                ))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .init();
        }
    }
}
