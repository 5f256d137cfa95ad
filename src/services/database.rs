//! # Database Access
//!
//! One short-lived connection per invocation, no pool. [`Database`] opens a
//! [`DbSession`]; the session runs the diagnostic query and is then closed by
//! the caller on every path.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Row};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::error::ProbeResult;
use crate::models::DbCredentials;
use crate::utils::constant::*;

#[async_trait]
pub trait Database: Send + Sync {
    /// Opens a new connection using the credential bundle verbatim.
    async fn connect(&self, credentials: &DbCredentials) -> ProbeResult<Box<dyn DbSession>>;
}

#[async_trait]
pub trait DbSession: Send {
    /// Runs the diagnostic query and returns the first row's server time.
    async fn server_time(&mut self) -> ProbeResult<OffsetDateTime>;

    /// Releases the connection.
    async fn close(self: Box<Self>) -> ProbeResult<()>;
}

/// PostgreSQL over the wire protocol.
#[derive(Debug, Default, Clone, Copy)]
pub struct PgDatabase;

pub fn connect_options(credentials: &DbCredentials) -> PgConnectOptions {
    let mut options = PgConnectOptions::new()
        .host(&credentials.host)
        .username(&credentials.username)
        .password(credentials.password.expose_secret());

    if let Some(port) = credentials.port {
        options = options.port(port);
    }
    if let Some(dbname) = &credentials.dbname {
        options = options.database(dbname);
    }

    options
}

#[async_trait]
impl Database for PgDatabase {
    #[instrument(skip_all, fields(host = %credentials.host, port = ?credentials.port))]
    async fn connect(&self, credentials: &DbCredentials) -> ProbeResult<Box<dyn DbSession>> {
        debug!("Opening database connection");
        let conn = PgConnection::connect_with(&connect_options(credentials)).await?;
        info!("Database connection established");
        Ok(Box::new(PgSession { conn }))
    }
}

struct PgSession {
    conn: PgConnection,
}

#[async_trait]
impl DbSession for PgSession {
    #[instrument(skip_all)]
    async fn server_time(&mut self) -> ProbeResult<OffsetDateTime> {
        let row = sqlx::query(PROBE_QUERY).fetch_one(&mut self.conn).await?;
        let server_time: OffsetDateTime = row.try_get(PROBE_COLUMN)?;
        debug!(%server_time, "Diagnostic query returned");
        Ok(server_time)
    }

    #[instrument(skip_all)]
    async fn close(self: Box<Self>) -> ProbeResult<()> {
        self.conn.close().await?;
        debug!("Database connection closed");
        Ok(())
    }
}
