#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use rds_probe::error::{ProbeError, ProbeResult};
use rds_probe::models::{AppState, DbCredentials};
use rds_probe::services::database::{Database, DbSession};
use rds_probe::services::secret_store::SecretStore;
use time::{Duration, OffsetDateTime, macros::datetime};
use tokio::net::TcpListener;

pub const SECRET_ID: &str = "arn:aws:secretsmanager:eu-west-1:123456789012:secret:rds-creds";

pub const VALID_SECRET: &str = r#"{
    "host": "db.internal",
    "username": "probe",
    "password": "s3cret",
    "port": 5432,
    "dbname": "app"
}"#;

/// Time reported by [`MockDatabase`] for its first query.
pub const SERVER_TIME: OffsetDateTime = datetime!(2024-05-17 08:30:00.250 UTC);

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("rds_probe=debug")
            .with_test_writer()
            .init();
    });
}

#[derive(Debug, Clone)]
pub enum SecretReply {
    Payload(String),
    Fail(String),
    Empty,
}

/// Secret store double that records the identifiers it was asked for.
#[derive(Debug)]
pub struct MockSecretStore {
    reply: SecretReply,
    requested: std::sync::Mutex<Vec<String>>,
}

impl MockSecretStore {
    pub fn new(reply: SecretReply) -> Self {
        Self {
            reply,
            requested: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn valid() -> Self {
        Self::new(SecretReply::Payload(VALID_SECRET.to_string()))
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn fetch_secret_string(&self, secret_id: &str) -> ProbeResult<String> {
        self.requested.lock().unwrap().push(secret_id.to_string());
        match &self.reply {
            SecretReply::Payload(payload) => Ok(payload.clone()),
            SecretReply::Fail(message) => Err(ProbeError::SecretStore(message.clone())),
            SecretReply::Empty => Err(ProbeError::EmptySecret),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBehavior {
    Healthy,
    ConnectFails,
    QueryFails,
    CloseFails,
    QueryAndCloseFail,
}

/// Database double counting opened and closed connections.
///
/// Each successful query reports [`SERVER_TIME`] plus one second per earlier query.
#[derive(Debug)]
pub struct MockDatabase {
    behavior: DbBehavior,
    opens: AtomicUsize,
    closes: Arc<AtomicUsize>,
    queries: Arc<AtomicUsize>,
    last_host: std::sync::Mutex<Option<String>>,
}

impl MockDatabase {
    pub fn new(behavior: DbBehavior) -> Self {
        Self {
            behavior,
            opens: AtomicUsize::new(0),
            closes: Arc::new(AtomicUsize::new(0)),
            queries: Arc::new(AtomicUsize::new(0)),
            last_host: std::sync::Mutex::new(None),
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn last_host(&self) -> Option<String> {
        self.last_host.lock().unwrap().clone()
    }
}

#[async_trait]
impl Database for MockDatabase {
    async fn connect(&self, credentials: &DbCredentials) -> ProbeResult<Box<dyn DbSession>> {
        *self.last_host.lock().unwrap() = Some(credentials.host.clone());

        if self.behavior == DbBehavior::ConnectFails {
            return Err(ProbeError::Database(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "Connection refused (os error 111)",
            ))));
        }

        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            behavior: self.behavior,
            closes: Arc::clone(&self.closes),
            queries: Arc::clone(&self.queries),
        }))
    }
}

struct MockSession {
    behavior: DbBehavior,
    closes: Arc<AtomicUsize>,
    queries: Arc<AtomicUsize>,
}

#[async_trait]
impl DbSession for MockSession {
    async fn server_time(&mut self) -> ProbeResult<OffsetDateTime> {
        match self.behavior {
            DbBehavior::QueryFails | DbBehavior::QueryAndCloseFail => Err(ProbeError::Database(
                sqlx::Error::Protocol("canceling statement due to statement timeout".into()),
            )),
            _ => {
                let n = self.queries.fetch_add(1, Ordering::SeqCst);
                Ok(SERVER_TIME + Duration::seconds(n as i64))
            }
        }
    }

    async fn close(self: Box<Self>) -> ProbeResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            DbBehavior::CloseFails | DbBehavior::QueryAndCloseFail => Err(ProbeError::Database(
                sqlx::Error::Protocol("terminate message could not be sent".into()),
            )),
            _ => Ok(()),
        }
    }
}

pub fn state_with(
    secret_id: Option<&str>,
    store: Arc<MockSecretStore>,
    database: Arc<MockDatabase>,
) -> AppState {
    AppState::new(secret_id.map(str::to_string), store, database)
}

/// Spawns the local HTTP shim on a random port.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(state: AppState) -> String {
    init_tracing_once();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, rds_probe::app(Arc::new(state)))
            .await
            .unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}
