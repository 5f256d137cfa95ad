//! # Application Constants
//!
//! Fixed strings that make up the response contract, plus the names of the
//! environment variables the function reads.

/// Diagnostic statement executed against the database on every invocation.
pub const PROBE_QUERY: &str = "SELECT NOW() as time";

/// Column of [`PROBE_QUERY`] holding the server time.
pub const PROBE_COLUMN: &str = "time";

/// Message carried by every successful response.
pub const SUCCESS_MESSAGE: &str = "Successfully connected to RDS!";

/// Message carried by every failed response, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to connect to database or fetch secret.";

/// Cross-origin headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
];

/// Identifier of the secret holding the database credentials.
pub const SECRET_ARN_VAR: &str = "SECRET_ARN";

/// Development-only credential bundle, served instead of Secrets Manager.
pub const LOCAL_SECRET_VAR: &str = "LOCAL_SECRET";

/// Path to a file holding the development credential bundle.
pub const LOCAL_SECRET_FILE_VAR: &str = "LOCAL_SECRET_FILE";

/// Bind address of the local HTTP shim.
pub const LOCAL_BIND_ADDR_VAR: &str = "LOCAL_BIND_ADDR";

pub const DEFAULT_LOCAL_BIND_ADDR: &str = "0.0.0.0:8090";

/// Set by the Lambda platform in every function sandbox.
pub const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// `json` or `pretty`; overrides the log format picked from the environment.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
