mod credentials;
mod response;
mod state;

pub use credentials::DbCredentials;
pub use response::{ErrorBody, Response, SuccessBody, cors_headers, format_timestamp};
pub use state::AppState;
