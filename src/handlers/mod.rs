//! # Request Handlers
//!
//! ## Available Handlers
//!
//! - **Probe** (`probe`) - The Lambda handler and the fetch/connect/query chain behind it
//! - **Local** (`local`) - HTTP adapters and liveness check used when running outside Lambda

mod local;
mod probe;

pub use local::*;
pub use probe::*;
