//! # Utility Modules
//!
//! Constants, environment helpers, and tracing setup shared by the handler
//! and the binary.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Response contract strings and environment variable names
//! - **Secret** (`secret`) - Reading values from env variables or mounted files
//! - **Telemetry** (`telemetry`) - Global tracing subscriber setup

pub mod constant;
pub mod secret;
pub mod telemetry;
